pub use self::rigid_body_collider_bundles::*;

mod rigid_body_collider_bundles;
