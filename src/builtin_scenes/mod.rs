pub use self::launch_pad::{init_launch_pad, LaunchPad};

mod launch_pad;
