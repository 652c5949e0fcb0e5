pub use self::drag::{draw_aim_marker, handle_launch_drag, log_launches, validate_launchers};
pub use self::track::{track_pointer, PointerSnapshot};

mod drag;
mod track;
