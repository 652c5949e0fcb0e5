pub use self::aim_line::*;
pub use self::plugins::*;

mod aim_line;
mod plugins;
