pub use self::plugin::{StylingPlugin, Theme};

pub(self) mod dark_mode;
mod plugin;
