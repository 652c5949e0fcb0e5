use crate::follow::FollowConfig;
use crate::launcher::{DragMode, LaunchConfig};
use anyhow::bail;
use bevy::prelude::*;
use clap::Parser;

#[derive(Parser, Debug, Copy, Clone, Resource)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Scale applied to the drag vector to get the launch impulse.
    #[arg(long, default_value_t = 10.0)]
    pub launch_force: f32,
    /// Plane the drag is projected on.
    #[arg(long, value_enum, default_value_t = DragMode::XZ)]
    pub drag_mode: DragMode,
    /// Distance kept between the camera and the ball.
    #[arg(long, default_value_t = 12.0)]
    pub offset_length: f32,
    /// Forget the previous drag when a new one starts.
    #[arg(long, default_value_t = false)]
    pub reset_on_press: bool,
    /// Draw a marker at the point under the mouse.
    #[arg(long, default_value_t = false)]
    pub debug_overlay: bool,
    #[arg(long, default_value_t = false)]
    pub lower_graphics: bool,
}

impl CliArgs {
    pub fn launch_config(&self) -> anyhow::Result<LaunchConfig> {
        if !self.launch_force.is_finite() {
            bail!("the launch force must be finite, got {}", self.launch_force);
        }

        Ok(LaunchConfig {
            launch_force: self.launch_force,
            drag_mode: self.drag_mode,
            reset_on_press: self.reset_on_press,
            debug_overlay: self.debug_overlay,
        })
    }

    pub fn follow_config(&self) -> anyhow::Result<FollowConfig> {
        if !self.offset_length.is_finite() || self.offset_length < 0.0 {
            bail!(
                "the camera offset length must be a non-negative number, got {}",
                self.offset_length
            );
        }

        Ok(FollowConfig {
            offset_length: self.offset_length,
        })
    }
}
