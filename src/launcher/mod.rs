use bevy::input::InputSystem;
use bevy::prelude::*;
use strum_macros::EnumIter;

pub use self::controller::{
    AimLines, DragLaunchController, DragPhase, LaunchBody, LineSink, PointerInput,
    ScreenRayCaster,
};
pub use self::mouse::PointerSnapshot;
pub use self::plane::AimRay;

mod controller;
mod mouse;
mod plane;

/// The world plane a drag is projected onto.
///
/// Each mode locks one coordinate axis: the aim plane goes through the body
/// and keeps that coordinate constant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumIter, clap::ValueEnum)]
pub enum DragMode {
    #[value(name = "xy")]
    XY,
    #[default]
    #[value(name = "xz")]
    XZ,
    #[value(name = "zy")]
    ZY,
}

impl DragMode {
    /// Index of the coordinate kept constant on the aim plane.
    pub fn locked_axis(self) -> usize {
        match self {
            Self::XY => 2,
            Self::XZ => 1,
            Self::ZY => 0,
        }
    }

    pub fn plane_normal(self) -> Vec3 {
        match self {
            Self::XY => Vec3::NEG_Z,
            Self::XZ => Vec3::NEG_Y,
            Self::ZY => Vec3::NEG_X,
        }
    }

    /// Copies the locked coordinate of `reference` into `point`.
    pub fn snap(self, point: Vec3, reference: Vec3) -> Vec3 {
        let axis = self.locked_axis();
        let mut snapped = point;
        snapped[axis] = reference[axis];
        snapped
    }

    pub fn next(self) -> Self {
        match self {
            Self::XY => Self::XZ,
            Self::XZ => Self::ZY,
            Self::ZY => Self::XY,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::XY => "XY",
            Self::XZ => "XZ",
            Self::ZY => "ZY",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Resource)]
pub struct LaunchConfig {
    /// Scale applied to the drag direction to get the launch impulse.
    pub launch_force: f32,
    pub drag_mode: DragMode,
    /// Forget the previous drag when a new one starts.
    pub reset_on_press: bool,
    /// Draw a marker sphere at the last pointer hit.
    pub debug_overlay: bool,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            launch_force: 10.0,
            drag_mode: DragMode::XZ,
            reset_on_press: false,
            debug_overlay: false,
        }
    }
}

/// A ball that can be aimed with the mouse and launched on release.
#[derive(Component)]
pub struct BallLauncher {
    pub controller: DragLaunchController,
    pub drag_line: Entity,
    pub prediction_line: Entity,
}

impl BallLauncher {
    pub fn new(config: LaunchConfig, drag_line: Entity, prediction_line: Entity) -> Self {
        Self {
            controller: DragLaunchController::new(config),
            drag_line,
            prediction_line,
        }
    }
}

/// Emitted once per release, after the impulse was handed to the rigid-body.
#[derive(Copy, Clone, Debug, PartialEq, Event)]
pub struct BallLaunched {
    pub entity: Entity,
    pub direction: Vec3,
    pub length: f32,
    pub impulse: Vec3,
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum LaunchSystems {
    /// Sample the mouse state for this frame.
    TrackPointer,
    /// Run the drag-to-launch state machine.
    Aim,
}

pub struct LaunchPlugin;

impl Plugin for LaunchPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(PointerSnapshot::default())
            .add_event::<BallLaunched>()
            .configure_sets(PreUpdate, LaunchSystems::TrackPointer.after(InputSystem))
            .configure_sets(Update, LaunchSystems::Aim)
            .add_systems(PostStartup, mouse::validate_launchers)
            .add_systems(
                PreUpdate,
                mouse::track_pointer.in_set(LaunchSystems::TrackPointer),
            )
            .add_systems(
                Update,
                (mouse::handle_launch_drag, mouse::draw_aim_marker)
                    .chain()
                    .in_set(LaunchSystems::Aim),
            )
            .add_systems(Update, mouse::log_launches.after(LaunchSystems::Aim));
    }
}
