use super::plane::{AimPlane, AimProjection, AimRay};
use super::LaunchConfig;
use bevy::prelude::*;

/// Mouse state sampled once per frame.
pub trait PointerInput {
    /// The primary button is currently down.
    fn primary_held(&self) -> bool;
    /// The primary button went up during this frame.
    fn primary_released(&self) -> bool;
    /// Pointer position, in window coordinates.
    fn screen_position(&self) -> Vec2;
    /// Pointer motion since the previous frame.
    fn motion_delta(&self) -> Vec2;
}

pub trait ScreenRayCaster {
    fn world_position(&self) -> Vec3;
    /// Ray going from the camera through `screen.xy`, starting `screen.z`
    /// units in front of the camera.
    fn screen_ray(&self, screen: Vec3) -> Option<AimRay>;
}

/// A two-point line renderer.
pub trait LineSink {
    /// Enables the line and sets its two end points.
    fn draw(&mut self, start: Vec3, end: Vec3);
    /// Disables the line and removes its points.
    fn erase(&mut self);
}

/// The rigid-body receiving the launch.
pub trait LaunchBody {
    fn position(&self) -> Vec3;
    fn set_linear_velocity(&mut self, linvel: Vec3);
    fn apply_impulse(&mut self, impulse: Vec3);
}

pub struct AimLines<'a, L> {
    pub drag: &'a mut L,
    pub prediction: &'a mut L,
}

impl<'a, L: LineSink> AimLines<'a, L> {
    pub fn erase(&mut self) {
        self.drag.erase();
        self.prediction.erase();
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragState {
    /// From the pointer hit back to the body.
    pub drag_direction: Vec3,
    pub drag_length: f32,
    /// Last successful hit of the pointer ray on the aim plane.
    pub mouse_world_position: Vec3,
}

/// The impulse handed to the body on release.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Launch {
    pub direction: Vec3,
    pub length: f32,
    pub impulse: Vec3,
}

/// Drag-to-launch state machine.
///
/// While the primary button is held, every frame with pointer motion casts the
/// pointer ray on the aim plane going through the body, and draws the drag
/// line (body to pointer) and the prediction line (body to the pointer
/// mirrored through the body). Releasing the button launches the body along
/// the drag direction and erases both lines.
#[derive(Clone, Debug)]
pub struct DragLaunchController {
    config: LaunchConfig,
    phase: DragPhase,
    state: DragState,
    aim_plane: Option<AimPlane>,
}

impl DragLaunchController {
    pub fn new(config: LaunchConfig) -> Self {
        Self {
            config,
            phase: DragPhase::Idle,
            state: DragState::default(),
            aim_plane: None,
        }
    }

    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut LaunchConfig {
        &mut self.config
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn drag_direction(&self) -> Vec3 {
        self.state.drag_direction
    }

    pub fn drag_length(&self) -> f32 {
        self.state.drag_length
    }

    pub fn aim_plane(&self) -> Option<&AimPlane> {
        self.aim_plane.as_ref()
    }

    /// Advances the state machine by one frame.
    ///
    /// Returns the launch that happened during this frame, if any.
    pub fn update_frame<C, L, B>(
        &mut self,
        input: &impl PointerInput,
        camera: Option<&C>,
        lines: &mut AimLines<L>,
        body: &mut B,
    ) -> Option<Launch>
    where
        C: ScreenRayCaster,
        L: LineSink,
        B: LaunchBody,
    {
        if input.primary_held() {
            if self.phase == DragPhase::Idle {
                self.begin_drag();
            }

            if input.motion_delta() != Vec2::ZERO {
                self.update_aim(input.screen_position(), camera, lines, body.position());
            }
        }

        if input.primary_released() && self.phase == DragPhase::Dragging {
            let launch = self.launch(body);
            lines.erase();
            self.phase = DragPhase::Idle;
            return Some(launch);
        }

        None
    }

    /// Drops the drag in progress, if any, without launching.
    pub fn cancel<L: LineSink>(&mut self, lines: &mut AimLines<L>) {
        lines.erase();
        self.phase = DragPhase::Idle;
    }

    fn begin_drag(&mut self) {
        self.phase = DragPhase::Dragging;

        if self.config.reset_on_press {
            self.state.drag_direction = Vec3::ZERO;
            self.state.drag_length = 0.0;
            self.state.mouse_world_position = Vec3::ZERO;
        }
    }

    fn update_aim<C: ScreenRayCaster, L: LineSink>(
        &mut self,
        screen_position: Vec2,
        camera: Option<&C>,
        lines: &mut AimLines<L>,
        body_position: Vec3,
    ) {
        let plane = self.update_aim_plane(body_position);

        let Some(camera) = camera else {
            self.state.drag_direction = Vec3::ZERO;
            self.state.drag_length = 0.0;
            return;
        };

        let screen = screen_position.extend(-camera.world_position().z);
        let Some(ray) = camera.screen_ray(screen) else {
            return;
        };
        let Some(toi) = plane.cast_ray(&ray) else {
            return;
        };

        let projection = AimProjection::from_hit(plane.mode, body_position, ray.point_at(toi));
        lines
            .drag
            .draw(body_position, projection.mouse_world_position);
        lines
            .prediction
            .draw(body_position, projection.inverse_position);

        self.state.mouse_world_position = projection.mouse_world_position;
        self.state.drag_direction = projection.drag_direction;
        self.state.drag_length = projection.drag_length;
    }

    fn update_aim_plane(&mut self, body_position: Vec3) -> AimPlane {
        let mode = self.config.drag_mode;

        match self.aim_plane {
            Some(plane) if plane.is_valid_for(mode, body_position) => plane,
            _ => {
                let plane = AimPlane::new(mode, body_position);
                self.aim_plane = Some(plane);
                plane
            }
        }
    }

    fn launch(&mut self, body: &mut impl LaunchBody) -> Launch {
        let impulse = self.state.drag_direction * self.config.launch_force;
        body.set_linear_velocity(Vec3::ZERO);
        body.apply_impulse(impulse);

        Launch {
            direction: self.state.drag_direction,
            length: self.state.drag_length,
            impulse,
        }
    }
}
