use crate::launcher::{
    AimLines, AimRay, BallLaunched, BallLauncher, DragPhase, LaunchBody, PointerSnapshot,
    ScreenRayCaster,
};
use crate::render::AimLine;
use crate::styling::Theme;
use crate::MainCamera;
use anyhow::bail;
use bevy::app::AppExit;
use bevy::prelude::*;
use bevy_rapier::dynamics::{ExternalImpulse, Velocity};

pub struct ViewportRayCaster<'a> {
    camera: &'a Camera,
    transform: &'a GlobalTransform,
}

impl<'a> ViewportRayCaster<'a> {
    pub fn new(camera: &'a Camera, transform: &'a GlobalTransform) -> Self {
        Self { camera, transform }
    }
}

impl ScreenRayCaster for ViewportRayCaster<'_> {
    fn world_position(&self) -> Vec3 {
        self.transform.translation()
    }

    // Bevy rays already start on the near plane, in front of the camera, so
    // the requested depth does not move the origin any further.
    fn screen_ray(&self, screen: Vec3) -> Option<AimRay> {
        self.camera
            .viewport_to_world(self.transform, screen.truncate())
            .map(|ray| AimRay::new(ray.origin, *ray.direction))
    }
}

pub struct RapierLaunchBody<'a> {
    pub position: Vec3,
    pub velocity: Mut<'a, Velocity>,
    pub impulse: Mut<'a, ExternalImpulse>,
}

impl LaunchBody for RapierLaunchBody<'_> {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_linear_velocity(&mut self, linvel: Vec3) {
        self.velocity.linvel = linvel;
    }

    fn apply_impulse(&mut self, impulse: Vec3) {
        self.impulse.impulse += impulse;
    }
}

pub fn handle_launch_drag(
    pointer: Res<PointerSnapshot>,
    mut launched: EventWriter<BallLaunched>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut launchers: Query<(
        Entity,
        &mut BallLauncher,
        &Transform,
        &mut Velocity,
        &mut ExternalImpulse,
    )>,
    mut lines: Query<&mut AimLine>,
) {
    let camera = cameras
        .get_single()
        .ok()
        .map(|(camera, transform)| ViewportRayCaster::new(camera, transform));

    for (entity, mut launcher, transform, velocity, impulse) in launchers.iter_mut() {
        let launcher = &mut *launcher;
        let phase = launcher.controller.phase();

        // Clicks on the UI must not start a drag.
        if phase == DragPhase::Idle && !pointer.inputs_enabled {
            continue;
        }

        let Ok([mut drag_line, mut prediction_line]) =
            lines.get_many_mut([launcher.drag_line, launcher.prediction_line])
        else {
            continue;
        };

        let mut aim_lines = AimLines {
            drag: &mut drag_line,
            prediction: &mut prediction_line,
        };
        let mut body = RapierLaunchBody {
            position: transform.translation,
            velocity,
            impulse,
        };

        let launch = launcher.controller.update_frame(
            &*pointer,
            camera.as_ref(),
            &mut aim_lines,
            &mut body,
        );

        if phase == DragPhase::Idle && launcher.controller.phase() == DragPhase::Dragging {
            log::debug!("started dragging {:?}", entity);
        }

        if let Some(launch) = launch {
            launched.send(BallLaunched {
                entity,
                direction: launch.direction,
                length: launch.length,
                impulse: launch.impulse,
            });
        }
    }
}

pub fn log_launches(mut launched: EventReader<BallLaunched>) {
    for launch in launched.read() {
        log::info!(
            "launched {:?} with impulse {} (drag length: {:.3})",
            launch.entity,
            launch.impulse,
            launch.length
        );
    }
}

pub fn draw_aim_marker(mut gizmos: Gizmos, theme: Res<Theme>, launchers: Query<&BallLauncher>) {
    for launcher in launchers.iter() {
        if launcher.controller.config().debug_overlay {
            gizmos.sphere(
                launcher.controller.state().mouse_world_position,
                Quat::IDENTITY,
                0.4,
                theme.aim_marker_color(),
            );
        }
    }
}

/// Stops the app if a launcher misses one of the components it drives.
pub fn validate_launchers(
    launchers: Query<(Entity, &BallLauncher, Has<Velocity>, Has<ExternalImpulse>)>,
    lines: Query<(), With<AimLine>>,
    mut exit: EventWriter<AppExit>,
) {
    for (entity, launcher, has_velocity, has_impulse) in launchers.iter() {
        if let Err(err) = check_launcher(entity, launcher, has_velocity && has_impulse, |line| {
            lines.contains(line)
        }) {
            log::error!("invalid launcher setup: {:#}", err);
            exit.send(AppExit::error());
        }
    }
}

fn check_launcher(
    entity: Entity,
    launcher: &BallLauncher,
    has_rigid_body: bool,
    is_line: impl Fn(Entity) -> bool,
) -> anyhow::Result<()> {
    if !has_rigid_body {
        bail!(
            "{:?} needs both a Velocity and an ExternalImpulse to be launched",
            entity
        );
    }

    for (name, line) in [
        ("drag", launcher.drag_line),
        ("prediction", launcher.prediction_line),
    ] {
        if !is_line(line) {
            bail!("the {} line {:?} of {:?} is not an AimLine", name, line, entity);
        }
    }

    Ok(())
}
