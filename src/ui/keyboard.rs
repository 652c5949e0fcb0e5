use crate::builtin_scenes::LaunchPad;
use crate::launcher::{AimLines, BallLauncher};
use crate::render::AimLine;
use bevy::prelude::*;
use bevy_rapier::dynamics::{ExternalImpulse, Velocity};

pub fn handle_keyboard_inputs(
    keys: Res<ButtonInput<KeyCode>>,
    mut launchers: Query<(Entity, &mut BallLauncher, Has<LaunchPad>)>,
    mut pads: Query<(
        &LaunchPad,
        &mut Transform,
        &mut Velocity,
        &mut ExternalImpulse,
    )>,
    mut lines: Query<&mut AimLine>,
) {
    if keys.just_released(KeyCode::Tab) {
        for (_, mut launcher, _) in launchers.iter_mut() {
            let config = launcher.controller.config_mut();
            config.drag_mode = config.drag_mode.next();
            log::info!("drag mode: {}", config.drag_mode.label());
        }
    }

    if keys.just_released(KeyCode::KeyR) {
        for (entity, mut launcher, has_pad) in launchers.iter_mut() {
            if !has_pad {
                continue;
            }

            if let Ok([mut drag, mut prediction]) =
                lines.get_many_mut([launcher.drag_line, launcher.prediction_line])
            {
                launcher.controller.cancel(&mut AimLines {
                    drag: &mut drag,
                    prediction: &mut prediction,
                });
            }
        }

        for (pad, mut transform, mut velocity, mut impulse) in pads.iter_mut() {
            *transform = Transform::from_translation(pad.spawn_point);
            *velocity = Velocity::zero();
            *impulse = ExternalImpulse::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::{
        AimRay, DragPhase, LaunchBody, LaunchConfig, LineSink, PointerSnapshot, ScreenRayCaster,
    };

    struct NoRay;

    impl ScreenRayCaster for NoRay {
        fn world_position(&self) -> Vec3 {
            Vec3::ZERO
        }

        fn screen_ray(&self, _screen: Vec3) -> Option<AimRay> {
            None
        }
    }

    struct Pinned(Vec3);

    impl LaunchBody for Pinned {
        fn position(&self) -> Vec3 {
            self.0
        }

        fn set_linear_velocity(&mut self, _linvel: Vec3) {}

        fn apply_impulse(&mut self, _impulse: Vec3) {}
    }

    #[test]
    fn reset_cancels_the_drag_and_moves_the_ball_back() {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .add_systems(Update, handle_keyboard_inputs);

        let mut drag = AimLine::default();
        drag.draw(Vec3::ZERO, Vec3::X);
        let mut prediction = AimLine::default();
        prediction.draw(Vec3::ZERO, Vec3::NEG_X);
        let drag = app.world_mut().spawn(drag).id();
        let prediction = app.world_mut().spawn(prediction).id();

        // Start a drag without pointer motion.
        let mut launcher = BallLauncher::new(LaunchConfig::default(), drag, prediction);
        let held = PointerSnapshot {
            held: true,
            ..Default::default()
        };
        let mut still = (AimLine::default(), AimLine::default());
        launcher.controller.update_frame(
            &held,
            None::<&NoRay>,
            &mut AimLines {
                drag: &mut still.0,
                prediction: &mut still.1,
            },
            &mut Pinned(Vec3::new(4.0, 0.5, -2.0)),
        );
        assert_eq!(launcher.controller.phase(), DragPhase::Dragging);

        let spawn_point = Vec3::new(0.0, 0.5, 0.0);
        let ball = app
            .world_mut()
            .spawn((
                launcher,
                LaunchPad { spawn_point },
                Transform::from_xyz(4.0, 0.5, -2.0),
                Velocity::linear(Vec3::X),
                ExternalImpulse::default(),
            ))
            .id();

        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.press(KeyCode::KeyR);
        keys.release(KeyCode::KeyR);
        app.update();

        let world = app.world();
        assert_eq!(
            world.get::<BallLauncher>(ball).unwrap().controller.phase(),
            DragPhase::Idle
        );
        assert!(!world.get::<AimLine>(drag).unwrap().is_enabled());
        assert!(!world.get::<AimLine>(prediction).unwrap().is_enabled());
        assert_eq!(
            world.get::<Transform>(ball).unwrap().translation,
            spawn_point
        );
        assert_eq!(world.get::<Velocity>(ball).unwrap().linvel, Vec3::ZERO);
    }
}
