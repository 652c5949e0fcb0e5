use crate::launcher::PointerInput;
use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Left-button and cursor state for the current frame.
#[derive(Copy, Clone, Debug, Resource)]
pub struct PointerSnapshot {
    pub held: bool,
    pub released: bool,
    /// Last known cursor position, in window coordinates.
    pub position: Vec2,
    pub delta: Vec2,
    /// Cleared while the UI wants the mouse. No drag starts while cleared.
    pub inputs_enabled: bool,
}

impl Default for PointerSnapshot {
    fn default() -> Self {
        Self {
            held: false,
            released: false,
            position: Vec2::ZERO,
            delta: Vec2::ZERO,
            inputs_enabled: true,
        }
    }
}

impl PointerInput for PointerSnapshot {
    fn primary_held(&self) -> bool {
        self.held
    }

    fn primary_released(&self) -> bool {
        self.released
    }

    fn screen_position(&self) -> Vec2 {
        self.position
    }

    fn motion_delta(&self) -> Vec2 {
        self.delta
    }
}

pub fn track_pointer(
    mut pointer: ResMut<PointerSnapshot>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut motions: EventReader<MouseMotion>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    // A press and release within the same frame still reads as held.
    pointer.held = mouse.pressed(MouseButton::Left) || mouse.just_pressed(MouseButton::Left);
    pointer.released = mouse.just_released(MouseButton::Left);
    pointer.delta = motions.read().map(|motion| motion.delta).sum();

    if let Some(cursor) = windows
        .get_single()
        .ok()
        .and_then(|window| window.cursor_position())
    {
        pointer.position = cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<MouseButton>>()
            .add_event::<MouseMotion>()
            .insert_resource(PointerSnapshot::default())
            .add_systems(Update, track_pointer);
        app
    }

    #[test]
    fn motion_events_are_summed_per_frame() {
        let mut app = app();
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.world_mut().send_event(MouseMotion {
            delta: Vec2::new(1.0, 2.0),
        });
        app.world_mut().send_event(MouseMotion {
            delta: Vec2::new(0.5, -1.0),
        });
        app.update();

        let pointer = *app.world().resource::<PointerSnapshot>();
        assert!(pointer.held);
        assert!(!pointer.released);
        assert_eq!(pointer.delta, Vec2::new(1.5, 1.0));

        app.update();
        assert_eq!(app.world().resource::<PointerSnapshot>().delta, Vec2::ZERO);
    }

    #[test]
    fn click_within_one_frame_is_held_and_released() {
        let mut app = app();
        let mut buttons = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
        buttons.press(MouseButton::Left);
        buttons.release(MouseButton::Left);
        app.update();

        let pointer = app.world().resource::<PointerSnapshot>();
        assert!(pointer.held);
        assert!(pointer.released);
    }

    #[test]
    fn release_edge_is_reported() {
        let mut app = app();
        let mut buttons = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
        buttons.press(MouseButton::Left);
        buttons.clear();
        buttons.release(MouseButton::Left);
        app.update();

        let pointer = app.world().resource::<PointerSnapshot>();
        assert!(!pointer.held);
        assert!(pointer.released);
    }
}
