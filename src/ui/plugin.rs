use super::UiState;
use crate::launcher::LaunchSystems;
use bevy::prelude::*;

/// Plugin responsible for the UI showing and tuning the launcher.
pub struct LaunchUiPlugin;

impl Plugin for LaunchUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(bevy_egui::EguiPlugin)
            .insert_resource(UiState::default())
            .add_systems(
                PreUpdate,
                super::focus_ui.after(LaunchSystems::TrackPointer),
            )
            .add_systems(Update, super::update_ui.before(LaunchSystems::Aim))
            .add_systems(Update, super::count_launches.after(LaunchSystems::Aim))
            .add_systems(Update, super::handle_keyboard_inputs);
    }
}
