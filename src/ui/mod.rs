use crate::launcher::{BallLaunched, BallLauncher};
use crate::styling::Theme;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

pub use self::plugin::LaunchUiPlugin;
pub(self) use input_blocking::focus_ui;
pub(self) use keyboard::handle_keyboard_inputs;
pub use ui_state::UiState;

mod input_blocking;
mod keyboard;
mod launch_infos;
mod plugin;
mod ui_state;

pub fn update_ui(
    mut ui_context: EguiContexts,
    mut ui_state: ResMut<UiState>,
    mut theme: ResMut<Theme>,
    mut launchers: Query<&mut BallLauncher>,
) {
    let mut dark_mode = theme.dark_mode;
    let launcher = launchers.iter().next();
    let new_config =
        launch_infos::ui(&mut ui_context, &mut ui_state, &mut dark_mode, launcher);

    if let Some(config) = new_config {
        for mut launcher in launchers.iter_mut() {
            *launcher.controller.config_mut() = config;
        }
    }

    if dark_mode != theme.dark_mode {
        theme.dark_mode = dark_mode;
    }
}

pub fn count_launches(mut ui_state: ResMut<UiState>, mut launched: EventReader<BallLaunched>) {
    for launch in launched.read() {
        ui_state.launches += 1;
        ui_state.last_impulse = Some(launch.impulse);
    }
}
