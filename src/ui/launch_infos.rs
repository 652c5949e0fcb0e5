use crate::launcher::{BallLauncher, DragMode, DragPhase, LaunchConfig};
use crate::ui::UiState;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use strum::IntoEnumIterator;

pub(super) fn ui(
    ui_context: &mut EguiContexts,
    ui_state: &mut UiState,
    dark_mode: &mut bool,
    launcher: Option<&BallLauncher>,
) -> Option<LaunchConfig> {
    let mut new_config = None;
    let launches = ui_state.launches;
    let last_impulse = ui_state.last_impulse;

    egui::Window::new("🏀 Launcher")
        .open(&mut ui_state.launch_infos_open)
        .resizable(false)
        .show(ui_context.ctx_mut(), |ui| {
            let Some(launcher) = launcher else {
                ui.label("No launcher in the scene.");
                return;
            };

            let controller = &launcher.controller;
            let mut config = *controller.config();

            ui.label(aim_string(launcher));
            ui.label(format!("Launches: {}", launches));
            if let Some(impulse) = last_impulse {
                ui.label(format!("Last impulse: {}", vec_string(impulse)));
            }

            ui.separator();
            ui.add(
                egui::Slider::new(&mut config.launch_force, 0.0..=100.0)
                    .clamp_to_range(false)
                    .text("Launch force"),
            );
            egui::ComboBox::from_label("Drag mode")
                .selected_text(config.drag_mode.label())
                .show_ui(ui, |ui| {
                    for mode in DragMode::iter() {
                        ui.selectable_value(&mut config.drag_mode, mode, mode.label());
                    }
                });
            ui.checkbox(&mut config.reset_on_press, "Reset on press");
            ui.checkbox(&mut config.debug_overlay, "Debug overlay");
            ui.checkbox(dark_mode, "Dark mode");

            if config != *controller.config() {
                new_config = Some(config);
            }
        });

    new_config
}

fn aim_string(launcher: &BallLauncher) -> String {
    let controller = &launcher.controller;
    let phase = match controller.phase() {
        DragPhase::Idle => "idle",
        DragPhase::Dragging => "dragging",
    };

    format!(
        r#"State: {}
Drag direction: {}
Drag length: {:.3}"#,
        phase,
        vec_string(controller.drag_direction()),
        controller.drag_length(),
    )
}

fn vec_string(v: Vec3) -> String {
    format!("[{:.2}, {:.2}, {:.2}]", v.x, v.y, v.z)
}
