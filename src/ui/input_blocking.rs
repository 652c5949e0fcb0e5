use crate::launcher::PointerSnapshot;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

pub fn focus_ui(mut ui_context: EguiContexts, mut pointer: ResMut<PointerSnapshot>) {
    let other_inputs_enabled = !ui_context.ctx_mut().wants_pointer_input();
    pointer.inputs_enabled = other_inputs_enabled;
}
