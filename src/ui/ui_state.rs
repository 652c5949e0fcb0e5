use bevy::prelude::*;

#[derive(Resource)]
pub struct UiState {
    pub launch_infos_open: bool,
    pub launches: usize,
    pub last_impulse: Option<Vec3>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            launch_infos_open: true,
            launches: 0,
            last_impulse: None,
        }
    }
}
