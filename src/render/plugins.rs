use bevy::prelude::*;

/// Plugin responsible for rendering the aim lines.
pub struct AimRenderPlugin;

impl Plugin for AimRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(bevy_polyline::PolylinePlugin)
            .add_systems(PostUpdate, super::sync_aim_lines);
    }
}
