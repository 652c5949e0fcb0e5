use crate::utils::{ColliderBundle, RigidBodyBundle};
use bevy::prelude::*;
use bevy_infinite_grid::*;
use bevy_rapier::geometry::Collider;

/// Half-extents of the ground collider.
pub const FLOOR_HALF_EXTENTS: Vec3 = Vec3::new(100.0, 0.5, 100.0);

pub struct FloorPlugin;

impl Plugin for FloorPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InfiniteGridPlugin)
            .add_systems(Startup, setup_floor);
    }
}

fn setup_floor(mut commands: Commands) {
    commands.spawn(InfiniteGridBundle {
        settings: InfiniteGridSettings {
            fadeout_distance: 500.0,
            dot_fadeout_strength: 0.1,
            ..Default::default()
        },
        ..Default::default()
    });

    // The top face of the ground is at y = 0, where the grid is drawn.
    commands.spawn((
        RigidBodyBundle::fixed(),
        ColliderBundle::new(Collider::cuboid(
            FLOOR_HALF_EXTENTS.x,
            FLOOR_HALF_EXTENTS.y,
            FLOOR_HALF_EXTENTS.z,
        )),
        TransformBundle::from_transform(Transform::from_xyz(0.0, -FLOOR_HALF_EXTENTS.y, 0.0)),
    ));
}
