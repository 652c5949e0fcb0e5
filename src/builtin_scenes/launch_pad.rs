use crate::follow::{FollowConfig, OffsetFollow};
use crate::launcher::{BallLauncher, LaunchConfig};
use crate::render::AimLineBundle;
use crate::styling::Theme;
use crate::utils::{ColliderBundle, RigidBodyBundle};
use crate::MainCamera;
use bevy::prelude::*;
use bevy::render::camera::Projection;
use bevy_polyline::prelude::*;
use bevy_rapier::prelude::*;

pub const BALL_RADIUS: f32 = 0.5;

/// Where the launched ball goes back to when the scene is reset.
#[derive(Copy, Clone, Debug, Component)]
pub struct LaunchPad {
    pub spawn_point: Vec3,
}

pub fn init_launch_pad(
    mut commands: Commands,
    follow_config: Res<FollowConfig>,
    config: Res<LaunchConfig>,
    theme: Res<Theme>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut polylines: ResMut<Assets<Polyline>>,
    mut polyline_materials: ResMut<Assets<PolylineMaterial>>,
) {
    let spawn_point = Vec3::new(0.0, BALL_RADIUS, 0.0);

    let drag_line = commands
        .spawn(AimLineBundle::new(
            &mut polylines,
            &mut polyline_materials,
            theme.drag_line_color(),
        ))
        .id();
    let prediction_line = commands
        .spawn(AimLineBundle::new(
            &mut polylines,
            &mut polyline_materials,
            theme.prediction_line_color(),
        ))
        .id();

    let ball = commands
        .spawn(PbrBundle {
            mesh: meshes.add(Sphere::new(BALL_RADIUS)),
            material: materials.add(theme.ball_color()),
            transform: Transform::from_translation(spawn_point),
            ..Default::default()
        })
        .insert(RigidBodyBundle {
            ccd: Ccd::enabled(),
            damping: Damping {
                linear_damping: 0.2,
                angular_damping: 0.5,
            },
            ..RigidBodyBundle::dynamic()
        })
        .insert(ColliderBundle {
            mass_properties: ColliderMassProperties::Density(1.0),
            restitution: Restitution::coefficient(0.4),
            ..ColliderBundle::new(Collider::ball(BALL_RADIUS))
        })
        .insert(BallLauncher::new(*config, drag_line, prediction_line))
        .insert(LaunchPad { spawn_point })
        .id();

    let eye = spawn_point + Vec3::new(0.0, 8.0, 10.0);
    commands
        .spawn(Camera3dBundle {
            transform: Transform::from_translation(eye).looking_at(spawn_point, Vec3::Y),
            projection: Projection::Perspective(PerspectiveProjection {
                far: 10_000.0,
                ..PerspectiveProjection::default()
            }),
            ..Default::default()
        })
        .insert(MainCamera)
        .insert(OffsetFollow {
            target: ball,
            offset_length: follow_config.offset_length,
        });
}
