extern crate bevy_rapier3d as bevy_rapier;

use crate::cli::CliArgs;
use bevy::prelude::*;
use bevy_rapier::prelude::*;
use clap::Parser;

mod builtin_scenes;
mod cli;
mod floor;
mod follow;
mod launcher;
mod render;
mod styling;
mod ui;
mod utils;

#[derive(Component)]
pub struct MainCamera;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let launch_config = args.launch_config()?;
    let follow_config = args.follow_config()?;

    let mut app = App::new();
    app.insert_resource(args)
        .insert_resource(launch_config)
        .insert_resource(follow_config)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ball launcher".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(styling::StylingPlugin)
        .add_plugins(floor::FloorPlugin)
        .add_plugins(render::AimRenderPlugin)
        .add_plugins(launcher::LaunchPlugin)
        .add_plugins(follow::FollowPlugin)
        .add_plugins(ui::LaunchUiPlugin)
        .add_systems(
            Startup,
            (setup_graphics, builtin_scenes::init_launch_pad),
        );

    app.run();
    Ok(())
}

fn setup_graphics(mut commands: Commands, cli: Res<CliArgs>) {
    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: !cli.lower_graphics,
            ..Default::default()
        },
        transform: Transform {
            translation: Vec3::new(10.0, 2.0, 10.0),
            rotation: Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4),
            ..Default::default()
        },
        ..Default::default()
    });
}
