use anyhow::{bail, Context};
use bevy::app::AppExit;
use bevy::prelude::*;
use bevy::transform::TransformSystem;
use bevy_rapier::plugin::PhysicsSet;

/// Validated follower settings.
#[derive(Copy, Clone, Debug, PartialEq, Resource)]
pub struct FollowConfig {
    /// Distance kept between a follower and its target.
    pub offset_length: f32,
}

/// Keeps the entity at `offset_length` from `target`, in the direction it had
/// from the target when the app started.
#[derive(Copy, Clone, Debug, Component)]
pub struct OffsetFollow {
    pub target: Entity,
    pub offset_length: f32,
}

/// Offset captured from the initial placement of a follower.
#[derive(Copy, Clone, Debug, PartialEq, Component)]
pub struct OffsetFollower {
    offset_direction: Vec3,
    offset_length: f32,
}

impl OffsetFollower {
    /// Captures the direction from the target to the follower.
    ///
    /// Fails if there is no target to follow.
    pub fn initialize(
        self_position: Vec3,
        target_position: Option<Vec3>,
        offset_length: f32,
    ) -> anyhow::Result<Self> {
        let target_position = target_position.context("the follow target is not set")?;

        if !offset_length.is_finite() || offset_length < 0.0 {
            bail!("invalid offset length: {}", offset_length);
        }

        Ok(Self {
            offset_direction: (self_position - target_position).normalize_or_zero(),
            offset_length,
        })
    }

    pub fn offset_direction(&self) -> Vec3 {
        self.offset_direction
    }

    pub fn offset_length(&self) -> f32 {
        self.offset_length
    }

    /// The follower position for this frame.
    pub fn update_frame(&self, target_position: Vec3) -> Vec3 {
        target_position + self.offset_direction * self.offset_length
    }
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub struct FollowSystems;

pub struct FollowPlugin;

impl Plugin for FollowPlugin {
    fn build(&self, app: &mut App) {
        // Followers must see the position the physics wrote back for this
        // frame, and be done before transforms are propagated.
        app.configure_sets(
            PostUpdate,
            FollowSystems
                .after(PhysicsSet::Writeback)
                .before(TransformSystem::TransformPropagate),
        )
        .add_systems(PostStartup, init_offset_followers)
        .add_systems(PostUpdate, update_offset_followers.in_set(FollowSystems));
    }
}

pub fn init_offset_followers(
    mut commands: Commands,
    mut exit: EventWriter<AppExit>,
    followers: Query<(Entity, &Transform, &OffsetFollow), Without<OffsetFollower>>,
    targets: Query<&Transform>,
) {
    for (entity, transform, follow) in followers.iter() {
        let target_position = targets.get(follow.target).ok().map(|t| t.translation);

        match OffsetFollower::initialize(transform.translation, target_position, follow.offset_length)
        {
            Ok(follower) => {
                log::debug!(
                    "{:?} follows {:?} at {} along {}",
                    entity,
                    follow.target,
                    follower.offset_length(),
                    follower.offset_direction()
                );
                commands.entity(entity).insert(follower);
            }
            Err(err) => {
                log::error!("cannot follow {:?} with {:?}: {:#}", follow.target, entity, err);
                exit.send(AppExit::error());
            }
        }
    }
}

pub fn update_offset_followers(
    mut followers: Query<(&OffsetFollow, &OffsetFollower, &mut Transform)>,
    targets: Query<&Transform, Without<OffsetFollower>>,
) {
    for (follow, follower, mut transform) in followers.iter_mut() {
        if let Ok(target) = targets.get(follow.target) {
            transform.translation = follower.update_frame(target.translation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_captured_once() {
        let follower =
            OffsetFollower::initialize(Vec3::new(0.0, 5.0, 0.0), Some(Vec3::ZERO), 5.0).unwrap();
        assert_eq!(follower.offset_direction(), Vec3::Y);

        let position = follower.update_frame(Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(position, Vec3::new(10.0, 5.0, 0.0));
        assert_eq!(follower.offset_direction(), Vec3::Y);
    }

    #[test]
    fn offset_length_overrides_the_initial_distance() {
        let follower =
            OffsetFollower::initialize(Vec3::new(0.0, 0.0, 2.0), Some(Vec3::ZERO), 8.0).unwrap();
        assert_eq!(follower.update_frame(Vec3::ONE), Vec3::new(1.0, 1.0, 9.0));
    }

    #[test]
    fn missing_target_is_an_error() {
        assert!(OffsetFollower::initialize(Vec3::ONE, None, 5.0).is_err());
    }

    #[test]
    fn invalid_offset_length_is_an_error() {
        assert!(OffsetFollower::initialize(Vec3::ONE, Some(Vec3::ZERO), -1.0).is_err());
        assert!(OffsetFollower::initialize(Vec3::ONE, Some(Vec3::ZERO), f32::NAN).is_err());
    }

    #[test]
    fn follower_on_top_of_its_target_stays_on_it() {
        let follower = OffsetFollower::initialize(Vec3::ONE, Some(Vec3::ONE), 3.0).unwrap();
        assert_eq!(follower.offset_direction(), Vec3::ZERO);
        assert_eq!(follower.update_frame(Vec3::X), Vec3::X);
    }

    #[test]
    fn follower_tracks_the_target_in_the_late_pass() {
        let mut app = App::new();
        app.add_plugins(FollowPlugin);

        let target = app.world_mut().spawn(Transform::IDENTITY).id();
        let camera = app
            .world_mut()
            .spawn((
                Transform::from_xyz(0.0, 5.0, 0.0),
                OffsetFollow {
                    target,
                    offset_length: 5.0,
                },
            ))
            .id();

        // Moves the target during the general update pass.
        app.add_systems(Update, move |mut transforms: Query<&mut Transform>| {
            if let Ok(mut transform) = transforms.get_mut(target) {
                transform.translation = Vec3::new(10.0, 0.0, 0.0);
            }
        });
        app.update();

        let follower = app.world().get::<OffsetFollower>(camera).unwrap();
        assert_eq!(follower.offset_direction(), Vec3::Y);
        assert_eq!(
            app.world().get::<Transform>(camera).unwrap().translation,
            Vec3::new(10.0, 5.0, 0.0)
        );
    }

    #[test]
    fn missing_target_entity_stops_the_app() {
        let mut app = App::new();
        app.add_plugins(FollowPlugin);

        let gone = app.world_mut().spawn_empty().id();
        app.world_mut().despawn(gone);
        app.world_mut().spawn((
            Transform::IDENTITY,
            OffsetFollow {
                target: gone,
                offset_length: 5.0,
            },
        ));
        app.update();

        assert!(!app.world().resource::<Events<AppExit>>().is_empty());
    }
}
