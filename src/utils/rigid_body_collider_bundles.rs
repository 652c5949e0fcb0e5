use bevy::prelude::*;
use bevy_rapier::prelude::*;

#[derive(Clone, Bundle, Default)]
pub struct ColliderBundle {
    pub collider: Collider,
    pub mass_properties: ColliderMassProperties,
    pub restitution: Restitution,
    pub friction: Friction,
}

impl ColliderBundle {
    pub fn new(collider: Collider) -> Self {
        Self {
            collider,
            mass_properties: Default::default(),
            restitution: Default::default(),
            friction: Default::default(),
        }
    }
}

#[derive(Copy, Clone, Default, Bundle)]
pub struct RigidBodyBundle {
    pub rigid_body: RigidBody,
    pub velocity: Velocity,
    pub impulse: ExternalImpulse,
    pub mass_properties: ReadMassProperties,
    pub gravity_scale: GravityScale,
    pub ccd: Ccd,
    pub sleeping: Sleeping,
    pub damping: Damping,
}

impl RigidBodyBundle {
    pub fn dynamic() -> Self {
        Self {
            rigid_body: RigidBody::Dynamic,
            ..Default::default()
        }
    }

    pub fn fixed() -> Self {
        Self {
            rigid_body: RigidBody::Fixed,
            ..Default::default()
        }
    }
}
