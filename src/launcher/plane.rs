use super::DragMode;
use bevy::prelude::*;
use bevy_rapier::parry::query::details;

/// Body displacements below this distance keep the cached aim plane.
pub const PLANE_CACHE_EPSILON: f32 = 1.0e-5;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AimRay {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl AimRay {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    pub fn point_at(&self, toi: f32) -> Vec3 {
        self.origin + self.dir * toi
    }
}

/// Plane the pointer ray is cast on while dragging.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AimPlane {
    pub mode: DragMode,
    /// Body position the plane was built from.
    pub point: Vec3,
    pub normal: Vec3,
}

impl AimPlane {
    pub fn new(mode: DragMode, body_position: Vec3) -> Self {
        Self {
            mode,
            point: body_position,
            normal: mode.plane_normal(),
        }
    }

    /// Whether this plane can still be used for a body at `body_position`.
    pub fn is_valid_for(&self, mode: DragMode, body_position: Vec3) -> bool {
        self.mode == mode
            && self.point.distance_squared(body_position)
                <= PLANE_CACHE_EPSILON * PLANE_CACHE_EPSILON
    }

    /// Parameter along `ray` where it crosses the plane.
    ///
    /// Returns `None` if the ray is parallel to the plane or if the plane
    /// lies behind the ray origin.
    pub fn cast_ray(&self, ray: &AimRay) -> Option<f32> {
        details::line_toi_with_halfspace(
            &self.point.into(),
            &self.normal.into(),
            &ray.origin.into(),
            &ray.dir.into(),
        )
        .filter(|toi| toi.is_finite() && *toi >= 0.0)
    }
}

/// Everything derived from one pointer hit on the aim plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AimProjection {
    pub mouse_world_position: Vec3,
    /// The hit mirrored through the body, end point of the prediction line.
    pub inverse_position: Vec3,
    pub drag_direction: Vec3,
    pub drag_length: f32,
}

impl AimProjection {
    pub fn from_hit(mode: DragMode, body_position: Vec3, hit: Vec3) -> Self {
        let inverse_position = mirror_through(body_position, hit);
        let mouse_world_position = mode.snap(hit, body_position);
        let inverse_position = mode.snap(inverse_position, body_position);

        Self {
            mouse_world_position,
            inverse_position,
            drag_direction: body_position - mouse_world_position,
            drag_length: (mouse_world_position - body_position).length(),
        }
    }
}

/// Point reflection of `point` through `center`.
pub fn mirror_through(center: Vec3, point: Vec3) -> Vec3 {
    center * 2.0 - point
}
