//! Ray-plane intersection (closed-form).

use super::RayCollision;
use crate::{Line, Plane};

/// Rays whose direction is this close to perpendicular to the plane normal
/// are treated as parallel.
const PARALLEL_THRESHOLD: f32 = 1e-6;

/// Intersect a ray with a plane.
///
/// `t = ((plane.origin - l.origin) . n) / (l.dir . n)`. Returns `None` if
/// the ray is (nearly) parallel to the plane or the plane is behind it.
pub fn get_ray_collision_plane(l: &Line, p: &Plane) -> Option<RayCollision> {
    let denom = p.normal.dot(&l.dir);
    if denom.abs() <= PARALLEL_THRESHOLD {
        return None;
    }

    let t = (p.origin - l.origin).dot(&p.normal) / denom;
    if !(t >= 0.0) {
        return None;
    }

    Some(RayCollision::new(t, l.at(t)))
}
