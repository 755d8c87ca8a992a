//! Ray-AABB intersection (slab method).

use super::RayCollision;
use crate::{Aabb, Line};

/// Intersect a ray with an axis-aligned box.
///
/// Intersects the ray with the pair of slabs along each axis and keeps the
/// running overlap `[t0, t1]`. Axis-aligned rays divide by zero on purpose:
/// the resulting signed infinities still produce the correct interval.
///
/// The reported distance is the entry parameter `t0`, or `0` when the ray
/// starts inside the box. Boxes entirely behind the origin are misses.
pub fn get_ray_collision_aabb(l: &Line, bb: &Aabb) -> Option<RayCollision> {
    if l.dir == raypick_math::Vec3::zeros() {
        return None;
    }

    let mut t0 = f32::MIN;
    let mut t1 = f32::MAX;
    for i in 0..3 {
        let inv_dir = 1.0 / l.dir[i];
        let mut t_near = (bb.min[i] - l.origin[i]) * inv_dir;
        let mut t_far = (bb.max[i] - l.origin[i]) * inv_dir;
        if t_near > t_far {
            std::mem::swap(&mut t_near, &mut t_far);
        }
        t0 = t0.max(t_near);
        t1 = t1.min(t_far);

        if t0 > t1 {
            return None;
        }
    }

    if t1 < 0.0 {
        return None;
    }

    let distance = t0.max(0.0);
    Some(RayCollision::new(distance, l.at(distance)))
}
