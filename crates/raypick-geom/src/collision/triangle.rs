//! Ray-triangle intersection (geometric method).

use super::RayCollision;
use crate::{Line, Triangle};

/// Intersect a ray with a triangle.
///
/// Intersects the ray with the triangle's plane, then runs the inside-outside
/// test against each edge. Both faces are hit. Rays that are parallel to the
/// plane (within `f32::EPSILON`) and zero-area triangles are misses.
pub fn get_ray_collision_triangle(l: &Line, tri: &Triangle) -> Option<RayCollision> {
    let n = tri.normal();
    if !n.iter().all(|c| c.is_finite()) {
        return None;
    }

    let n_dot_dir = n.dot(&l.dir);
    if n_dot_dir.abs() < f32::EPSILON {
        return None;
    }

    // plane: n . p = n . p0, line: p = o + t d
    let t = (n.dot(&tri.p0) - n.dot(&l.origin)) / n_dot_dir;
    // also rejects NaN from non-finite rays
    if !(t >= 0.0) {
        return None;
    }

    let p = l.at(t);

    for i in 0..3 {
        let start = tri[i];
        let end = tri[(i + 1) % 3];
        let edge = end - start;
        let to_p = p - start;
        if edge.cross(&to_p).dot(&n) < 0.0 {
            return None;
        }
    }

    Some(RayCollision::new(t, p))
}
