//! Ray-sphere intersection (quadratic equation).

use super::RayCollision;
use crate::{Line, Sphere};

/// Real roots of `a*x^2 + b*x + c`, smaller first.
///
/// Computes one root with the textbook form and the other with Muller's
/// form, picking the sign from `b` so that `b` and the square root are
/// always summed and never cancel.
fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let q = -0.5 * (b + discriminant.sqrt().copysign(b));
    let x0 = q / a;
    let x1 = if q == 0.0 { x0 } else { c / q };

    if x0 <= x1 {
        Some((x0, x1))
    } else {
        Some((x1, x0))
    }
}

/// Intersect a ray with a sphere.
///
/// Returns the nearest intersection with `t >= 0`: the entry point for rays
/// starting outside, the exit point for rays starting inside.
pub fn get_ray_collision_sphere(l: &Line, s: &Sphere) -> Option<RayCollision> {
    let oc = l.origin - s.origin;

    let a = l.dir.dot(&l.dir);
    if a == 0.0 {
        return None;
    }
    let b = 2.0 * l.dir.dot(&oc);
    let c = oc.dot(&oc) - s.radius * s.radius;

    let (t0, t1) = solve_quadratic(a, b, c)?;
    let t = if t0 >= 0.0 { t0 } else { t1 };
    if !(t >= 0.0) {
        return None;
    }

    Some(RayCollision::new(t, l.at(t)))
}
