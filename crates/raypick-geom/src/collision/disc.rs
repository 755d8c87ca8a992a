//! Ray-disc intersection.

use super::{get_ray_collision_plane, RayCollision};
use crate::{Disc, Line};

/// Intersect a ray with a disc: a plane test restricted to the disc radius.
pub fn get_ray_collision_disc(l: &Line, d: &Disc) -> Option<RayCollision> {
    let hit = get_ray_collision_plane(l, &d.plane())?;

    let r2 = d.radius * d.radius;
    if (hit.position - d.origin).norm_squared() > r2 {
        return None;
    }

    Some(hit)
}
