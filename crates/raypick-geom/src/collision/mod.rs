//! Closed-form ray collision tests.
//!
//! Each shape has a dedicated test with the same contract: the closest
//! intersection at or in front of the ray origin, or `None`. Parallel rays,
//! zero-length directions and degenerate shapes are misses, never errors,
//! and a returned distance is never `NaN`.

mod aabb;
mod disc;
mod plane;
mod sphere;
mod triangle;

pub use aabb::get_ray_collision_aabb;
pub use disc::get_ray_collision_disc;
pub use plane::get_ray_collision_plane;
pub use sphere::get_ray_collision_sphere;
pub use triangle::get_ray_collision_triangle;

use raypick_math::Vec3;
use serde::{Deserialize, Serialize};

/// Result of a ray-shape intersection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayCollision {
    /// Parameter along the ray (`position = origin + distance * dir`).
    pub distance: f32,
    /// Intersection point.
    pub position: Vec3,
}

impl RayCollision {
    /// Create a new ray collision.
    pub fn new(distance: f32, position: Vec3) -> Self {
        Self { distance, position }
    }
}
