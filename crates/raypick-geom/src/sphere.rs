//! Spheres and bounding spheres.

use raypick_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::Aabb;

/// A sphere defined by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center of the sphere.
    pub origin: Vec3,
    /// Radius of the sphere.
    pub radius: f32,
}

impl Sphere {
    /// Create a sphere.
    pub fn new(origin: Vec3, radius: f32) -> Self {
        Self { origin, radius }
    }

    /// Sphere centered on the box midpoint that touches its farthest corner.
    pub fn from_aabb(aabb: &Aabb) -> Self {
        bounding_sphere_of(&aabb.to_cube_verts())
    }

    /// The cube that exactly bounds this sphere.
    pub fn to_aabb(&self) -> Aabb {
        Aabb::new(
            self.origin - Vec3::repeat(self.radius),
            self.origin + Vec3::repeat(self.radius),
        )
    }
}

/// A sphere containing every point in `points`.
///
/// Centered on the midpoint of the points' AABB, which is cheap but not
/// minimal. An empty point set yields a zero-radius sphere at the origin.
pub fn bounding_sphere_of(points: &[Vec3]) -> Sphere {
    let origin = Aabb::from_verts(points).midpoint();
    let biggest_r2 = points
        .iter()
        .map(|p| (p - origin).norm_squared())
        .fold(0.0_f32, f32::max);

    Sphere {
        origin,
        radius: biggest_r2.sqrt(),
    }
}
