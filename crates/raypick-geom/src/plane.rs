//! Infinite planes and flat discs.

use raypick_math::Vec3;
use serde::{Deserialize, Serialize};

/// An infinite plane through `origin` perpendicular to `normal`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// A point on the plane.
    pub origin: Vec3,
    /// Plane normal.
    pub normal: Vec3,
}

impl Plane {
    /// Create a plane.
    pub fn new(origin: Vec3, normal: Vec3) -> Self {
        Self { origin, normal }
    }
}

/// A filled circle lying in a plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    /// Center of the disc.
    pub origin: Vec3,
    /// Normal of the plane the disc lies in.
    pub normal: Vec3,
    /// Radius of the disc.
    pub radius: f32,
}

impl Disc {
    /// Create a disc.
    pub fn new(origin: Vec3, normal: Vec3, radius: f32) -> Self {
        Self {
            origin,
            normal,
            radius,
        }
    }

    /// The plane the disc lies in.
    pub fn plane(&self) -> Plane {
        Plane {
            origin: self.origin,
            normal: self.normal,
        }
    }
}
