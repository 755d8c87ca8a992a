//! Rays.

use raypick_math::{Mat4, Transform, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// A ray in 3D space defined by origin and direction.
///
/// The direction is not required to be normalized. Every distance reported
/// against a line is the parameter `t` such that `point = origin + t * dir`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Origin point of the ray.
    pub origin: Vec3,
    /// Direction of the ray.
    pub dir: Vec3,
}

impl Line {
    /// Create a new ray from origin and direction.
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * dir`.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.dir
    }
}

/// Map a line through a 4x4 matrix (origin as a point, direction as a vector).
pub fn transform_line(l: &Line, m: &Mat4) -> Line {
    let origin = m * Vec4::new(l.origin.x, l.origin.y, l.origin.z, 1.0);
    let dir = m * Vec4::new(l.dir.x, l.dir.y, l.dir.z, 0.0);
    Line {
        origin: origin.xyz(),
        dir: dir.xyz(),
    }
}

/// Map a world-space line into the local space of `t`.
pub fn inverse_transform_line(l: &Line, t: &Transform) -> Line {
    Line {
        origin: t.inverse_transform_point(&l.origin),
        dir: t.inverse_transform_direction(&l.dir),
    }
}

/// Unproject a top-left-relative screen position into a world-space ray.
///
/// `relpos` is in `[0, 1]²` with `(0, 0)` at the top-left of the viewport.
/// The ray starts on the near plane and points away from `camera_pos`.
/// Returns `None` if either matrix is singular.
pub fn perspective_unproject_top_left_screen_pos_to_world_ray(
    relpos: [f32; 2],
    camera_pos: &Vec3,
    view: &Mat4,
    proj: &Mat4,
) -> Option<Line> {
    // front face of the NDC cube, y flipped
    let ndc = Vec4::new(2.0 * relpos[0] - 1.0, 2.0 * (1.0 - relpos[1]) - 1.0, -1.0, 1.0);

    let mut view_pos = proj.try_inverse()? * ndc;
    let w = view_pos.w;
    view_pos /= w;

    let world_pos = (view.try_inverse()? * view_pos).xyz();
    let dir = (world_pos - camera_pos).try_normalize(f32::EPSILON)?;

    Some(Line {
        origin: world_pos,
        dir,
    })
}
