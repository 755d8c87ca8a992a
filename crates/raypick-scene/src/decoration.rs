//! Placed mesh instances.

use std::sync::Arc;

use raypick_geom::Aabb;
use raypick_math::Transform;

use crate::mesh::Mesh;

/// A mesh placed in the world.
///
/// Meshes are shared: many decorations may reference the same [`Mesh`] and
/// its BVH.
#[derive(Debug, Clone)]
pub struct SceneDecoration {
    /// Caller-defined identifier, reported back in scene collisions.
    pub id: String,
    /// The mesh being placed.
    pub mesh: Arc<Mesh>,
    /// Model-to-world transform.
    pub transform: Transform,
    /// RGBA color.
    pub color: [f32; 4],
}

impl SceneDecoration {
    /// Place `mesh` with `transform`, opaque white, with an empty id.
    pub fn new(mesh: Arc<Mesh>, transform: Transform) -> Self {
        Self {
            id: String::new(),
            mesh,
            transform,
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }

    /// Set the id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the color.
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// World-space bounds of the placed mesh.
    pub fn world_aabb(&self) -> Aabb {
        self.mesh.bounds().transform(&self.transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use raypick_math::{Quat, Vec3};

    #[test]
    fn test_world_aabb_scaled_and_moved() {
        let t = Transform::identity()
            .with_scale(Vec3::new(2.0, 1.0, 0.5))
            .with_position(Vec3::new(10.0, 0.0, -3.0));
        let dec = SceneDecoration::new(Arc::new(Mesh::unit_cube()), t).with_id("box");
        let bb = dec.world_aabb();
        assert_relative_eq!(bb.min, Vec3::new(8.0, -1.0, -3.5), epsilon = 1e-6);
        assert_relative_eq!(bb.max, Vec3::new(12.0, 1.0, -2.5), epsilon = 1e-6);
        assert_eq!(dec.id, "box");
    }

    #[test]
    fn test_world_aabb_rotated() {
        // 45 degrees about z widens the x/y extent by sqrt(2)
        let t = Transform::identity().with_rotation(Quat::from_axis_angle(
            &Vec3::z_axis(),
            std::f32::consts::FRAC_PI_4,
        ));
        let dec = SceneDecoration::new(Arc::new(Mesh::unit_cube()), t);
        let bb = dec.world_aabb();
        let r = std::f32::consts::SQRT_2;
        assert_relative_eq!(bb.min, Vec3::new(-r, -r, -1.0), epsilon = 1e-5);
        assert_relative_eq!(bb.max, Vec3::new(r, r, 1.0), epsilon = 1e-5);
    }
}
