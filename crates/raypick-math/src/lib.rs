#![warn(missing_docs)]

//! Math types for raypick.
//!
//! Thin wrappers around nalgebra providing the single-precision vector,
//! matrix and transform types that vertex buffers, rays and bounding
//! volumes are expressed in.

use nalgebra::{Matrix3, Matrix4, UnitQuaternion, Vector3, Vector4};
use serde::{Deserialize, Serialize};

/// A point or vector in 3D space.
pub type Vec3 = Vector3<f32>;

/// A homogeneous 4-component vector.
pub type Vec4 = Vector4<f32>;

/// A 3x3 matrix (rotation and scale only).
pub type Mat3 = Matrix3<f32>;

/// A 4x4 matrix.
pub type Mat4 = Matrix4<f32>;

/// A unit quaternion representing a rotation.
pub type Quat = UnitQuaternion<f32>;

/// Index of the largest component of `v`.
///
/// Ties resolve towards the later axis (`y` over `x`, `z` over `y`).
pub fn longest_dim_index(v: &Vec3) -> usize {
    if v.x > v.y && v.x > v.z {
        0
    } else if v.y > v.z {
        1
    } else {
        2
    }
}

/// A decomposed affine transform: scale, then rotate, then translate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Per-axis scale factors.
    pub scale: Vec3,
    /// Rotation applied after scaling.
    pub rotation: Quat,
    /// Translation applied last.
    pub position: Vec3,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            scale: Vec3::new(1.0, 1.0, 1.0),
            rotation: Quat::identity(),
            position: Vec3::zeros(),
        }
    }

    /// Returns a copy of this transform with a different position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Returns a copy of this transform with a different scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Returns a copy of this transform with a different rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Rotation matrix with column `j` scaled by `scale[j]`.
    pub fn to_mat3(&self) -> Mat3 {
        self.rotation.to_rotation_matrix().into_inner() * Mat3::from_diagonal(&self.scale)
    }

    /// Full 4x4 matrix (translation in the last column).
    pub fn to_mat4(&self) -> Mat4 {
        let mut m = self.to_mat3().to_homogeneous();
        m[(0, 3)] = self.position.x;
        m[(1, 3)] = self.position.y;
        m[(2, 3)] = self.position.z;
        m
    }

    /// Transform a point.
    pub fn transform_point(&self, p: &Vec3) -> Vec3 {
        self.position + self.rotation * p.component_mul(&self.scale)
    }

    /// Transform a direction (scale and rotation, no translation).
    pub fn transform_direction(&self, d: &Vec3) -> Vec3 {
        self.rotation * d.component_mul(&self.scale)
    }

    /// Map a point from the transformed space back into local space.
    pub fn inverse_transform_point(&self, p: &Vec3) -> Vec3 {
        (self.rotation.inverse() * (p - self.position)).component_div(&self.scale)
    }

    /// Map a direction from the transformed space back into local space.
    ///
    /// The result is not renormalized, so ray parameters measured against
    /// it stay comparable with the local-space geometry.
    pub fn inverse_transform_direction(&self, d: &Vec3) -> Vec3 {
        (self.rotation.inverse() * d).component_div(&self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Apply a 4x4 matrix to a point, including the perspective divide.
pub fn transform_point_projective(m: &Mat4, p: &Vec3) -> Vec3 {
    let v = m * Vec4::new(p.x, p.y, p.z, 1.0);
    Vec3::new(v.x, v.y, v.z) / v.w
}
