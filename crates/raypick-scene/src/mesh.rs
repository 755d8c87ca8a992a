//! Indexed triangle meshes with a prebuilt triangle BVH.

use raypick_bvh::{Bvh, BvhCollision};
use raypick_geom::{Aabb, Line};
use raypick_math::Vec3;

use crate::error::Result;

/// Index buffer of a mesh, in either width.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshIndices {
    /// 16-bit indices.
    U16(Vec<u16>),
    /// 32-bit indices.
    U32(Vec<u32>),
}

impl MeshIndices {
    /// Number of indices.
    pub fn len(&self) -> usize {
        match self {
            MeshIndices::U16(v) => v.len(),
            MeshIndices::U32(v) => v.len(),
        }
    }

    /// Returns `true` if there are no indices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<u16>> for MeshIndices {
    fn from(v: Vec<u16>) -> Self {
        MeshIndices::U16(v)
    }
}

impl From<Vec<u32>> for MeshIndices {
    fn from(v: Vec<u32>) -> Self {
        MeshIndices::U32(v)
    }
}

/// An indexed triangle mesh.
///
/// The triangle BVH is built on construction and the buffers are immutable
/// afterwards, so the two can never go out of sync.
#[derive(Debug, Clone)]
pub struct Mesh {
    verts: Vec<Vec3>,
    indices: MeshIndices,
    bvh: Bvh,
    bounds: Aabb,
}

impl Mesh {
    /// Create a mesh and build its triangle BVH.
    ///
    /// Fails if the index buffer is not a whole number of triangles or
    /// references a missing vertex.
    pub fn new(verts: Vec<Vec3>, indices: impl Into<MeshIndices>) -> Result<Self> {
        let indices = indices.into();
        let mut bvh = Bvh::new();
        let bounds = match &indices {
            MeshIndices::U16(idx) => {
                bvh.build_from_indexed_triangles(&verts, idx)?;
                Aabb::from_indexed_verts(&verts, idx)
            }
            MeshIndices::U32(idx) => {
                bvh.build_from_indexed_triangles(&verts, idx)?;
                Aabb::from_indexed_verts(&verts, idx)
            }
        };
        Ok(Self {
            verts,
            indices,
            bvh,
            bounds,
        })
    }

    /// A cube spanning `[-1, 1]` on every axis, 12 outward-facing triangles.
    ///
    /// With a `Transform` of `scale = half-extents, position = center` it
    /// covers any box, which is how boxes are debug-drawn.
    pub fn unit_cube() -> Self {
        let verts = vec![
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(-1.0, -1.0, 1.0),
            Vec3::new(1.0, -1.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-1.0, 1.0, 1.0),
        ];
        #[rustfmt::skip]
        let indices: Vec<u16> = vec![
            0, 2, 1, 0, 3, 2, // -z
            4, 5, 6, 4, 6, 7, // +z
            0, 1, 5, 0, 5, 4, // -y
            3, 7, 6, 3, 6, 2, // +y
            0, 4, 7, 0, 7, 3, // -x
            1, 2, 6, 1, 6, 5, // +x
        ];
        match Self::new(verts, indices) {
            Ok(mesh) => mesh,
            Err(e) => unreachable!("unit cube indices are valid: {e}"),
        }
    }

    /// Vertex positions.
    pub fn verts(&self) -> &[Vec3] {
        &self.verts
    }

    /// Index buffer.
    pub fn indices(&self) -> &MeshIndices {
        &self.indices
    }

    /// Triangle BVH over the mesh.
    pub fn bvh(&self) -> &Bvh {
        &self.bvh
    }

    /// Bounds of the indexed vertices, in model space.
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// Number of triangles in the index buffer, degenerate ones included.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Closest model-space triangle hit.
    pub fn get_closest_ray_collision(&self, line: &Line) -> Option<BvhCollision> {
        match &self.indices {
            MeshIndices::U16(idx) => {
                self.bvh
                    .get_closest_ray_indexed_triangle_collision(&self.verts, idx, line)
            }
            MeshIndices::U32(idx) => {
                self.bvh
                    .get_closest_ray_indexed_triangle_collision(&self.verts, idx, line)
            }
        }
    }
}
