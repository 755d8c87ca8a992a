//! Triangles.

use std::ops::Index;

use raypick_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::MeshIndex;

/// A triangle defined by three corner points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// First corner.
    pub p0: Vec3,
    /// Second corner.
    pub p1: Vec3,
    /// Third corner.
    pub p2: Vec3,
}

impl Triangle {
    /// Create a triangle from its corners.
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3) -> Self {
        Self { p0, p1, p2 }
    }

    /// Look up the triangle whose first index is at `indices[first]`.
    ///
    /// Returns `None` if any of the three index entries or the vertices they
    /// reference are out of range.
    pub fn from_indexed<I: MeshIndex>(verts: &[Vec3], indices: &[I], first: usize) -> Option<Self> {
        let idx = indices.get(first..first.checked_add(3)?)?;
        Some(Self {
            p0: *verts.get(idx[0].to_usize())?,
            p1: *verts.get(idx[1].to_usize())?,
            p2: *verts.get(idx[2].to_usize())?,
        })
    }

    /// Unnormalized normal `(p1 - p0) x (p2 - p0)`.
    pub fn cross(&self) -> Vec3 {
        (self.p1 - self.p0).cross(&(self.p2 - self.p0))
    }

    /// Unit normal, following the right-hand rule over `p0, p1, p2`.
    ///
    /// Non-finite for zero-area triangles.
    pub fn normal(&self) -> Vec3 {
        self.cross().normalize()
    }

    /// Arithmetic mean of the corners.
    pub fn centroid(&self) -> Vec3 {
        (self.p0 + self.p1 + self.p2) / 3.0
    }

    /// Returns `false` if any two corners are coordinate-equal.
    pub fn has_volume(&self) -> bool {
        !(self.p0 == self.p1 || self.p0 == self.p2 || self.p1 == self.p2)
    }
}

impl Index<usize> for Triangle {
    type Output = Vec3;

    fn index(&self, i: usize) -> &Vec3 {
        match i {
            0 => &self.p0,
            1 => &self.p1,
            2 => &self.p2,
            _ => panic!("triangle corner index out of range: {i}"),
        }
    }
}
