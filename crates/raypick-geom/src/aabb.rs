//! Axis-aligned bounding boxes.
//!
//! These are the bounds stored in every BVH node and primitive, so most
//! operations here are on the build path and must be allocation-free.

use raypick_math::{longest_dim_index, transform_point_projective, Mat4, Transform, Vec3};
use serde::{Deserialize, Serialize};

use crate::{MeshIndex, Triangle};

/// Axis-aligned bounding box in 3D.
///
/// The default value is the zero box at the origin, not an empty box. Use
/// [`Aabb::inverted`] as the identity element when accumulating.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Create an AABB from min and max corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// A box containing only `p`.
    pub fn from_point(p: Vec3) -> Self {
        Self { min: p, max: p }
    }

    /// Create an inverted AABB (`min = MAX`, `max = -MAX`) suitable for expansion.
    pub fn inverted() -> Self {
        Self {
            min: Vec3::repeat(f32::MAX),
            max: Vec3::repeat(f32::MIN),
        }
    }

    /// Expand this AABB to include a point.
    pub fn include_point(&mut self, p: &Vec3) {
        self.min = self.min.inf(p);
        self.max = self.max.sup(p);
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Union of every box yielded by `boxes`, or `None` if there are none.
    pub fn union_all<'a, I>(boxes: I) -> Option<Aabb>
    where
        I: IntoIterator<Item = &'a Aabb>,
    {
        let mut it = boxes.into_iter();
        let first = *it.next()?;
        Some(it.fold(first, |acc, b| acc.union(b)))
    }

    /// Extent along each axis.
    pub fn dimensions(&self) -> Vec3 {
        self.max - self.min
    }

    /// Center of the box.
    pub fn midpoint(&self) -> Vec3 {
        0.5 * (self.min + self.max)
    }

    /// Volume of the box.
    pub fn volume(&self) -> f32 {
        let d = self.dimensions();
        d.x * d.y * d.z
    }

    /// Index of the axis along which the box is longest.
    pub fn longest_dim_index(&self) -> usize {
        longest_dim_index(&self.dimensions())
    }

    /// Length of the longest axis.
    pub fn longest_dim(&self) -> f32 {
        self.dimensions().max()
    }

    /// Returns `true` if `min == max`.
    pub fn is_a_point(&self) -> bool {
        self.min == self.max
    }

    /// Returns `true` if the box is flat along at least one axis.
    pub fn is_zero_volume(&self) -> bool {
        (0..3).any(|i| self.min[i] == self.max[i])
    }

    /// Returns `true` if `p` lies inside or on the boundary of the box.
    pub fn contains_point(&self, p: &Vec3) -> bool {
        (0..3).all(|i| self.min[i] <= p[i] && p[i] <= self.max[i])
    }

    /// The eight corners of the box.
    pub fn to_cube_verts(&self) -> [Vec3; 8] {
        let d = self.dimensions();
        let mut rv = [self.min; 8];
        rv[1] = self.max;
        let mut pos = 2;
        for i in 0..3 {
            let mut min = self.min;
            min[i] += d[i];
            let mut max = self.max;
            max[i] -= d[i];
            rv[pos] = min;
            rv[pos + 1] = max;
            pos += 2;
        }
        rv
    }

    /// Bounds of the box after mapping its corners through `m`.
    ///
    /// Applies the perspective divide, so this also works for projection
    /// matrices. The result is conservative for rotations.
    pub fn transform_by_mat4(&self, m: &Mat4) -> Aabb {
        let verts = self.to_cube_verts().map(|v| transform_point_projective(m, &v));
        Aabb::from_verts(&verts)
    }

    /// Exact bounds of the box after applying `t`.
    ///
    /// Sums the smaller and larger contribution of each source axis to each
    /// destination axis, starting from the translation.
    pub fn transform(&self, t: &Transform) -> Aabb {
        let m = t.to_mat3();
        let mut rv = Aabb::from_point(t.position);
        for i in 0..3 {
            for j in 0..3 {
                let e = m[(i, j)] * self.min[j];
                let f = m[(i, j)] * self.max[j];
                if e < f {
                    rv.min[i] += e;
                    rv.max[i] += f;
                } else {
                    rv.min[i] += f;
                    rv.max[i] += e;
                }
            }
        }
        rv
    }

    /// Bounds of a point set. An empty set yields the zero box.
    pub fn from_verts(verts: &[Vec3]) -> Aabb {
        let Some((first, rest)) = verts.split_first() else {
            return Aabb::default();
        };
        let mut rv = Aabb::from_point(*first);
        for v in rest {
            rv.include_point(v);
        }
        rv
    }

    /// Bounds of a triangle.
    pub fn from_triangle(t: &Triangle) -> Aabb {
        let mut rv = Aabb::from_point(t.p0);
        rv.include_point(&t.p1);
        rv.include_point(&t.p2);
        rv
    }

    /// Bounds of the vertices referenced by `indices`.
    ///
    /// Out-of-range indices are ignored. If no index is in range the zero box
    /// is returned.
    pub fn from_indexed_verts<I: MeshIndex>(verts: &[Vec3], indices: &[I]) -> Aabb {
        let mut in_range = indices.iter().filter_map(|idx| verts.get(idx.to_usize()));
        let Some(first) = in_range.next() else {
            return Aabb::default();
        };
        let mut rv = Aabb::from_point(*first);
        for v in in_range {
            rv.include_point(v);
        }
        rv
    }
}
