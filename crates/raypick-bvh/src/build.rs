//! Top-down BVH construction.
//!
//! Each range of primitives is split at the midpoint of the longest axis of
//! its bounds, with a median split when that puts everything on one side.

use raypick_geom::{Aabb, MeshIndex, Triangle};
use raypick_math::Vec3;
use tracing::debug;

use crate::error::{BvhError, Result};
use crate::node::{BvhNode, BvhPrim};
use crate::Bvh;

impl Bvh {
    /// Build a hierarchy over the triangles of an indexed mesh.
    ///
    /// Every group of three indices is one triangle. Triangles with two
    /// coincident corners are skipped. The [`BvhPrim::id`] of each triangle is
    /// the position of its first index in `indices`.
    ///
    /// Fails if `indices` is not a whole number of triangles or references a
    /// vertex outside `verts`. On failure the hierarchy is left empty.
    pub fn build_from_indexed_triangles<I: MeshIndex>(
        &mut self,
        verts: &[Vec3],
        indices: &[I],
    ) -> Result<()> {
        self.clear();

        validate_indices(verts.len(), indices)?;

        for (tri_index, chunk) in indices.chunks_exact(3).enumerate() {
            let tri = Triangle::new(
                verts[chunk[0].to_usize()],
                verts[chunk[1].to_usize()],
                verts[chunk[2].to_usize()],
            );
            if tri.has_volume() {
                self.prims.push(BvhPrim {
                    id: 3 * tri_index,
                    bounds: Aabb::from_triangle(&tri),
                });
            }
        }

        self.build_nodes();

        debug!(
            triangles = indices.len() / 3,
            kept = self.prims.len(),
            filtered = indices.len() / 3 - self.prims.len(),
            nodes = self.nodes.len(),
            "built triangle BVH"
        );

        Ok(())
    }

    /// Build a hierarchy over a list of boxes.
    ///
    /// Boxes that are a single point are skipped. The [`BvhPrim::id`] of each
    /// box is its position in `aabbs`.
    pub fn build_from_aabbs(&mut self, aabbs: &[Aabb]) {
        self.clear();

        self.prims.extend(
            aabbs
                .iter()
                .enumerate()
                .filter(|(_, bb)| !bb.is_a_point())
                .map(|(id, bb)| BvhPrim { id, bounds: *bb }),
        );

        self.build_nodes();

        debug!(
            aabbs = aabbs.len(),
            kept = self.prims.len(),
            filtered = aabbs.len() - self.prims.len(),
            nodes = self.nodes.len(),
            "built AABB BVH"
        );
    }

    fn build_nodes(&mut self) {
        let n = self.prims.len();
        if n == 0 {
            return;
        }
        // a binary tree with one prim per leaf has exactly 2n - 1 nodes
        self.nodes.reserve(2 * n - 1);
        build_node(&mut self.nodes, &mut self.prims, 0, n);
    }
}

fn validate_indices<I: MeshIndex>(num_verts: usize, indices: &[I]) -> Result<()> {
    if indices.len() % 3 != 0 {
        return Err(BvhError::IndexCountNotMultipleOfThree {
            count: indices.len(),
        });
    }

    for (position, i) in indices.iter().enumerate() {
        let index = i.to_usize();
        if index >= num_verts {
            return Err(BvhError::IndexOutOfRange {
                position,
                index,
                num_verts,
            });
        }
    }

    Ok(())
}

/// Recursively build the subtree over `prims[begin..begin + n]`, appending
/// its nodes depth-first. Reorders that range of `prims` in place.
fn build_node(nodes: &mut Vec<BvhNode>, prims: &mut [BvhPrim], begin: usize, n: usize) {
    if n == 1 {
        nodes.push(BvhNode::leaf(prims[begin].bounds, begin));
        return;
    }

    let range = &mut prims[begin..begin + n];

    let mut bounds = range[0].bounds;
    for prim in range[1..].iter() {
        bounds = bounds.union(&prim.bounds);
    }

    // compare doubled midpoints to avoid the divide
    let axis = bounds.longest_dim_index();
    let split = bounds.min[axis] + bounds.max[axis];
    let num_left = partition(range, |p| p.bounds.min[axis] + p.bounds.max[axis] <= split);

    let mid = if num_left == 0 || num_left == n {
        begin + n / 2
    } else {
        begin + num_left
    };

    let idx = nodes.len();
    nodes.push(BvhNode::internal(bounds, 0));

    build_node(nodes, prims, begin, mid - begin);
    let num_lhs_nodes = nodes.len() - 1 - idx;
    build_node(nodes, prims, mid, begin + n - mid);

    let lhs = *nodes[idx + 1].bounds();
    let rhs = *nodes[idx + 1 + num_lhs_nodes].bounds();
    nodes[idx] = BvhNode::internal(lhs.union(&rhs), num_lhs_nodes);
}

/// Move every element satisfying `pred` to the front of `items`, returning
/// how many there are. Not stable.
fn partition<T>(items: &mut [T], pred: impl Fn(&T) -> bool) -> usize {
    let mut left = 0;
    let mut right = items.len();

    while left < right {
        if pred(&items[left]) {
            left += 1;
        } else {
            right -= 1;
            items.swap(left, right);
        }
    }

    left
}
