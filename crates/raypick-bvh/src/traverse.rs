//! Ray queries and read-only walks over a built [`Bvh`].

use raypick_geom::collision::{get_ray_collision_aabb, get_ray_collision_triangle};
use raypick_geom::{Line, MeshIndex, Triangle};
use raypick_math::Vec3;
use tracing::trace;

use crate::node::{BvhCollision, BvhNode, BvhNodeKind};
use crate::Bvh;

impl Bvh {
    /// Find the closest triangle a ray hits.
    ///
    /// `verts` and `indices` must be the buffers the hierarchy was built
    /// from. Triangles are looked up by [`BvhPrim::id`](crate::BvhPrim::id)
    /// and a lookup that falls outside the buffers counts as a miss.
    ///
    /// Subtrees whose box is further away than the closest hit so far are
    /// skipped. Both children of an internal node are visited in array
    /// order, so ties resolve to the first triangle found.
    pub fn get_closest_ray_indexed_triangle_collision<I: MeshIndex>(
        &self,
        verts: &[Vec3],
        indices: &[I],
        line: &Line,
    ) -> Option<BvhCollision> {
        if self.nodes.is_empty() || self.prims.is_empty() || indices.is_empty() {
            return None;
        }
        debug_assert!(
            indices.len() / 3 >= self.prims.len(),
            "index buffer has fewer triangles ({}) than the BVH has prims ({})",
            indices.len() / 3,
            self.prims.len()
        );

        let mut closest = f32::INFINITY;
        let mut hit = None;
        self.closest_triangle_in_node(0, verts, indices, line, &mut closest, &mut hit);
        hit
    }

    fn closest_triangle_in_node<I: MeshIndex>(
        &self,
        idx: usize,
        verts: &[Vec3],
        indices: &[I],
        line: &Line,
        closest: &mut f32,
        hit: &mut Option<BvhCollision>,
    ) {
        let node = &self.nodes[idx];

        let Some(bb_hit) = get_ray_collision_aabb(line, node.bounds()) else {
            return;
        };
        if bb_hit.distance > *closest {
            return;
        }

        match node.kind() {
            BvhNodeKind::Leaf { prim_offset } => {
                let prim = &self.prims[prim_offset];
                let Some(tri) = Triangle::from_indexed(verts, indices, prim.id) else {
                    return;
                };
                if let Some(c) = get_ray_collision_triangle(line, &tri) {
                    if c.distance < *closest {
                        *closest = c.distance;
                        *hit = Some(BvhCollision {
                            distance: c.distance,
                            position: c.position,
                            id: prim.id,
                        });
                    }
                }
            }
            BvhNodeKind::Internal { num_lhs_nodes } => {
                self.closest_triangle_in_node(idx + 1, verts, indices, line, closest, hit);
                self.closest_triangle_in_node(
                    idx + 1 + num_lhs_nodes,
                    verts,
                    indices,
                    line,
                    closest,
                    hit,
                );
            }
        }
    }

    /// Every leaf box a ray passes through, in depth-first order.
    ///
    /// Each collision carries the ray-box distance and position, not a
    /// distance to the underlying primitive.
    pub fn get_ray_aabb_collisions(&self, line: &Line) -> Vec<BvhCollision> {
        let mut out = Vec::new();
        self.get_ray_aabb_collisions_into(line, &mut out);
        out
    }

    /// Like [`Bvh::get_ray_aabb_collisions`], but appends to `out`.
    ///
    /// Returns `true` if anything was appended.
    pub fn get_ray_aabb_collisions_into(&self, line: &Line, out: &mut Vec<BvhCollision>) -> bool {
        if self.nodes.is_empty() || self.prims.is_empty() {
            return false;
        }

        let len_before = out.len();
        self.aabb_collisions_in_node(0, line, out);

        trace!(hits = out.len() - len_before, "ray-AABB BVH query");
        out.len() > len_before
    }

    fn aabb_collisions_in_node(&self, idx: usize, line: &Line, out: &mut Vec<BvhCollision>) {
        let node = &self.nodes[idx];

        let Some(bb_hit) = get_ray_collision_aabb(line, node.bounds()) else {
            return;
        };

        match node.kind() {
            BvhNodeKind::Leaf { prim_offset } => {
                out.push(BvhCollision {
                    distance: bb_hit.distance,
                    position: bb_hit.position,
                    id: self.prims[prim_offset].id,
                });
            }
            BvhNodeKind::Internal { num_lhs_nodes } => {
                self.aabb_collisions_in_node(idx + 1, line, out);
                self.aabb_collisions_in_node(idx + 1 + num_lhs_nodes, line, out);
            }
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    ///
    /// `0` for an empty hierarchy, `1` for a single leaf.
    pub fn get_max_depth(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }

        // internal nodes whose right subtree has not been visited yet
        let mut stack: Vec<(usize, usize)> = Vec::new();
        let mut max_depth = 0;
        let mut idx = 0;
        let mut depth = 1;

        loop {
            max_depth = max_depth.max(depth);

            match self.nodes[idx].kind() {
                BvhNodeKind::Internal { num_lhs_nodes } => {
                    stack.push((idx + 1 + num_lhs_nodes, depth + 1));
                    idx += 1;
                    depth += 1;
                }
                BvhNodeKind::Leaf { .. } => match stack.pop() {
                    Some((next, next_depth)) => {
                        idx = next;
                        depth = next_depth;
                    }
                    None => break,
                },
            }
        }

        max_depth
    }

    /// Walk every node in depth-first order, yielding `(node_index, depth)`.
    ///
    /// The root has depth 1. Node indices come out in array order.
    pub fn iter_depth_first(&self) -> DepthFirstIter<'_> {
        let stack = if self.nodes.is_empty() {
            Vec::new()
        } else {
            vec![(0, 1)]
        };
        DepthFirstIter {
            nodes: &self.nodes,
            stack,
        }
    }
}

/// Iterator returned by [`Bvh::iter_depth_first`].
#[derive(Debug, Clone)]
pub struct DepthFirstIter<'a> {
    nodes: &'a [BvhNode],
    stack: Vec<(usize, usize)>,
}

impl Iterator for DepthFirstIter<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, depth) = self.stack.pop()?;
        if let Some(lhs) = self.nodes[idx].num_lhs_nodes() {
            self.stack.push((idx + 1 + lhs, depth + 1));
            self.stack.push((idx + 1, depth + 1));
        }
        Some((idx, depth))
    }
}
