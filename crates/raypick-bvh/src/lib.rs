#![warn(missing_docs)]

//! Bounding volume hierarchy for ray picking.
//!
//! A [`Bvh`] is built over either the triangles of an indexed mesh or a list
//! of axis-aligned boxes, and answers ray queries against them:
//!
//! - closest ray-triangle hit ([`Bvh::get_closest_ray_indexed_triangle_collision`]),
//! - every leaf box a ray passes through ([`Bvh::get_ray_aabb_collisions`]).
//!
//! Nodes live in one flat array in depth-first order. Each leaf holds
//! exactly one primitive and each internal node stores the size of its left
//! subtree, which is all that is needed to find both children.
//!
//! # Example
//!
//! ```
//! use raypick_bvh::Bvh;
//! use raypick_geom::Line;
//! use raypick_math::Vec3;
//!
//! let verts = [
//!     Vec3::new(-1.0, -1.0, 0.0),
//!     Vec3::new(1.0, -1.0, 0.0),
//!     Vec3::new(0.0, 1.0, 0.0),
//! ];
//! let indices: [u16; 3] = [0, 1, 2];
//!
//! let mut bvh = Bvh::new();
//! bvh.build_from_indexed_triangles(&verts, &indices).unwrap();
//!
//! let ray = Line::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
//! let hit = bvh
//!     .get_closest_ray_indexed_triangle_collision(&verts, &indices, &ray)
//!     .unwrap();
//! assert_eq!(hit.id, 0);
//! ```

mod build;
mod error;
mod node;
mod traverse;

pub use error::{BvhError, Result};
pub use node::{BvhCollision, BvhNode, BvhNodeKind, BvhPrim};
pub use traverse::DepthFirstIter;
pub use raypick_geom::MeshIndex;

use raypick_geom::Aabb;

/// A bounding volume hierarchy over triangles or boxes.
///
/// Rebuilt wholesale by every `build_*` call. Holds no reference to the
/// buffers it was built from, so triangle queries take them again.
#[derive(Debug, Clone, Default)]
pub struct Bvh {
    pub(crate) nodes: Vec<BvhNode>,
    pub(crate) prims: Vec<BvhPrim>,
}

impl Bvh {
    /// Create an empty hierarchy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all nodes and primitives.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.prims.clear();
    }

    /// Nodes in depth-first order. The root, if any, is at index 0.
    pub fn nodes(&self) -> &[BvhNode] {
        &self.nodes
    }

    /// Primitives, in the order leaves reference them.
    pub fn prims(&self) -> &[BvhPrim] {
        &self.prims
    }

    /// Bounds of the root node, or `None` if the hierarchy is empty.
    pub fn root_aabb(&self) -> Option<Aabb> {
        self.nodes.first().map(|n| *n.bounds())
    }

    /// Returns `true` if the hierarchy has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
