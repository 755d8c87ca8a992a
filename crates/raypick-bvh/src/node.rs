//! Node, primitive and collision records stored in or returned by a [`Bvh`](crate::Bvh).

use raypick_geom::Aabb;
use raypick_math::Vec3;

/// What a node is: a leaf over one primitive or an internal node with two children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BvhNodeKind {
    /// Leaf referencing exactly one primitive.
    Leaf {
        /// Offset of the primitive in [`Bvh::prims`](crate::Bvh::prims).
        prim_offset: usize,
    },
    /// Internal node. The left child is the next node in the array, the
    /// right child follows the left subtree.
    Internal {
        /// Number of nodes in the left subtree (always at least 1).
        num_lhs_nodes: usize,
    },
}

/// A node in the flattened hierarchy.
///
/// Nodes are stored depth-first: the left child of node `i` is at `i + 1`
/// and the right child at `i + 1 + num_lhs_nodes`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BvhNode {
    bounds: Aabb,
    kind: BvhNodeKind,
}

impl BvhNode {
    /// Create a leaf node over the primitive at `prim_offset`.
    pub fn leaf(bounds: Aabb, prim_offset: usize) -> Self {
        Self {
            bounds,
            kind: BvhNodeKind::Leaf { prim_offset },
        }
    }

    /// Create an internal node whose left subtree spans `num_lhs_nodes` nodes.
    pub fn internal(bounds: Aabb, num_lhs_nodes: usize) -> Self {
        Self {
            bounds,
            kind: BvhNodeKind::Internal { num_lhs_nodes },
        }
    }

    /// Union of the bounds of every primitive beneath this node.
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// Leaf or internal.
    pub fn kind(&self) -> BvhNodeKind {
        self.kind
    }

    /// Returns `true` for leaf nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, BvhNodeKind::Leaf { .. })
    }

    /// Returns `true` for internal nodes.
    pub fn is_node(&self) -> bool {
        !self.is_leaf()
    }

    /// The primitive offset of a leaf, `None` for internal nodes.
    pub fn first_prim_offset(&self) -> Option<usize> {
        match self.kind {
            BvhNodeKind::Leaf { prim_offset } => Some(prim_offset),
            BvhNodeKind::Internal { .. } => None,
        }
    }

    /// Size of the left subtree of an internal node, `None` for leaves.
    pub fn num_lhs_nodes(&self) -> Option<usize> {
        match self.kind {
            BvhNodeKind::Internal { num_lhs_nodes } => Some(num_lhs_nodes),
            BvhNodeKind::Leaf { .. } => None,
        }
    }
}

/// A primitive the hierarchy was built over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BvhPrim {
    /// Caller-meaningful identifier: the index-buffer offset of a triangle's
    /// first index, or the position of a box in the input slice.
    pub id: usize,
    /// Bounds of the primitive.
    pub bounds: Aabb,
}

/// A ray hit reported by a BVH query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BvhCollision {
    /// Ray parameter of the hit.
    pub distance: f32,
    /// Hit position.
    pub position: Vec3,
    /// [`BvhPrim::id`] of the primitive that was hit.
    pub id: usize,
}
