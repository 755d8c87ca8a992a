//! Error types for BVH construction.

use thiserror::Error;

/// Errors that can occur while building a BVH from an index buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BvhError {
    /// The index buffer does not describe whole triangles.
    #[error("index count {count} is not a multiple of 3")]
    IndexCountNotMultipleOfThree {
        /// Number of indices supplied.
        count: usize,
    },

    /// An index references a vertex that does not exist.
    #[error("index {index} at position {position} is out of range for {num_verts} vertices")]
    IndexOutOfRange {
        /// Position of the offending entry in the index buffer.
        position: usize,
        /// The offending index value.
        index: usize,
        /// Number of vertices supplied.
        num_verts: usize,
    },
}

/// Result type for BVH construction.
pub type Result<T> = std::result::Result<T, BvhError>;
