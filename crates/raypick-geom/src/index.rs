//! Index buffer element types.

/// An element of a triangle index buffer.
///
/// Implemented for the two index widths meshes are stored with, so that
/// index-driven algorithms are written once and monomorphized per width.
pub trait MeshIndex: Copy + Send + Sync + 'static {
    /// Widen the index for slice access.
    fn to_usize(self) -> usize;
}

impl MeshIndex for u16 {
    #[inline]
    fn to_usize(self) -> usize {
        usize::from(self)
    }
}

impl MeshIndex for u32 {
    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}
