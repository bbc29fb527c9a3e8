use thiserror::Error;

/// Everything that can go wrong between raw mesh primitives and a finished tree.
///
/// All of these are raised synchronously and none are retryable: either the
/// caller hands over well-formed geometry and gets a complete tree, or the
/// whole operation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MeshBvhError {
    /// The primitive's index stream (or unindexed vertex stream) cannot be cut
    /// into whole triangles.
    #[error("primitive {primitive}: {count} indices do not form whole triangles")]
    RaggedIndexCount { primitive: usize, count: usize },

    /// An index points past the end of the primitive's vertex buffer.
    #[error("primitive {primitive}: index {index} out of bounds (vertex count {vertices})")]
    IndexOutOfBounds {
        primitive: usize,
        index: u32,
        vertices: usize,
    },

    /// A tree was requested over zero triangles.
    #[error("cannot build a BVH over an empty triangle list")]
    EmptyInput,
}

impl MeshBvhError {
    /// Whether this error reports malformed source geometry, as opposed to an
    /// empty input.
    pub fn is_data_integrity(&self) -> bool {
        matches!(
            self,
            Self::RaggedIndexCount { .. } | Self::IndexOutOfBounds { .. }
        )
    }
}
