use crate::{Axis, AABB};

/// How an internal node picks the dimension to partition along.
///
/// The policies are not interchangeable: they produce different trees for the
/// same triangles. Which one suits a scene is the caller's call, so the choice
/// is a type parameter of the build rather than baked in.
pub trait SplitAxisStrategy {
    /// Get the split axis for a node from its bounds and depth.
    fn split_axis(aabb: &AABB, depth: u32) -> Axis;
}

/// Cycle X/Y/Z with tree depth, ignoring the geometry entirely.
///
/// Data-independent and deterministic; keeps working when every centroid
/// collapses onto a single plane.
pub struct RoundRobinAxis;

impl SplitAxisStrategy for RoundRobinAxis {
    #[inline(always)]
    fn split_axis(_aabb: &AABB, depth: u32) -> Axis {
        Axis::round_robin(depth)
    }
}

/// Split along the longest extent of the node's bounds.
pub struct LongestExtentAxis;

impl SplitAxisStrategy for LongestExtentAxis {
    #[inline(always)]
    fn split_axis(aabb: &AABB, _depth: u32) -> Axis {
        let extent = aabb.extent();
        let mut axis = Axis::X;
        if extent.y > extent.x {
            axis = Axis::Y;
        }
        if extent.z > extent[axis] {
            axis = Axis::Z;
        }
        axis
    }
}
