use std::cmp::Ordering;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{MeshBvhError, SplitAxisStrategy, Triangle, AABB};

/// Triangle runs at or below this length become leaves
pub const LEAF_TRIANGLE_LIMIT: usize = 4;

/// No node is split below this depth, whatever its triangle count
pub const MAX_SPLIT_DEPTH: u32 = 20;

/// Per-node payload: either two children or a run of triangles, never both.
///
/// `left`/`right` index into the node array; `first`/`count` index into the
/// reordered triangle storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Internal { left: u32, right: u32 },
    Leaf { first: u32, count: u32 },
}

#[derive(Debug, Clone, Copy)]
pub struct BvhNode {
    pub aabb: AABB,
    pub kind: NodeKind,
}

impl BvhNode {
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }
}

/// Flat triangle BVH.
///
/// Nodes are emitted depth-first with the parent appended before either
/// subtree, so the root sits at index 0 and every child index is strictly
/// greater than its parent's. The triangle storage is partitioned in place
/// while the tree is built; afterwards each leaf's `first..first + count`
/// range is contiguous in it.
///
/// Built once per loaded scene and then read-only for the whole session; the
/// shared lock hands the storage back to the renderer once `build` returns.
#[derive(Default)]
pub struct TriangleBvh {
    triangles: Arc<RwLock<Vec<Triangle>>>,
    nodes: Vec<BvhNode>,
}

impl TriangleBvh {
    #[inline]
    pub fn init(&mut self, triangles: Arc<RwLock<Vec<Triangle>>>) {
        self.triangles = triangles;
    }

    /// Build the tree over the current triangle storage, reordering it in
    /// place. Fails on an empty triangle list; a tree is never partially
    /// built.
    pub fn build<Strat>(&mut self) -> Result<(), MeshBvhError>
    where
        Strat: SplitAxisStrategy,
    {
        let triangles_arc = self.triangles.clone();
        let mut triangles_ref = triangles_arc.write();
        let triangles: &mut [Triangle] = &mut triangles_ref;
        let tri_count = triangles.len();

        if tri_count == 0 {
            return Err(MeshBvhError::EmptyInput);
        }

        self.nodes.clear();
        // A full binary tree over N non-empty leaves never exceeds 2N-1
        // nodes, so no reallocation happens while indices are handed out.
        self.nodes.reserve(2 * tri_count - 1);

        Self::build_range::<Strat>(&mut self.nodes, triangles, 0, tri_count, 0);

        log::debug!(
            "built BVH over {} triangles: {} nodes",
            tri_count,
            self.nodes.len()
        );

        Ok(())
    }

    /// Emit the node for `[start, end)` and recurse. Returns the node's index,
    /// fixed at the moment of allocation.
    fn build_range<Strat>(
        nodes: &mut Vec<BvhNode>,
        triangles: &mut [Triangle],
        start: usize,
        end: usize,
        depth: u32,
    ) -> u32
    where
        Strat: SplitAxisStrategy,
    {
        debug_assert!(start < end && end <= triangles.len());

        let mut aabb = AABB::default();
        for tri in &triangles[start..end] {
            aabb.grow(tri);
        }

        let index = nodes.len() as u32;
        let count = end - start;

        if count <= LEAF_TRIANGLE_LIMIT || depth > MAX_SPLIT_DEPTH {
            nodes.push(BvhNode {
                aabb,
                kind: NodeKind::Leaf {
                    first: start as u32,
                    count: count as u32,
                },
            });
            return index;
        }

        let axis = Strat::split_axis(&aabb, depth);
        let mid = (start + end) / 2;

        // Order statistic selection, not a sort: everything with a smaller
        // centroid coordinate on the axis ends up before `mid`, the rest
        // after, unordered within each side.
        triangles[start..end].select_nth_unstable_by(mid - start, |a, b| {
            a.centroid()[axis]
                .partial_cmp(&b.centroid()[axis])
                .unwrap_or(Ordering::Equal)
        });

        // Child indices are not known yet; they are patched in once both
        // subtrees have been emitted.
        nodes.push(BvhNode {
            aabb,
            kind: NodeKind::Internal { left: 0, right: 0 },
        });

        let left = Self::build_range::<Strat>(nodes, triangles, start, mid, depth + 1);
        let right = Self::build_range::<Strat>(nodes, triangles, mid, end, depth + 1);
        nodes[index as usize].kind = NodeKind::Internal { left, right };

        index
    }

    /// The flat node array; empty until `build` has succeeded.
    #[inline]
    pub fn nodes(&self) -> &[BvhNode] {
        &self.nodes
    }

    pub fn triangles(&self) -> &Arc<RwLock<Vec<Triangle>>> {
        &self.triangles
    }

    /// Bounds of the whole tree
    #[inline]
    pub fn bounds(&self) -> Option<AABB> {
        self.nodes.first().map(|root| root.aabb)
    }
}
