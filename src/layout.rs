//! GPU-facing flat records.
//!
//! Traversal runs on the GPU against raw structured buffers, so these structs
//! are bit-exact: 16-byte aligned records made of 4-component vectors, with
//! the tagged node payload lowered to the four-integer slot convention
//! (`-1` marks the pair a node kind does not use).

use bytemuck::{Pod, Zeroable};

use glam::Vec3A;

use crate::{BvhNode, NodeKind, Triangle};

/// Slot value for the pair of fields the node kind leaves unused
pub const UNUSED_SLOT: i32 = -1;

/// One triangle as uploaded: three position vectors, w components zero.
/// 48 bytes.
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpuTriangle {
    pub v0: [f32; 4],
    pub v1: [f32; 4],
    pub v2: [f32; 4],
}

unsafe impl Zeroable for GpuTriangle {}
unsafe impl Pod for GpuTriangle {}

/// One node as uploaded: AABB corners with zeroed w, then
/// `(left, right, data_offset, data_count)`. 48 bytes.
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpuNode {
    pub min: [f32; 4],
    pub max: [f32; 4],
    pub links: [i32; 4],
}

unsafe impl Zeroable for GpuNode {}
unsafe impl Pod for GpuNode {}

/// Shading data for one triangle, in the same (reordered) triangle order, so
/// the traversal stage resolves texture lookups without indirection. 32 bytes.
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpuTriangleAttributes {
    pub uv0: [f32; 2],
    pub uv1: [f32; 2],
    pub uv2: [f32; 2],
    pub texture: i32,
    pub _pad: i32,
}

unsafe impl Zeroable for GpuTriangleAttributes {}
unsafe impl Pod for GpuTriangleAttributes {}

#[inline]
fn padded(v: Vec3A) -> [f32; 4] {
    [v.x, v.y, v.z, 0.0]
}

pub fn pack_triangles(triangles: &[Triangle]) -> Vec<GpuTriangle> {
    triangles
        .iter()
        .map(|tri| GpuTriangle {
            v0: padded(tri.vertex0),
            v1: padded(tri.vertex1),
            v2: padded(tri.vertex2),
        })
        .collect()
}

pub fn pack_triangle_attributes(triangles: &[Triangle]) -> Vec<GpuTriangleAttributes> {
    triangles
        .iter()
        .map(|tri| GpuTriangleAttributes {
            uv0: tri.uv0.to_array(),
            uv1: tri.uv1.to_array(),
            uv2: tri.uv2.to_array(),
            texture: tri.texture,
            _pad: 0,
        })
        .collect()
}

pub fn pack_nodes(nodes: &[BvhNode]) -> Vec<GpuNode> {
    nodes
        .iter()
        .map(|node| GpuNode {
            min: padded(node.aabb.min),
            max: padded(node.aabb.max),
            links: match node.kind {
                NodeKind::Internal { left, right } => {
                    [left as i32, right as i32, UNUSED_SLOT, UNUSED_SLOT]
                }
                NodeKind::Leaf { first, count } => {
                    [UNUSED_SLOT, UNUSED_SLOT, first as i32, count as i32]
                }
            },
        })
        .collect()
}
