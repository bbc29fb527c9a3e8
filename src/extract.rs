use glam::{Vec2, Vec3A};

use crate::{MeshBvhError, Triangle, NO_TEXTURE};

/// One vertex as delivered by the mesh loader
#[derive(Debug, Clone, Copy)]
pub struct MeshVertex {
    pub position: Vec3A,
    pub tex_coord: Vec2,
}

impl MeshVertex {
    #[inline]
    pub fn new(position: Vec3A, tex_coord: Vec2) -> Self {
        Self {
            position,
            tex_coord,
        }
    }
}

/// A drawable chunk of a loaded model: a vertex buffer, an optional index
/// stream and the texture bound to the primitive.
///
/// An empty `indices` means the primitive is unindexed and its vertices are
/// consumed as sequential triples.
#[derive(Debug, Clone)]
pub struct MeshPrimitive {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
    pub texture: i32,
}

impl Default for MeshPrimitive {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            texture: NO_TEXTURE,
        }
    }
}

/// Flatten mesh primitives into free-standing triangles, dropping the
/// vertex/index indirection. The primitive's texture is copied onto every
/// triangle it produces so shading needs no further lookup.
///
/// An empty primitive list yields an empty triangle list. A primitive whose
/// index count is not a multiple of 3, or whose indices point past its vertex
/// buffer, fails the whole extraction; nothing is silently truncated.
pub fn extract_triangles(primitives: &[MeshPrimitive]) -> Result<Vec<Triangle>, MeshBvhError> {
    let mut triangles = Vec::new();

    for (primitive_id, primitive) in primitives.iter().enumerate() {
        if primitive.indices.is_empty() {
            if primitive.vertices.len() % 3 != 0 {
                return Err(MeshBvhError::RaggedIndexCount {
                    primitive: primitive_id,
                    count: primitive.vertices.len(),
                });
            }

            triangles.reserve(primitive.vertices.len() / 3);
            for corners in primitive.vertices.chunks_exact(3) {
                triangles.push(assemble(corners[0], corners[1], corners[2], primitive.texture));
            }
        } else {
            if primitive.indices.len() % 3 != 0 {
                return Err(MeshBvhError::RaggedIndexCount {
                    primitive: primitive_id,
                    count: primitive.indices.len(),
                });
            }

            triangles.reserve(primitive.indices.len() / 3);
            for corners in primitive.indices.chunks_exact(3) {
                let fetch = |index: u32| {
                    primitive.vertices.get(index as usize).copied().ok_or(
                        MeshBvhError::IndexOutOfBounds {
                            primitive: primitive_id,
                            index,
                            vertices: primitive.vertices.len(),
                        },
                    )
                };
                triangles.push(assemble(
                    fetch(corners[0])?,
                    fetch(corners[1])?,
                    fetch(corners[2])?,
                    primitive.texture,
                ));
            }
        }
    }

    log::trace!(
        "extracted {} triangles from {} primitives",
        triangles.len(),
        primitives.len()
    );

    Ok(triangles)
}

#[inline]
fn assemble(v0: MeshVertex, v1: MeshVertex, v2: MeshVertex, texture: i32) -> Triangle {
    Triangle::with_shading(
        v0.position,
        v1.position,
        v2.position,
        [v0.tex_coord, v1.tex_coord, v2.tex_coord],
        texture,
    )
}
