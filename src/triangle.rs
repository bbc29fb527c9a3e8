extern crate glam;

use glam::{Vec2, Vec3A};

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::{GrowAABB, AABB};

/// Texture id of a triangle whose primitive carried no texture
pub const NO_TEXTURE: i32 = -1;

/// A free-standing triangle: three positions, per-vertex texture coordinates
/// and the texture of the primitive it was extracted from.
///
/// The centroid is derived on demand rather than cached; it is only ever used
/// as a partition key while the tree is built.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub vertex0: Vec3A,
    pub vertex1: Vec3A,
    pub vertex2: Vec3A,
    pub uv0: Vec2,
    pub uv1: Vec2,
    pub uv2: Vec2,
    pub texture: i32,
}

impl Triangle {
    /// Zeroed Triangle
    pub const ZERO: Self = Triangle {
        vertex0: Vec3A::ZERO,
        vertex1: Vec3A::ZERO,
        vertex2: Vec3A::ZERO,
        uv0: Vec2::ZERO,
        uv1: Vec2::ZERO,
        uv2: Vec2::ZERO,
        texture: NO_TEXTURE,
    };

    #[inline]
    pub fn new(vertex0: Vec3A, vertex1: Vec3A, vertex2: Vec3A) -> Triangle {
        Triangle {
            vertex0,
            vertex1,
            vertex2,
            ..Self::ZERO
        }
    }

    #[inline]
    pub fn with_shading(
        vertex0: Vec3A,
        vertex1: Vec3A,
        vertex2: Vec3A,
        uvs: [Vec2; 3],
        texture: i32,
    ) -> Triangle {
        Triangle {
            vertex0,
            vertex1,
            vertex2,
            uv0: uvs[0],
            uv1: uvs[1],
            uv2: uvs[2],
            texture,
        }
    }

    #[inline]
    pub fn centroid(&self) -> Vec3A {
        (self.vertex0 + self.vertex1 + self.vertex2) / 3.0
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::ZERO
    }
}

impl GrowAABB for Triangle {
    #[inline]
    fn grow_aabb(&self, aabb: &mut AABB) {
        aabb.grow_point(self.vertex0);
        aabb.grow_point(self.vertex1);
        aabb.grow_point(self.vertex2);
    }
}

impl Distribution<Triangle> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Triangle {
        Triangle::new(rng.gen(), rng.gen(), rng.gen())
    }
}
