extern crate glam;

use std::ops::{Index, IndexMut};

use strum::EnumIter;

/// 3D Axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
#[repr(u8)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// Cycle X -> Y -> Z -> X as the tree deepens
    #[inline]
    pub fn round_robin(depth: u32) -> Self {
        match depth % 3 {
            0 => Axis::X,
            1 => Axis::Y,
            _ => Axis::Z,
        }
    }
}

impl Index<Axis> for glam::Vec3A {
    type Output = f32;

    fn index(&self, axis: Axis) -> &Self::Output {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl IndexMut<Axis> for glam::Vec3A {
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Axis;

    #[test]
    fn round_robin_cycles() {
        assert_eq!(Axis::round_robin(0), Axis::X);
        assert_eq!(Axis::round_robin(1), Axis::Y);
        assert_eq!(Axis::round_robin(2), Axis::Z);
        assert_eq!(Axis::round_robin(3), Axis::X);
        assert_eq!(Axis::round_robin(22), Axis::Y);
    }
}
