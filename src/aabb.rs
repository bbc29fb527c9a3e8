/// Objects that can widen a bounding box to cover themselves
pub trait GrowAABB {
    fn grow_aabb(&self, aabb: &mut AABB);
}

#[derive(Debug, Clone, Copy)]
pub struct AABB {
    pub min: glam::Vec3A,
    pub max: glam::Vec3A,
}

impl Default for AABB {
    fn default() -> Self {
        Self {
            min: glam::Vec3A::splat(f32::INFINITY),
            max: glam::Vec3A::splat(-f32::INFINITY),
        }
    }
}

impl AABB {
    /// Grow the box to contain a new point
    #[inline]
    pub fn grow_point(&mut self, point: glam::Vec3A) {
        self.max = self.max.max(point);
        self.min = self.min.min(point);
    }

    /// Grow the box to contain a whole item
    #[inline]
    pub fn grow<G: GrowAABB>(&mut self, item: &G) {
        item.grow_aabb(self);
    }

    /// If the AABB is valid (min <= max)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    /// If the other box lies entirely inside this one
    #[inline]
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.cmple(other.min).all() && self.max.cmpge(other.max).all()
    }

    pub fn extent(&self) -> glam::Vec3A {
        self.max - self.min
    }

    pub fn center(&self) -> glam::Vec3A {
        (self.min + self.max) * 0.5
    }
}

impl GrowAABB for AABB {
    #[inline]
    fn grow_aabb(&self, aabb: &mut AABB) {
        aabb.grow_point(self.min);
        aabb.grow_point(self.max);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3A;

    use crate::AABB;

    #[test]
    fn default_is_inverted() {
        let aabb = AABB::default();
        assert!(!aabb.is_valid());
    }

    #[test]
    fn grown_box_is_valid_and_tight() {
        let mut aabb = AABB::default();
        aabb.grow_point(Vec3A::new(1.0, -2.0, 3.0));
        aabb.grow_point(Vec3A::new(-1.0, 2.0, 0.0));
        assert!(aabb.is_valid());
        assert_eq!(aabb.min, Vec3A::new(-1.0, -2.0, 0.0));
        assert_eq!(aabb.max, Vec3A::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn growing_by_a_box_covers_it() {
        let mut a = AABB::default();
        a.grow_point(Vec3A::ZERO);
        a.grow_point(Vec3A::ONE);

        let mut b = AABB::default();
        b.grow_point(Vec3A::splat(2.0));
        b.grow(&a);

        assert!(b.contains(&a));
        assert_eq!(b.max, Vec3A::splat(2.0));
    }

    #[test]
    fn contains_own_sub_box() {
        let mut outer = AABB::default();
        outer.grow_point(Vec3A::splat(-4.0));
        outer.grow_point(Vec3A::splat(4.0));

        let mut inner = AABB::default();
        inner.grow_point(Vec3A::splat(-1.0));
        inner.grow_point(Vec3A::splat(2.0));

        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
    }
}
