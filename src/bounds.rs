//! Axis-aligned bounding volume for collision and culling queries.

use crate::vec::Vec3;

/// An axis-aligned box described by a center point and per-axis half-widths.
///
/// The min/max corners are derived from the center and half-widths and kept
/// in sync with them at all times; moving one corner through a mutator
/// recomputes the center and half-widths from the two corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    center: Vec3,
    half_widths: Vec3,
    min_bound: Vec3,
    max_bound: Vec3,
}

impl Bounds {
    pub fn new(center: Vec3, half_widths: Vec3) -> Bounds {
        Bounds {
            center,
            half_widths,
            min_bound: center - half_widths,
            max_bound: center + half_widths,
        }
    }

    /// A box with the same half-width on every axis.
    pub fn cube(center: Vec3, half_width: f32) -> Bounds {
        Bounds::new(center, Vec3::from_scalar(half_width))
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    pub fn half_widths(&self) -> Vec3 {
        self.half_widths
    }

    #[inline]
    pub fn min_bound(&self) -> Vec3 {
        self.min_bound
    }

    #[inline]
    pub fn max_bound(&self) -> Vec3 {
        self.max_bound
    }

    /// Moves the min corner, keeping the max corner fixed.
    pub fn set_min_bound(&mut self, min_bound: Vec3) {
        self.min_bound = min_bound;
        self.recompute_from_corners();
    }

    /// Moves the max corner, keeping the min corner fixed.
    pub fn set_max_bound(&mut self, max_bound: Vec3) {
        self.max_bound = max_bound;
        self.recompute_from_corners();
    }

    fn recompute_from_corners(&mut self) {
        self.center = (self.min_bound + self.max_bound) * 0.5;
        self.half_widths = (self.max_bound - self.min_bound) * 0.5;
    }

    /// The corner furthest along `normal`: per axis, a non-negative normal
    /// component selects the max bound, a negative one the min bound. Used
    /// for plane-vs-box classification in frustum culling.
    pub fn positive_vertex(&self, normal: Vec3) -> Vec3 {
        Vec3::new(
            if normal.x >= 0.0 { self.max_bound.x } else { self.min_bound.x },
            if normal.y >= 0.0 { self.max_bound.y } else { self.min_bound.y },
            if normal.z >= 0.0 { self.max_bound.z } else { self.min_bound.z },
        )
    }

    /// The corner furthest against `normal`; the opposite choice of
    /// [`Bounds::positive_vertex`] on every axis.
    pub fn negative_vertex(&self, normal: Vec3) -> Vec3 {
        Vec3::new(
            if normal.x >= 0.0 { self.min_bound.x } else { self.max_bound.x },
            if normal.y >= 0.0 { self.min_bound.y } else { self.max_bound.y },
            if normal.z >= 0.0 { self.min_bound.z } else { self.max_bound.z },
        )
    }

    /// Axis-aligned overlap test: the boxes collide iff their extents
    /// overlap on all three axes simultaneously. Touching counts as
    /// colliding.
    pub fn intersects(&self, other: &Bounds) -> bool {
        (self.center.x - other.center.x).abs() <= self.half_widths.x + other.half_widths.x
            && (self.center.y - other.center.y).abs() <= self.half_widths.y + other.half_widths.y
            && (self.center.z - other.center.z).abs() <= self.half_widths.z + other.half_widths.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_derive_from_center_and_widths() {
        let b = Bounds::new(Vec3::from_scalar(0.0), Vec3::from_scalar(1.0));
        assert_eq!(b.min_bound(), Vec3::from_scalar(-1.0));
        assert_eq!(b.max_bound(), Vec3::from_scalar(1.0));

        let b = Bounds::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.5, 1.0, 2.0));
        assert_eq!(b.min_bound(), Vec3::new(0.5, 1.0, 1.0));
        assert_eq!(b.max_bound(), Vec3::new(1.5, 3.0, 5.0));
    }

    #[test]
    fn cube_uses_uniform_half_width() {
        let b = Bounds::cube(Vec3::new(1.0, 1.0, 1.0), 2.0);
        assert_eq!(b.half_widths(), Vec3::from_scalar(2.0));
        assert_eq!(b.min_bound(), Vec3::from_scalar(-1.0));
        assert_eq!(b.max_bound(), Vec3::from_scalar(3.0));
    }

    #[test]
    fn moving_min_corner_recomputes_center_and_widths() {
        let mut b = Bounds::cube(Vec3::from_scalar(0.0), 1.0);
        b.set_min_bound(Vec3::new(-3.0, -1.0, -1.0));

        assert_eq!(b.max_bound(), Vec3::from_scalar(1.0));
        assert_eq!(b.center(), Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(b.half_widths(), Vec3::new(2.0, 1.0, 1.0));
        // The four fields must never disagree
        assert_eq!(b.center() - b.half_widths(), b.min_bound());
        assert_eq!(b.center() + b.half_widths(), b.max_bound());
    }

    #[test]
    fn moving_max_corner_recomputes_center_and_widths() {
        let mut b = Bounds::cube(Vec3::from_scalar(0.0), 1.0);
        b.set_max_bound(Vec3::new(3.0, 1.0, 1.0));

        assert_eq!(b.min_bound(), Vec3::from_scalar(-1.0));
        assert_eq!(b.center(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(b.half_widths(), Vec3::new(2.0, 1.0, 1.0));
    }

    #[test]
    fn vertex_selection_follows_normal_signs() {
        let b = Bounds::cube(Vec3::from_scalar(0.0), 1.0);
        let normal = Vec3::new(1.0, -2.0, 0.0);

        // A zero component counts as non-negative
        assert_eq!(b.positive_vertex(normal), Vec3::new(1.0, -1.0, 1.0));
        assert_eq!(b.negative_vertex(normal), Vec3::new(-1.0, 1.0, -1.0));
    }

    #[test]
    fn separated_boxes_do_not_collide() {
        let a = Bounds::cube(Vec3::from_scalar(0.0), 1.0);
        let b = Bounds::cube(Vec3::new(3.0, 0.0, 0.0), 1.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn overlapping_boxes_collide() {
        let a = Bounds::cube(Vec3::from_scalar(0.0), 2.0);
        let b = Bounds::cube(Vec3::new(3.0, 0.0, 0.0), 2.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_boxes_collide() {
        let a = Bounds::cube(Vec3::from_scalar(0.0), 1.0);
        let b = Bounds::cube(Vec3::new(2.0, 0.0, 0.0), 1.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn overlap_must_hold_on_all_axes() {
        let a = Bounds::new(Vec3::from_scalar(0.0), Vec3::new(5.0, 5.0, 0.5));
        let b = Bounds::cube(Vec3::new(1.0, 1.0, 4.0), 1.0);
        assert!(!a.intersects(&b));
    }
}
