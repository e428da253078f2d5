/// An axis-aligned box in device pixel space.
///
/// Edges are stored as `(x1, y1)`–`(x2, y2)`. No range restriction applies;
/// an inverted box (x1 > x2) is representable and simply reports itself as
/// empty.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl PixelBox {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Box anchored at the origin with the given size.
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// True when the box covers no area (zero or negative extent on an axis).
    pub fn is_empty(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    /// Per-edge intersection: max of the near edges, min of the far edges.
    ///
    /// Disjoint boxes produce an inverted result rather than a clamped one,
    /// so callers can still tell how far apart the two were.
    pub fn intersect(&self, other: &PixelBox) -> PixelBox {
        PixelBox {
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
            x2: self.x2.min(other.x2),
            y2: self.y2.min(other.y2),
        }
    }

    pub fn contains(&self, other: &PixelBox) -> bool {
        other.x1 >= self.x1 && other.y1 >= self.y1 && other.x2 <= self.x2 && other.y2 <= self.y2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_size_accessors() {
        let b = PixelBox::new(10.0, 20.0, 110.0, 70.0);
        assert_relative_eq!(b.width(), 100.0);
        assert_relative_eq!(b.height(), 50.0);
    }

    #[test]
    fn test_from_size_is_anchored_at_origin() {
        let b = PixelBox::from_size(320.0, 240.0);
        assert_eq!(b, PixelBox::new(0.0, 0.0, 320.0, 240.0));
    }

    // ── Intersection ─────────────────────────────────────────────────

    #[test]
    fn test_intersect_partial_overlap() {
        // a: [0,0]-[100,100], b: [50,25]-[150,75]
        let a = PixelBox::new(0.0, 0.0, 100.0, 100.0);
        let b = PixelBox::new(50.0, 25.0, 150.0, 75.0);
        assert_eq!(a.intersect(&b), PixelBox::new(50.0, 25.0, 100.0, 75.0));
    }

    #[test]
    fn test_intersect_contained_returns_inner() {
        let outer = PixelBox::new(0.0, 0.0, 640.0, 480.0);
        let inner = PixelBox::new(10.0, 10.0, 50.0, 50.0);
        assert_eq!(outer.intersect(&inner), inner);
        assert_eq!(inner.intersect(&outer), inner);
    }

    #[test]
    fn test_intersect_disjoint_is_inverted_and_empty() {
        let a = PixelBox::new(0.0, 0.0, 320.0, 480.0);
        let b = PixelBox::new(600.0, 0.0, 640.0, 40.0);
        let i = a.intersect(&b);
        assert!(i.x1 > i.x2);
        assert!(i.is_empty());
    }

    // ── Emptiness ────────────────────────────────────────────────────

    #[rstest]
    #[case::zero_width(PixelBox::new(5.0, 0.0, 5.0, 10.0), true)]
    #[case::zero_height(PixelBox::new(0.0, 5.0, 10.0, 5.0), true)]
    #[case::inverted(PixelBox::new(10.0, 0.0, 0.0, 10.0), true)]
    #[case::nan(PixelBox::new(f32::NAN, 0.0, 10.0, 10.0), true)]
    #[case::regular(PixelBox::new(0.0, 0.0, 1.0, 1.0), false)]
    fn test_is_empty(#[case] b: PixelBox, #[case] expected: bool) {
        assert_eq!(b.is_empty(), expected);
    }

    #[test]
    fn test_contains_edges_inclusive() {
        let a = PixelBox::new(0.0, 0.0, 320.0, 240.0);
        assert!(a.contains(&a));
        assert!(a.contains(&PixelBox::new(80.0, 0.0, 240.0, 240.0)));
        assert!(!a.contains(&PixelBox::new(-1.0, 0.0, 240.0, 240.0)));
    }
}
