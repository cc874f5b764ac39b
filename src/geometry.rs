/// Axis-aligned rectangle in screen pixels, `(x, y)` is the top-left corner.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Interval-overlap test on both axes. Rectangles that only share an edge
    /// do not overlap, and an empty rectangle never overlaps anything.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.width > 0
            && self.height > 0
            && other.width > 0
            && other.height > 0
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    // true if `other` lies fully inside self
    pub fn contains(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }
}

/// Inclusive-exclusive coordinate range `[min, max)` along one axis.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Span {
    pub min: i32,
    pub max: i32,
}

impl Span {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn len(&self) -> i32 {
        self.max - self.min
    }

    pub fn center(&self) -> i32 {
        (self.min + self.max) / 2
    }
}

/// Two spans forming a rectangular area, used for the playable sub-region.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Region {
    pub x: Span,
    pub y: Span,
}

impl Region {
    pub fn as_rect(&self) -> Rect {
        Rect::new(self.x.min, self.y.min, self.x.len(), self.y.len())
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x.center(), self.y.center())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_symmetric() {
        let rects = [
            Rect::new(0, 0, 10, 10),
            Rect::new(5, 5, 10, 10),
            Rect::new(10, 0, 10, 10),
            Rect::new(-3, 4, 4, 2),
            Rect::new(2, 2, 2, 2),
            Rect::new(100, 100, 1, 1),
            Rect::new(0, 9, 10, 10),
        ];
        for a in &rects {
            for b in &rects {
                assert_eq!(a.overlaps(b), b.overlaps(a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0, 0, 16, 32);
        assert!(!a.overlaps(&Rect::new(16, 0, 16, 32)));
        assert!(!a.overlaps(&Rect::new(0, 32, 16, 32)));
        assert!(a.overlaps(&Rect::new(15, 31, 16, 32)));
    }

    #[test]
    fn nested_rect_overlaps_and_is_contained() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(10, 10, 5, 5);
        assert!(outer.overlaps(&inner));
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
    }

    #[test]
    fn empty_rect_never_overlaps() {
        let empty = Rect::new(5, 5, 0, 10);
        assert!(!empty.overlaps(&Rect::new(0, 0, 100, 100)));
    }

    #[test]
    fn region_converts_to_rect() {
        let region = Region { x: Span::new(8, 108), y: Span::new(9, 59) };
        assert_eq!(region.as_rect(), Rect::new(8, 9, 100, 50));
        assert_eq!(region.center(), (58, 34));
    }
}
