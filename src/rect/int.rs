/// Integer rectangle stored as origin + size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Integer rectangle stored as left/top/right/bottom edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RectRb {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn empty() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn to_rb(&self) -> RectRb {
        RectRb::new(
            self.x,
            self.y,
            self.x + self.width,
            self.y + self.height,
        )
    }

    /// Grows `self` to the bounding box of `self` and `other`, ignoring empty rects.
    pub fn union(&mut self, other: &Rect) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = *other;
            return;
        }

        let right = (self.x + self.width).max(other.x + other.width);
        let bottom = (self.y + self.height).max(other.y + other.height);

        self.x = self.x.min(other.x);
        self.y = self.y.min(other.y);
        self.width = right - self.x;
        self.height = bottom - self.y;
    }

    /// Shrinks `self` to its overlap with `other`; zeroes it and returns false on a miss.
    pub fn intersect(&mut self, other: &Rect) -> bool {
        let right = (self.x + self.width).min(other.x + other.width);
        let bottom = (self.y + self.height).min(other.y + other.height);

        self.x = self.x.max(other.x);
        self.y = self.y.max(other.y);

        if self.x < right && self.y < bottom {
            self.width = right - self.x;
            self.height = bottom - self.y;
            true
        } else {
            *self = Self::empty();
            false
        }
    }

    /// Half-open overlap test, matching [`RectF::intersects`](super::RectF::intersects).
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    pub fn contains_rect(&self, contained: &Rect) -> bool {
        self.to_rb().contains_rect(&contained.to_rb())
    }
}

impl RectRb {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn empty() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    pub fn to_wh(&self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            self.right - self.left,
            self.bottom - self.top,
        )
    }

    pub fn union(&mut self, other: &RectRb) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = *other;
            return;
        }

        self.left = self.left.min(other.left);
        self.right = self.right.max(other.right);
        self.top = self.top.min(other.top);
        self.bottom = self.bottom.max(other.bottom);
    }

    pub fn intersect(&mut self, other: &RectRb) -> bool {
        let right = self.right.min(other.right);
        let bottom = self.bottom.min(other.bottom);

        self.left = self.left.max(other.left);
        self.top = self.top.max(other.top);

        if self.left < right && self.top < bottom {
            self.right = right;
            self.bottom = bottom;
            true
        } else {
            *self = Self::empty();
            false
        }
    }

    pub fn contains_rect(&self, contained: &RectRb) -> bool {
        self.left <= contained.left
            && self.top <= contained.top
            && self.right >= contained.right
            && self.bottom >= contained.bottom
    }
}

impl From<RectRb> for Rect {
    fn from(rect: RectRb) -> Self {
        rect.to_wh()
    }
}

impl From<Rect> for RectRb {
    fn from(rect: Rect) -> Self {
        rect.to_rb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_conversions() {
        let r = Rect::new(-3, 4, 10, 2);
        assert_eq!(Rect::from(RectRb::from(r)), r);

        let rb = RectRb::new(1, 2, 7, 9);
        assert_eq!(RectRb::from(Rect::from(rb)), rb);
    }

    #[test]
    fn union_is_commutative() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, -3, 6, 2);

        let mut ab = a;
        ab.union(&b);
        let mut ba = b;
        ba.union(&a);
        assert_eq!(ab, ba);
        assert_eq!(ab, Rect::new(0, -3, 8, 7));
    }

    #[test]
    fn intersect_miss_zeroes() {
        let mut a = Rect::new(0, 0, 4, 4);
        assert!(!a.intersect(&Rect::new(4, 0, 4, 4)));
        assert_eq!(a, Rect::empty());

        let mut rb = RectRb::new(0, 0, 4, 4);
        assert!(rb.intersect(&RectRb::new(2, 2, 8, 8)));
        assert_eq!(rb, RectRb::new(2, 2, 4, 4));
    }

    #[test]
    fn intersects_is_half_open() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(10, 10, 5, 5)));
        assert!(a.intersects(&Rect::new(9, 9, 5, 5)));
        assert!(!a.intersects(&Rect::new(1, 1, 0, 5)));
    }

    #[test]
    fn contains_rect_inclusive() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.contains_rect(&a));
        assert!(!a.contains_rect(&Rect::new(-1, 0, 5, 5)));
    }

    #[test]
    fn rb_union_skips_empty() {
        let mut a = RectRb::empty();
        a.union(&RectRb::new(1, 1, 3, 3));
        assert_eq!(a, RectRb::new(1, 1, 3, 3));
        a.union(&RectRb::new(5, 5, 5, 5));
        assert_eq!(a, RectRb::new(1, 1, 3, 3));
    }
}
