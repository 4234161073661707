//! Rect: Axis-aligned rectangle for layout calculations.

/// An axis-aligned rectangle in terminal coordinates.
///
/// Coordinates are 0-indexed, with (0, 0) at the top-left corner.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner (column).
    pub x: u16,
    /// Y coordinate of the top-left corner (row).
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// A zero-sized rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// A rectangle of the given size at the origin.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Whether the rectangle covers no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Whether (x, y) lies inside.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// The overlapping region, or an empty rectangle.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            return Self::ZERO;
        }
        Self::new(x, y, right - x, bottom - y)
    }

    /// Shrink by `dx` columns on the left and right and `dy` rows on top and bottom.
    #[must_use]
    pub const fn inset(&self, dx: u16, dy: u16) -> Self {
        if self.width <= dx * 2 || self.height <= dy * 2 {
            return Self::ZERO;
        }
        Self::new(self.x + dx, self.y + dy, self.width - dx * 2, self.height - dy * 2)
    }

    /// A rectangle of at most `width` x `height`, centered inside this one.
    #[must_use]
    pub fn centered(&self, width: u16, height: u16) -> Self {
        let width = width.min(self.width);
        let height = height.min(self.height);
        Self::new(
            self.x + (self.width - width) / 2,
            self.y + (self.height - height) / 2,
            width,
            height,
        )
    }

    /// Take `rows` rows off the top: `(top, rest)`.
    pub fn split_top(&self, rows: u16) -> (Self, Self) {
        let rows = rows.min(self.height);
        (
            Self::new(self.x, self.y, self.width, rows),
            Self::new(self.x, self.y + rows, self.width, self.height - rows),
        )
    }

    /// Take `rows` rows off the bottom: `(rest, bottom)`.
    pub fn split_bottom(&self, rows: u16) -> (Self, Self) {
        self.split_top(self.height - rows.min(self.height))
    }

    /// Take `cols` columns off the left: `(left, rest)`.
    pub fn split_left(&self, cols: u16) -> (Self, Self) {
        let cols = cols.min(self.width);
        (
            Self::new(self.x, self.y, cols, self.height),
            Self::new(self.x + cols, self.y, self.width - cols, self.height),
        )
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let r = Rect::new(2, 3, 4, 5);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 7));
        assert!(!r.contains(6, 7));
        assert!(!r.contains(5, 8));
    }

    #[test]
    fn test_intersection() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersection(&b), Rect::new(5, 5, 5, 5));
        assert!(a.intersection(&Rect::new(20, 20, 2, 2)).is_empty());
    }

    #[test]
    fn test_centered() {
        let r = Rect::from_size(80, 24);
        assert_eq!(r.centered(40, 10), Rect::new(20, 7, 40, 10));
        assert_eq!(r.centered(100, 100), r);
    }

    #[test]
    fn test_splits() {
        let r = Rect::new(0, 0, 10, 10);
        let (top, rest) = r.split_top(2);
        assert_eq!(top, Rect::new(0, 0, 10, 2));
        assert_eq!(rest, Rect::new(0, 2, 10, 8));
        let (rest, bottom) = r.split_bottom(1);
        assert_eq!(rest, Rect::new(0, 0, 10, 9));
        assert_eq!(bottom, Rect::new(0, 9, 10, 1));
        let (left, right) = r.split_left(4);
        assert_eq!(left.width, 4);
        assert_eq!(right, Rect::new(4, 0, 6, 10));
    }

    #[test]
    fn test_inset() {
        assert_eq!(Rect::new(0, 0, 10, 6).inset(2, 1), Rect::new(2, 1, 6, 4));
        assert!(Rect::new(0, 0, 4, 4).inset(2, 0).is_empty());
    }
}
