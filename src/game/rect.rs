//! Axis-aligned bounding boxes
//!
//! Every collision test in the game (player vs platform, player vs coin,
//! pointer vs button) goes through this type.

/// A rectangle defined by its top-left corner and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Left edge
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Top edge
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Move so the right edge sits at `x`
    pub fn set_right(&mut self, x: f32) {
        self.x = x - self.w;
    }

    /// Move so the bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.y = y - self.h;
    }

    /// Check if point is inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap.
    ///
    /// A player standing exactly on a platform (bottom == top) is therefore
    /// not colliding with it, which keeps the horizontal pass from snagging
    /// on the floor.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Grow or shrink around the center by `scale`
    pub fn scaled(&self, scale: f32) -> Self {
        let w = self.w * scale;
        let h = self.h * scale;
        Self::new(
            self.x - (w - self.w) * 0.5,
            self.y - (h - self.h) * 0.5,
            w,
            h,
        )
    }

    /// Same size, shifted by (dx, dy)
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(50.0, 40.0));
        assert!(!r.contains(5.0, 40.0));
        assert!(!r.contains(50.0, 100.0));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let floor = Rect::new(0.0, 560.0, 800.0, 40.0);
        let standing = Rect::new(400.0, 520.0, 30.0, 40.0);
        assert!(!standing.overlaps(&floor));

        let sunk = standing.offset(0.0, 0.5);
        assert!(sunk.overlaps(&floor));
        assert!(floor.overlaps(&sunk));
    }

    #[test]
    fn test_set_edges() {
        let mut r = Rect::new(0.0, 0.0, 30.0, 40.0);
        r.set_right(300.0);
        r.set_bottom(400.0);
        assert_eq!(r.right(), 300.0);
        assert_eq!(r.bottom(), 400.0);
        assert_eq!(r.left(), 270.0);
        assert_eq!(r.top(), 360.0);
    }

    #[test]
    fn test_scaled_keeps_center() {
        let r = Rect::new(300.0, 250.0, 200.0, 50.0);
        let big = r.scaled(1.1);
        assert!((big.w - 220.0).abs() < 0.001);
        assert!((big.center_x() - r.center_x()).abs() < 0.001);
        assert!((big.center_y() - r.center_y()).abs() < 0.001);
    }
}
