use serde::{Deserialize, Serialize};

/// An axis-aligned box as produced by a layout solver.
///
/// `left` and `top` are measured from the border-box origin of the parent
/// layout node; `width` and `height` are the outer (border-box) size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutBox {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// A clipping region given by its four edges.
///
/// Edges may be infinite; [`ClipRect::UNBOUNDED`] clips nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl ClipRect {
    pub const UNBOUNDED: ClipRect = ClipRect {
        left: f32::NEG_INFINITY,
        top: f32::NEG_INFINITY,
        right: f32::INFINITY,
        bottom: f32::INFINITY,
    };

    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The region covered by a box, in the same frame as the box.
    pub fn from_box(b: &LayoutBox) -> Self {
        Self::new(b.left, b.top, b.right(), b.bottom())
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn is_unbounded(&self) -> bool {
        *self == Self::UNBOUNDED
    }

    /// Moves the rectangle into a frame whose origin sits at `(dx, dy)`.
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.left - dx, self.top - dy, self.right - dx, self.bottom - dy)
    }

    pub fn intersect(&self, other: &ClipRect) -> Self {
        Self::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        )
    }

    /// True when nothing survives the clip: either the rectangle has collapsed
    /// or the box `(0, 0, width, height)` lies entirely outside it.
    pub fn hides(&self, width: f32, height: f32) -> bool {
        self.width() <= 0.0
            || self.height() <= 0.0
            || self.left >= width
            || self.top >= height
            || self.right <= 0.0
            || self.bottom <= 0.0
    }
}

impl Default for ClipRect {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_hides_nothing() {
        assert!(!ClipRect::UNBOUNDED.hides(10.0, 10.0));
        assert!(ClipRect::UNBOUNDED.translate(500.0, -20.0).is_unbounded());
    }

    #[test]
    fn test_intersect_keeps_tightest_edges() {
        let a = ClipRect::new(0.0, 0.0, 100.0, 100.0);
        let b = ClipRect::new(20.0, -5.0, 150.0, 80.0);
        assert_eq!(a.intersect(&b), ClipRect::new(20.0, 0.0, 100.0, 80.0));
    }

    #[test]
    fn test_hides_box_outside_clip() {
        // Parent content box seen from a child placed at (150, 150).
        let clip = ClipRect::new(0.0, 0.0, 100.0, 100.0).translate(150.0, 150.0);
        assert!(clip.hides(10.0, 10.0));
    }

    #[test]
    fn test_collapsed_clip_hides() {
        let clip = ClipRect::new(5.0, 0.0, 5.0, 40.0);
        assert!(clip.hides(10.0, 10.0));
    }

    #[test]
    fn test_partial_overlap_is_visible() {
        let clip = ClipRect::new(-5.0, -5.0, 5.0, 5.0);
        assert!(!clip.hides(10.0, 10.0));
    }
}
