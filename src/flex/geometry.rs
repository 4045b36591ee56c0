//! Geometry derived from a solve: client box, scroll extents and clipping.
use serde::Serialize;
use trellis_style::BoxSides;
use trellis_types::{ClipRect, LayoutBox};

/// Everything known about a laid-out node's boxes.
///
/// A node either has all of this or none of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    /// Border box, relative to the parent layout node's border box.
    pub offset: LayoutBox,
    /// Padding-inner box, relative to this node's border box.
    pub client: LayoutBox,
    /// Furthest extent of the children, measured from the client origin.
    pub scroll_width: f32,
    pub scroll_height: f32,
    /// Visible region in this node's local space. Unbounded edges serialize as null.
    pub clip: ClipRect,
}

impl Geometry {
    pub(crate) fn solved(offset: LayoutBox, border: &BoxSides, padding: &BoxSides) -> Self {
        Self {
            offset,
            client: client_box(&offset, border, padding),
            scroll_width: 0.0,
            scroll_height: 0.0,
            clip: ClipRect::UNBOUNDED,
        }
    }

    pub fn max_scroll_left(&self) -> f32 {
        (self.scroll_width - self.client.width).max(0.0)
    }

    pub fn max_scroll_top(&self) -> f32 {
        (self.scroll_height - self.client.height).max(0.0)
    }
}

/// The region inside border and padding, in the node's own frame.
pub(crate) fn client_box(offset: &LayoutBox, border: &BoxSides, padding: &BoxSides) -> LayoutBox {
    LayoutBox::new(
        border.left() + padding.left(),
        border.top() + padding.top(),
        offset.width - border.horizontal() - padding.horizontal(),
        offset.height - border.vertical() - padding.vertical(),
    )
}

/// A child's extent, snapped to the client extent when within `tolerance` of it.
pub(crate) fn snap_extent(extent: f32, client: f32, tolerance: f32) -> f32 {
    if (extent - client).abs() < extent * tolerance {
        client
    } else {
        extent
    }
}

/// What a child needs to know about its layout parent to clip itself.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParentFrame {
    pub client: LayoutBox,
    pub clip: ClipRect,
    pub clips_children: bool,
    pub scroll_left: f32,
    pub scroll_top: f32,
}

/// The parent's visible region, moved into the child's local space.
pub(crate) fn child_clip(parent: &ParentFrame, offset: &LayoutBox) -> ClipRect {
    let mut clip = parent.clip;
    if parent.clips_children {
        clip = clip.intersect(&ClipRect::from_box(&parent.client));
    }
    clip.translate(offset.left - parent.scroll_left, offset.top - parent.scroll_top)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(clips_children: bool) -> ParentFrame {
        ParentFrame {
            client: LayoutBox::new(0.0, 0.0, 100.0, 100.0),
            clip: ClipRect::UNBOUNDED,
            clips_children,
            scroll_left: 0.0,
            scroll_top: 0.0,
        }
    }

    #[test]
    fn test_client_box_subtracts_border_and_padding() {
        let offset = LayoutBox::new(3.0, 4.0, 100.0, 50.0);
        let client = client_box(&offset, &BoxSides::uniform(2.0), &BoxSides::from_array([1.0, 3.0, 1.0, 5.0]));
        assert_eq!(client, LayoutBox::new(7.0, 3.0, 88.0, 44.0));
    }

    #[test]
    fn test_snap_absorbs_float_noise_only() {
        assert_eq!(snap_extent(100.00003, 100.0, 1e-4), 100.0);
        assert_eq!(snap_extent(100.5, 100.0, 1e-4), 100.5);
        assert_eq!(snap_extent(99.99999, 100.0, 1e-4), 100.0);
    }

    #[test]
    fn test_child_outside_clipping_parent_is_hidden() {
        let offset = LayoutBox::new(150.0, 150.0, 10.0, 10.0);
        let clip = child_clip(&frame(true), &offset);
        assert_eq!(clip, ClipRect::new(-150.0, -150.0, -50.0, -50.0));
        assert!(clip.hides(offset.width, offset.height));
    }

    #[test]
    fn test_visible_parent_passes_clip_through() {
        let offset = LayoutBox::new(150.0, 150.0, 10.0, 10.0);
        let clip = child_clip(&frame(false), &offset);
        assert!(clip.is_unbounded());
    }

    #[test]
    fn test_parent_scroll_shifts_clip() {
        let mut parent = frame(true);
        parent.scroll_top = 60.0;
        let offset = LayoutBox::new(0.0, 120.0, 100.0, 30.0);
        let clip = child_clip(&parent, &offset);
        assert_eq!(clip.top, -60.0);
        assert_eq!(clip.bottom, 40.0);
        assert!(!clip.hides(offset.width, offset.height));
    }
}
