//! Writing solve results onto the live tree, and the geometry derived from them.
use super::geometry::{Geometry, ParentFrame, child_clip, snap_extent};
use crate::scene::{SceneNode, SceneTree};
use log::trace;
use trellis_style::PositionType;
use trellis_traits::LayoutResults;
use trellis_types::{ClipRect, LayoutBox, NodeId};

impl<T: SceneNode> SceneTree<T> {
    /// Applies a root's results in pre-order.
    ///
    /// Nodes missing from `results` keep whatever geometry they had. Each node
    /// present gets its boxes rebuilt and its scroll extents reset before its
    /// children add to them.
    pub(crate) fn apply_results(&mut self, root: NodeId, results: &LayoutResults) {
        let tolerance = self.config.scroll_snap_tolerance;
        for id in self.descendants(root) {
            let Some(solved) = results.get(&id).copied() else {
                continue;
            };
            let Some(flex) = self.flex_mut(id) else {
                continue;
            };
            let clip = flex.geometry.map_or(ClipRect::UNBOUNDED, |g| g.clip);
            let mut geometry = Geometry::solved(solved, flex.border_width(), flex.padding());
            geometry.clip = clip;
            flex.geometry = Some(geometry);
            let parent = flex.parent_flex();

            if let Some(parent) = parent {
                self.add_scroll_extent(parent, &solved, tolerance);
            }

            if let Some(entry) = self.nodes.get_mut(id) {
                if let Some(flex) = entry.flex.as_ref() {
                    entry.payload.on_layout_applied(flex);
                }
            }
            trace!("Applied {:?} to {}", solved, id);
        }
    }

    fn add_scroll_extent(&mut self, parent: NodeId, child: &LayoutBox, tolerance: f32) {
        let Some(geometry) = self.flex_mut(parent).and_then(|f| f.geometry.as_mut()) else {
            return;
        };
        let width = child.right() - geometry.client.left;
        let height = child.bottom() - geometry.client.top;
        if width > geometry.scroll_width {
            geometry.scroll_width = snap_extent(width, geometry.client.width, tolerance);
        }
        if height > geometry.scroll_height {
            geometry.scroll_height = snap_extent(height, geometry.client.height, tolerance);
        }
    }

    /// Pre-children step of an update pass: clamp overscroll, then clip.
    pub(crate) fn refresh_geometry(&mut self, id: NodeId) {
        let Some(flex) = self.flex(id) else {
            return;
        };
        let Some(offset) = flex.geometry.map(|g| g.offset) else {
            return;
        };
        let escapes = flex.is_layout_root() || flex.style().position == PositionType::Absolute;
        let frame = if escapes {
            None
        } else {
            flex.parent_flex().and_then(|p| self.parent_frame(p))
        };
        let clip = frame.map_or(ClipRect::UNBOUNDED, |f| child_clip(&f, &offset));

        let Some(flex) = self.flex_mut(id) else {
            return;
        };
        flex.clamp_scroll();
        if let Some(geometry) = flex.geometry.as_mut() {
            geometry.clip = clip;
        }
        flex.is_fully_clipped = clip.hides(offset.width, offset.height);
    }

    fn parent_frame(&self, parent: NodeId) -> Option<ParentFrame> {
        let flex = self.flex(parent)?;
        let geometry = flex.geometry?;
        Some(ParentFrame {
            client: geometry.client,
            clip: geometry.clip,
            clips_children: flex.style().overflow.clips(),
            scroll_left: flex.scroll_left,
            scroll_top: flex.scroll_top,
        })
    }
}
