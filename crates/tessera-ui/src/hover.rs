//! Hover tracking by hit testing the UI tree.

use crate::tree::{NodeId, UiTree, Visibility};
use tessera_core::math::Vec2;
use tessera_core::profiling::profile_function;
use tessera_input::Event;

/// Tracks the deepest node under the cursor.
#[derive(Debug, Default)]
pub struct HoverTracker {
    /// Currently hovered node.
    hovered: Option<NodeId>,
    /// Current mouse position.
    mouse_pos: Vec2,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get currently hovered node.
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// Get current mouse position.
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_pos
    }

    pub fn on_event(&mut self, event: &Event, tree: &UiTree) {
        match event {
            Event::MouseMoved(pos) => {
                self.update(tree, Vec2::new(pos.x as f32, pos.y as f32));
            }
            Event::MouseLeft => {
                self.hovered = None;
            }
            _ => {}
        }
    }

    /// Move the cursor and recompute the hovered node.
    pub fn update(&mut self, tree: &UiTree, mouse_pos: Vec2) -> Option<NodeId> {
        self.mouse_pos = mouse_pos;
        self.refresh(tree)
    }

    /// Recompute the hovered node at the last cursor position, e.g. after
    /// the tree changed under a still cursor.
    pub fn refresh(&mut self, tree: &UiTree) -> Option<NodeId> {
        let new_hovered = hit_test(tree, self.mouse_pos);

        if new_hovered != self.hovered {
            tracing::trace!(from = ?self.hovered, to = ?new_hovered, "hover changed");
            self.hovered = new_hovered;
        }

        self.hovered
    }
}

/// Find the front-most node under `point`.
pub fn hit_test(tree: &UiTree, point: Vec2) -> Option<NodeId> {
    profile_function!();
    let root = tree.root()?;
    hit_test_node(tree, root, point, Vec2::ZERO)
}

/// Recursively hit test a node and its children with position offset.
fn hit_test_node(tree: &UiTree, node_id: NodeId, point: Vec2, parent_offset: Vec2) -> Option<NodeId> {
    let node = tree.get_node(node_id)?;

    if node.visibility != Visibility::Visible || node.ignore_input {
        return None;
    }

    let abs_layout = node.layout.translate(parent_offset);
    if !abs_layout.contains(point) {
        return None;
    }

    // Later children are drawn on top
    for &child_id in node.children.iter().rev() {
        if let Some(hit) = hit_test_node(tree, child_id, point, abs_layout.position()) {
            return Some(hit);
        }
    }

    Some(node_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::LayoutRect;
    use crate::widgets::Container;
    use tessera_core::geometry::LogicalPosition;

    fn layered_tree() -> (UiTree, NodeId, NodeId, NodeId) {
        let mut tree = UiTree::new();
        let root = tree.add_widget(Box::new(Container::new()));
        tree.set_root(root).unwrap();
        tree.set_rect(root, LayoutRect::new(0.0, 0.0, 400.0, 300.0));

        let back = tree.add_widget(Box::new(Container::new()));
        let front = tree.add_widget(Box::new(Container::new()));
        tree.add_child(root, back).unwrap();
        tree.add_child(root, front).unwrap();
        tree.set_rect(back, LayoutRect::new(10.0, 10.0, 100.0, 100.0));
        tree.set_rect(front, LayoutRect::new(50.0, 50.0, 100.0, 100.0));

        (tree, root, back, front)
    }

    #[test]
    fn test_front_most_wins() {
        let (tree, root, back, front) = layered_tree();
        assert_eq!(hit_test(&tree, Vec2::new(20.0, 20.0)), Some(back));
        assert_eq!(hit_test(&tree, Vec2::new(60.0, 60.0)), Some(front));
        assert_eq!(hit_test(&tree, Vec2::new(300.0, 250.0)), Some(root));
        assert_eq!(hit_test(&tree, Vec2::new(500.0, 250.0)), None);
    }

    #[test]
    fn test_nested_offsets() {
        let (mut tree, _, back, _) = layered_tree();
        let inner = tree.add_widget(Box::new(Container::new()));
        tree.add_child(back, inner).unwrap();
        tree.set_rect(inner, LayoutRect::new(5.0, 5.0, 10.0, 10.0));

        assert_eq!(hit_test(&tree, Vec2::new(17.0, 17.0)), Some(inner));
        assert_eq!(hit_test(&tree, Vec2::new(30.0, 30.0)), Some(back));
    }

    #[test]
    fn test_hidden_and_ignored_are_skipped() {
        let (mut tree, _, back, front) = layered_tree();

        tree.set_visibility(front, Visibility::Invisible);
        assert_eq!(hit_test(&tree, Vec2::new(60.0, 60.0)), Some(back));

        tree.set_visibility(front, Visibility::Visible);
        tree.set_ignore_input(front, true);
        assert_eq!(hit_test(&tree, Vec2::new(60.0, 60.0)), Some(back));
    }

    #[test]
    fn test_tracker_events() {
        let (tree, _, back, _) = layered_tree();
        let mut hover = HoverTracker::new();

        hover.on_event(&Event::MouseMoved(LogicalPosition::new(20.0, 20.0)), &tree);
        assert_eq!(hover.hovered(), Some(back));
        assert_eq!(hover.mouse_position(), Vec2::new(20.0, 20.0));

        hover.on_event(&Event::MouseLeft, &tree);
        assert_eq!(hover.hovered(), None);
    }
}
