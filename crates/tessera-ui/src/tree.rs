//! Retained UI tree.

use crate::drag::DragObject;
use crate::error::{UiError, UiResult};
use crate::widgets::Widget;
use indexmap::IndexMap;
use std::sync::Arc;
use tessera_core::math::Vec2;

/// Node identifier in the UI tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Node rectangle, relative to the parent node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn translate(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }
}

/// Widget visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Drawn and hit-testable.
    #[default]
    Visible,
    /// Not drawn, still occupies space.
    Invisible,
    /// Not drawn and takes no space.
    Gone,
}

/// A node in the UI tree.
pub struct UiNode {
    pub widget: Box<dyn Widget>,
    pub layout: LayoutRect,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub visibility: Visibility,
    /// Hit testing skips this node and its subtree.
    pub ignore_input: bool,
    /// Payload picked up when a drag starts on this node.
    pub drag_object: Option<Arc<DragObject>>,
}

/// UI tree managing widgets and their placement.
pub struct UiTree {
    nodes: IndexMap<NodeId, UiNode>,
    root: Option<NodeId>,
    next_id: usize,
}

impl UiTree {
    /// Create a new UI tree.
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            root: None,
            next_id: 0,
        }
    }

    /// Add a widget to the tree and return its NodeId.
    ///
    /// The node is detached until it is given a parent or made the root.
    pub fn add_widget(&mut self, widget: Box<dyn Widget>) -> NodeId {
        let node_id = NodeId(self.next_id);
        self.next_id += 1;

        tracing::trace!(?node_id, widget = widget.debug_name(), "widget added");

        self.nodes.insert(
            node_id,
            UiNode {
                widget,
                layout: LayoutRect::default(),
                parent: None,
                children: Vec::new(),
                visibility: Visibility::Visible,
                ignore_input: false,
                drag_object: None,
            },
        );

        node_id
    }

    /// Append `child` to `parent`'s children, detaching it from any previous parent.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> UiResult<()> {
        self.ensure(parent)?;
        self.ensure(child)?;

        if parent == child {
            return Err(UiError::SelfParent(child));
        }
        if self.ancestors(parent).any(|ancestor| ancestor == child) {
            return Err(UiError::Cycle { parent, child });
        }

        self.detach(child);

        if let Some(child_node) = self.nodes.get_mut(&child) {
            child_node.parent = Some(parent);
        }
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.push(child);
        }

        Ok(())
    }

    /// Remove a node and its whole subtree.
    pub fn remove_node(&mut self, node_id: NodeId) -> UiResult<()> {
        self.ensure(node_id)?;
        self.detach(node_id);

        let mut stack = vec![node_id];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.shift_remove(&id) {
                stack.extend(node.children);
            }
        }

        if self.root.is_some_and(|root| !self.nodes.contains_key(&root)) {
            self.root = None;
        }

        Ok(())
    }

    /// Set the root node.
    pub fn set_root(&mut self, node_id: NodeId) -> UiResult<()> {
        self.ensure(node_id)?;
        self.detach(node_id);
        self.root = Some(node_id);
        Ok(())
    }

    /// Get the root node.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn contains(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get_node(&self, node_id: NodeId) -> Option<&UiNode> {
        self.nodes.get(&node_id)
    }

    pub fn get_widget(&self, node_id: NodeId) -> Option<&dyn Widget> {
        self.nodes.get(&node_id).map(|n| n.widget.as_ref())
    }

    pub fn get_widget_mut(&mut self, node_id: NodeId) -> Option<&mut dyn Widget> {
        self.nodes.get_mut(&node_id).map(|n| n.widget.as_mut())
    }

    /// Downcast a node's widget to a concrete type.
    pub fn widget<T: Widget>(&self, node_id: NodeId) -> Option<&T> {
        self.get_widget(node_id)?.as_any().downcast_ref::<T>()
    }

    pub fn widget_mut<T: Widget>(&mut self, node_id: NodeId) -> Option<&mut T> {
        self.get_widget_mut(node_id)?.as_any_mut().downcast_mut::<T>()
    }

    pub fn parent(&self, node_id: NodeId) -> Option<NodeId> {
        self.nodes.get(&node_id)?.parent
    }

    pub fn children(&self, node_id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&node_id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate over the ancestors of a node, nearest first.
    pub fn ancestors(&self, node_id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(node_id), move |&id| self.parent(id))
    }

    /// Get layout for a node.
    pub fn get_layout(&self, node_id: NodeId) -> Option<LayoutRect> {
        self.nodes.get(&node_id).map(|n| n.layout)
    }

    pub fn set_rect(&mut self, node_id: NodeId, rect: LayoutRect) {
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.layout = rect;
        }
    }

    /// Move a node, keeping its size.
    pub fn set_position(&mut self, node_id: NodeId, position: Vec2) {
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.layout.x = position.x;
            node.layout.y = position.y;
        }
    }

    /// Rectangle in root coordinates.
    pub fn absolute_rect(&self, node_id: NodeId) -> Option<LayoutRect> {
        let layout = self.get_layout(node_id)?;
        let offset = self
            .ancestors(node_id)
            .filter_map(|id| self.get_layout(id))
            .fold(Vec2::ZERO, |acc, rect| acc + rect.position());
        Some(layout.translate(offset))
    }

    pub fn visibility(&self, node_id: NodeId) -> Option<Visibility> {
        self.nodes.get(&node_id).map(|n| n.visibility)
    }

    pub fn set_visibility(&mut self, node_id: NodeId, visibility: Visibility) {
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.visibility = visibility;
        }
    }

    pub fn ignores_input(&self, node_id: NodeId) -> bool {
        self.nodes.get(&node_id).is_some_and(|n| n.ignore_input)
    }

    pub fn set_ignore_input(&mut self, node_id: NodeId, ignore: bool) {
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.ignore_input = ignore;
        }
    }

    /// Move a node in front of all of its siblings.
    pub fn raise_to_top(&mut self, node_id: NodeId) {
        let Some(parent) = self.parent(node_id) else {
            return;
        };
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.retain(|&id| id != node_id);
            parent_node.children.push(node_id);
        }
    }

    pub fn drag_object(&self, node_id: NodeId) -> Option<&Arc<DragObject>> {
        self.nodes.get(&node_id)?.drag_object.as_ref()
    }

    /// Attach (or clear) the payload a drag started on this node carries.
    pub fn set_drag_object(&mut self, node_id: NodeId, drag_object: Option<Arc<DragObject>>) {
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.drag_object = drag_object;
        }
    }

    /// Walk from `node_id` up to the nearest node whose widget accepts
    /// pointer interaction (the node itself included).
    pub fn resolve_pointer_target(&self, node_id: NodeId) -> Option<NodeId> {
        std::iter::once(node_id)
            .chain(self.ancestors(node_id))
            .find(|&id| self.get_widget(id).is_some_and(|w| w.is_pointer_target()))
    }

    /// Preferred size of a node, measured bottom-up. `Gone` children take no space.
    pub fn preferred_size(&self, node_id: NodeId) -> Vec2 {
        let Some(node) = self.nodes.get(&node_id) else {
            return Vec2::ZERO;
        };

        let child_sizes: Vec<Vec2> = node
            .children
            .iter()
            .filter(|&&id| self.visibility(id) != Some(Visibility::Gone))
            .map(|&id| self.preferred_size(id))
            .collect();

        node.widget.measure(&child_sizes)
    }

    fn ensure(&self, node_id: NodeId) -> UiResult<()> {
        if self.nodes.contains_key(&node_id) {
            Ok(())
        } else {
            Err(UiError::UnknownNode(node_id))
        }
    }

    fn detach(&mut self, node_id: NodeId) {
        let Some(old_parent) = self.nodes.get_mut(&node_id).and_then(|n| n.parent.take()) else {
            return;
        };
        if let Some(parent_node) = self.nodes.get_mut(&old_parent) {
            parent_node.children.retain(|&id| id != node_id);
        }
    }
}

impl Default for UiTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{Container, Text};

    fn tree_with_root() -> (UiTree, NodeId) {
        let mut tree = UiTree::new();
        let root = tree.add_widget(Box::new(Container::new()));
        tree.set_root(root).unwrap();
        (tree, root)
    }

    #[test]
    fn test_add_child_links_both_ways() {
        let (mut tree, root) = tree_with_root();
        let child = tree.add_widget(Box::new(Text::new("hello")));
        tree.add_child(root, child).unwrap();

        assert_eq!(tree.parent(child), Some(root));
        assert_eq!(tree.children(root), &[child]);
    }

    #[test]
    fn test_reparent_detaches() {
        let (mut tree, root) = tree_with_root();
        let a = tree.add_widget(Box::new(Container::new()));
        let b = tree.add_widget(Box::new(Container::new()));
        let leaf = tree.add_widget(Box::new(Text::new("leaf")));
        tree.add_child(root, a).unwrap();
        tree.add_child(root, b).unwrap();
        tree.add_child(a, leaf).unwrap();

        tree.add_child(b, leaf).unwrap();
        assert!(tree.children(a).is_empty());
        assert_eq!(tree.children(b), &[leaf]);
    }

    #[test]
    fn test_cycle_rejected() {
        let (mut tree, root) = tree_with_root();
        let child = tree.add_widget(Box::new(Container::new()));
        tree.add_child(root, child).unwrap();

        assert_eq!(
            tree.add_child(child, root),
            Err(UiError::Cycle {
                parent: child,
                child: root
            })
        );
        assert_eq!(tree.add_child(child, child), Err(UiError::SelfParent(child)));
        assert_eq!(
            tree.add_child(root, NodeId(99)),
            Err(UiError::UnknownNode(NodeId(99)))
        );
    }

    #[test]
    fn test_remove_subtree() {
        let (mut tree, root) = tree_with_root();
        let panel = tree.add_widget(Box::new(Container::new()));
        let label = tree.add_widget(Box::new(Text::new("x")));
        tree.add_child(root, panel).unwrap();
        tree.add_child(panel, label).unwrap();

        tree.remove_node(panel).unwrap();
        assert!(!tree.contains(panel));
        assert!(!tree.contains(label));
        assert!(tree.children(root).is_empty());

        tree.remove_node(root).unwrap();
        assert_eq!(tree.root(), None);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_absolute_rect() {
        let (mut tree, root) = tree_with_root();
        let panel = tree.add_widget(Box::new(Container::new()));
        let label = tree.add_widget(Box::new(Text::new("x")));
        tree.add_child(root, panel).unwrap();
        tree.add_child(panel, label).unwrap();

        tree.set_rect(root, LayoutRect::new(0.0, 0.0, 800.0, 600.0));
        tree.set_rect(panel, LayoutRect::new(100.0, 50.0, 200.0, 200.0));
        tree.set_rect(label, LayoutRect::new(10.0, 5.0, 40.0, 12.0));

        assert_eq!(
            tree.absolute_rect(label),
            Some(LayoutRect::new(110.0, 55.0, 40.0, 12.0))
        );
    }

    #[test]
    fn test_raise_to_top() {
        let (mut tree, root) = tree_with_root();
        let a = tree.add_widget(Box::new(Container::new()));
        let b = tree.add_widget(Box::new(Container::new()));
        tree.add_child(root, a).unwrap();
        tree.add_child(root, b).unwrap();

        tree.raise_to_top(a);
        assert_eq!(tree.children(root), &[b, a]);
    }

    #[test]
    fn test_resolve_pointer_target_skips_passthrough() {
        let (mut tree, root) = tree_with_root();
        let button = tree.add_widget(Box::new(Container::new()));
        let skin = tree.add_widget(Box::new(Container::new().passthrough()));
        let label = tree.add_widget(Box::new(Text::new("OK").passthrough()));
        tree.add_child(root, button).unwrap();
        tree.add_child(button, skin).unwrap();
        tree.add_child(skin, label).unwrap();

        assert_eq!(tree.resolve_pointer_target(label), Some(button));
        assert_eq!(tree.resolve_pointer_target(button), Some(button));
    }

    #[test]
    fn test_preferred_size_ignores_gone_children() {
        let (mut tree, root) = tree_with_root();
        let a = tree.add_widget(Box::new(Text::new("abcd")));
        let b = tree.add_widget(Box::new(Text::new("abcdefgh")));
        tree.add_child(root, a).unwrap();
        tree.add_child(root, b).unwrap();

        let both = tree.preferred_size(root);
        tree.set_visibility(b, Visibility::Gone);
        let only_a = tree.preferred_size(root);

        assert!(only_a.y < both.y);
        assert_eq!(only_a, tree.preferred_size(a));
    }
}
