use super::DragObject;
use crate::error::{UiError, UiResult};
use crate::tree::{LayoutRect, NodeId, UiTree, Visibility};
use crate::widgets::{Container, FontDescription, Gravity, Text};
use tessera_core::math::Vec2;

/// Floating label that follows the cursor during a drag.
///
/// A preferred-size container holding a single text field. It lives under
/// the tree root for its whole lifetime and is toggled between `Gone` and
/// `Visible`. It ignores input so it never becomes a hover or drop target.
#[derive(Debug, Clone, Copy)]
pub struct DragIndicator {
    layout: NodeId,
    text: NodeId,
    offset: Vec2,
}

impl DragIndicator {
    /// Build the indicator and attach it to the root of `tree`.
    pub fn new(tree: &mut UiTree, font: FontDescription, offset: Vec2) -> UiResult<Self> {
        let root = tree.root().ok_or(UiError::NoRoot)?;

        let layout = tree.add_widget(Box::new(Container::new()));
        let text = tree.add_widget(Box::new(Text::new("").font(font).gravity(Gravity::TOP)));
        tree.add_child(layout, text)?;

        tree.set_visibility(layout, Visibility::Gone);
        tree.set_ignore_input(layout, true);

        // Attached to the root so it is never pruned with a panel
        tree.add_child(root, layout)?;

        Ok(Self {
            layout,
            text,
            offset,
        })
    }

    /// The container node.
    pub fn node(&self) -> NodeId {
        self.layout
    }

    pub fn text_node(&self) -> NodeId {
        self.text
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn is_visible(&self, tree: &UiTree) -> bool {
        tree.visibility(self.layout) == Some(Visibility::Visible)
    }

    /// Bring the indicator to the front, showing the drag object's text,
    /// sized to its preferred size at the origin.
    pub fn show(&self, tree: &mut UiTree, drag_object: &DragObject) {
        tree.raise_to_top(self.layout);
        tree.set_visibility(self.layout, Visibility::Visible);

        if let Some(text) = tree.get_widget_mut(self.text).and_then(|w| w.as_text_widget_mut()) {
            text.set_text(drag_object.text());
        }

        let text_size = tree.preferred_size(self.text);
        tree.set_rect(self.text, LayoutRect::from_position_size(Vec2::ZERO, text_size));

        let size = tree.preferred_size(self.layout);
        tree.set_rect(self.layout, LayoutRect::from_position_size(Vec2::ZERO, size));
    }

    pub fn hide(&self, tree: &mut UiTree) {
        tree.set_visibility(self.layout, Visibility::Gone);
    }

    /// Place the indicator relative to the cursor position.
    pub fn follow(&self, tree: &mut UiTree, cursor: Vec2) {
        tree.set_position(self.layout, cursor + self.offset);
    }

    pub fn position(&self, tree: &UiTree) -> Option<Vec2> {
        tree.get_layout(self.layout).map(|rect| rect.position())
    }

    pub fn text<'a>(&self, tree: &'a UiTree) -> Option<&'a str> {
        tree.get_widget(self.text)?
            .as_text_widget()
            .map(|t| t.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with_root() -> (UiTree, NodeId) {
        let mut tree = UiTree::new();
        let root = tree.add_widget(Box::new(Container::new()));
        tree.set_root(root).unwrap();
        (tree, root)
    }

    #[test]
    fn test_requires_root() {
        let mut tree = UiTree::new();
        let result = DragIndicator::new(&mut tree, FontDescription::default(), Vec2::ZERO);
        assert_eq!(result.unwrap_err(), UiError::NoRoot);
    }

    #[test]
    fn test_starts_hidden_under_root() {
        let (mut tree, root) = tree_with_root();
        let indicator =
            DragIndicator::new(&mut tree, FontDescription::default(), Vec2::new(0.0, -20.0))
                .unwrap();

        assert_eq!(tree.parent(indicator.node()), Some(root));
        assert!(!indicator.is_visible(&tree));
        assert!(tree.ignores_input(indicator.node()));
    }

    #[test]
    fn test_show_sizes_and_raises() {
        let (mut tree, root) = tree_with_root();
        let indicator =
            DragIndicator::new(&mut tree, FontDescription::new("Vera", 12.0), Vec2::ZERO)
                .unwrap();
        let panel = tree.add_widget(Box::new(Container::new()));
        tree.add_child(root, panel).unwrap();

        indicator.show(&mut tree, &DragObject::new().with_text("Cube"));

        assert!(indicator.is_visible(&tree));
        assert_eq!(tree.children(root).last(), Some(&indicator.node()));
        assert_eq!(indicator.text(&tree), Some("Cube"));

        let rect = tree.get_layout(indicator.node()).unwrap();
        assert_eq!(rect.position(), Vec2::ZERO);
        assert_eq!(rect.size(), Vec2::new(24.0, 15.0));
    }

    #[test]
    fn test_follow_applies_offset() {
        let (mut tree, _) = tree_with_root();
        let indicator =
            DragIndicator::new(&mut tree, FontDescription::default(), Vec2::new(0.0, -20.0))
                .unwrap();

        indicator.follow(&mut tree, Vec2::new(100.0, 50.0));
        assert_eq!(indicator.position(&tree), Some(Vec2::new(100.0, 30.0)));

        indicator.hide(&mut tree);
        assert!(!indicator.is_visible(&tree));
    }
}
