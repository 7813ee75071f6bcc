//! Widget system for UI components.

mod container;
mod drop_zone;
mod text;

pub use container::{Container, LayoutAxis};
pub use drop_zone::{DropCallback, DropFilter, DropZone};
pub use text::{FontDescription, Gravity, Text};

use crate::drag::DropTarget;
use std::any::Any;
use tessera_core::math::Vec2;

/// Base trait for all UI widgets.
///
/// Capabilities are exposed through query methods returning `Option`, so
/// callers never need to know the concrete widget type:
///
/// ```rust
/// use tessera_ui::{Text, Widget};
///
/// fn rename(widget: &mut dyn Widget, text: &str) {
///     if let Some(text_widget) = widget.as_text_widget_mut() {
///         text_widget.set_text(text);
///     }
/// }
///
/// let mut label = Text::new("before");
/// rename(&mut label, "after");
/// assert_eq!(label.content, "after");
/// ```
pub trait Widget: Any {
    /// Get widget type as Any for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Get mutable widget type as Any for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Get the widget's name for debugging.
    fn debug_name(&self) -> &str {
        "Widget"
    }

    /// Whether pointer interaction stops at this widget.
    ///
    /// Pass-through widgets (skins, decorations, labels inside buttons)
    /// forward hover, drag sources and drop targets to their nearest
    /// targetable ancestor.
    fn is_pointer_target(&self) -> bool {
        true
    }

    /// Measure preferred size given the preferred sizes of the visible children.
    fn measure(&self, _children: &[Vec2]) -> Vec2 {
        Vec2::ZERO
    }

    /// Query if this widget supports text operations.
    fn as_text_widget(&self) -> Option<&dyn TextWidget> {
        None
    }

    /// Query if this widget supports text operations (mutable).
    fn as_text_widget_mut(&mut self) -> Option<&mut dyn TextWidget> {
        None
    }

    /// Query if this widget reacts to drag and drop.
    fn as_drop_target_mut(&mut self) -> Option<&mut dyn DropTarget> {
        None
    }
}

/// Widgets that display a string.
pub trait TextWidget {
    fn text(&self) -> &str;

    fn set_text(&mut self, text: &str);
}
