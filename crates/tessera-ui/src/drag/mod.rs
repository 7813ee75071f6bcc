//! Drag and drop between widgets, and from the OS file manager.
//!
//! A drag starts when the left mouse button goes down over a widget that
//! carries a [`DragObject`] (see [`UiTree::set_drag_object`]) and becomes
//! active on the next mouse move. While it is active a floating
//! [`DragIndicator`] follows the cursor and every change of the widget under
//! the cursor emits [`DragEvent::ExitWidget`] / [`DragEvent::EnterWidget`].
//! Releasing the button emits a single [`DragEvent::Ended`] for the last
//! widget entered.
//!
//! Events are delivered to the affected widget's [`DropTarget`] capability
//! first, then published on the controller's event bus.
//!
//! [`UiTree::set_drag_object`]: crate::tree::UiTree::set_drag_object

mod controller;
mod event;
mod indicator;
mod object;

pub use controller::{DragDrop, DragDropConfig};
pub use event::{DragEvent, DropTarget};
pub use indicator::DragIndicator;
pub use object::DragObject;
