//! Tessera UI - widget tree and drag-and-drop for the editor
//!
//! This crate provides:
//! - A retained widget tree with parent/child links, visibility and z-order
//! - Hover tracking by hit testing the tree
//! - Drag and drop between widgets and from the OS file manager, with a
//!   floating label that follows the cursor
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use tessera_ui::{Container, DragEvent, DragObject, LayoutRect, UiSystem};
//!
//! let mut ui = UiSystem::new().unwrap();
//! let root = ui.root();
//!
//! let asset = ui.tree_mut().add_widget(Box::new(Container::new()));
//! ui.tree_mut().add_child(root, asset).unwrap();
//! ui.tree_mut().set_rect(asset, LayoutRect::new(0.0, 0.0, 64.0, 64.0));
//! ui.tree_mut()
//!     .set_drag_object(asset, Some(Arc::new(DragObject::new().with_text("crate.png"))));
//!
//! ui.drag_drop_mut().events().subscribe(|event: &DragEvent| {
//!     if let DragEvent::Ended { target, drag_object } = event {
//!         println!("{} dropped on {:?}", drag_object.text(), target);
//!     }
//! });
//!
//! // Per frame:
//! // ui.dispatch_events(&mut event_batch, &mut input_state);
//! ```

pub mod drag;
pub mod error;
pub mod hover;
pub mod system;
pub mod tree;
pub mod widgets;

pub use drag::{DragDrop, DragDropConfig, DragEvent, DragIndicator, DragObject, DropTarget};
pub use error::{UiError, UiResult};
pub use hover::HoverTracker;
pub use system::UiSystem;
pub use tree::{LayoutRect, NodeId, UiNode, UiTree, Visibility};
pub use widgets::{
    Container, DropFilter, DropZone, FontDescription, Gravity, LayoutAxis, Text, TextWidget,
    Widget,
};
