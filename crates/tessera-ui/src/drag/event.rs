use super::DragObject;
use crate::tree::NodeId;
use std::sync::Arc;

/// Notifications emitted by [`DragDrop`](super::DragDrop).
#[derive(Debug, Clone)]
pub enum DragEvent {
    /// The drag moved onto a widget.
    EnterWidget {
        widget: NodeId,
        drag_object: Arc<DragObject>,
    },
    /// The drag left a widget.
    ExitWidget {
        widget: NodeId,
        drag_object: Arc<DragObject>,
    },
    /// The drag was released over `target`.
    Ended {
        target: NodeId,
        drag_object: Arc<DragObject>,
    },
}

impl DragEvent {
    /// The widget this event concerns.
    pub fn widget(&self) -> NodeId {
        match self {
            DragEvent::EnterWidget { widget, .. } | DragEvent::ExitWidget { widget, .. } => *widget,
            DragEvent::Ended { target, .. } => *target,
        }
    }

    pub fn drag_object(&self) -> &Arc<DragObject> {
        match self {
            DragEvent::EnterWidget { drag_object, .. }
            | DragEvent::ExitWidget { drag_object, .. }
            | DragEvent::Ended { drag_object, .. } => drag_object,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DragEvent::EnterWidget { .. } => "drag_enter_widget",
            DragEvent::ExitWidget { .. } => "drag_exit_widget",
            DragEvent::Ended { .. } => "drag_ended",
        }
    }
}

/// Widgets that react to drags passing over them.
pub trait DropTarget {
    fn drag_entered(&mut self, drag_object: &Arc<DragObject>);

    fn drag_exited(&mut self, drag_object: &Arc<DragObject>);

    fn drag_dropped(&mut self, drag_object: &Arc<DragObject>);
}
