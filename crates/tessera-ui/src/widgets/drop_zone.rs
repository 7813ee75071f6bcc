use super::{FontDescription, Widget};
use crate::drag::{DragObject, DropTarget};
use std::any::Any;
use std::rc::Rc;
use std::sync::Arc;
use tessera_core::math::Vec2;

pub type DropCallback = Rc<dyn Fn(&DragObject)>;

/// Which payloads a [`DropZone`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropFilter {
    #[default]
    Any,
    /// Only drags carrying at least one file.
    Files,
    /// Only drags carrying text and no files.
    Text,
}

impl DropFilter {
    pub fn accepts(&self, drag_object: &DragObject) -> bool {
        match self {
            DropFilter::Any => true,
            DropFilter::Files => drag_object.has_files(),
            DropFilter::Text => drag_object.has_text() && !drag_object.has_files(),
        }
    }
}

/// A labelled area that highlights while something is dragged over it and
/// collects what is dropped on it.
pub struct DropZone {
    pub label: String,
    pub font: FontDescription,
    pub filter: DropFilter,
    pub min_size: Vec2,
    pub is_drag_over: bool,
    pub dropped: Vec<Arc<DragObject>>,
    pub on_drop: Option<DropCallback>,
}

impl DropZone {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            font: FontDescription::default(),
            filter: DropFilter::Any,
            min_size: Vec2::new(64.0, 32.0),
            is_drag_over: false,
            dropped: Vec::new(),
            on_drop: None,
        }
    }

    pub fn filter(mut self, filter: DropFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn min_size(mut self, size: Vec2) -> Self {
        self.min_size = size;
        self
    }

    pub fn on_drop<F>(mut self, callback: F) -> Self
    where
        F: Fn(&DragObject) + 'static,
    {
        self.on_drop = Some(Rc::new(callback));
        self
    }
}

impl std::fmt::Debug for DropZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropZone")
            .field("label", &self.label)
            .field("filter", &self.filter)
            .field("is_drag_over", &self.is_drag_over)
            .field("dropped", &self.dropped.len())
            .finish_non_exhaustive()
    }
}

impl Widget for DropZone {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn debug_name(&self) -> &str {
        "DropZone"
    }

    fn measure(&self, _children: &[Vec2]) -> Vec2 {
        self.font.measure(&self.label).max(self.min_size)
    }

    fn as_drop_target_mut(&mut self) -> Option<&mut dyn DropTarget> {
        Some(self)
    }
}

impl DropTarget for DropZone {
    fn drag_entered(&mut self, drag_object: &Arc<DragObject>) {
        self.is_drag_over = self.filter.accepts(drag_object);
    }

    fn drag_exited(&mut self, _drag_object: &Arc<DragObject>) {
        self.is_drag_over = false;
    }

    fn drag_dropped(&mut self, drag_object: &Arc<DragObject>) {
        self.is_drag_over = false;

        if !self.filter.accepts(drag_object) {
            tracing::debug!(zone = %self.label, "drop rejected by filter");
            return;
        }

        self.dropped.push(Arc::clone(drag_object));
        if let Some(callback) = self.on_drop.clone() {
            callback(drag_object.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_filter() {
        let text = DragObject::new().with_text("node");
        let files = DragObject::new().with_filename("/tmp/a.png");

        assert!(DropFilter::Any.accepts(&text));
        assert!(DropFilter::Text.accepts(&text));
        assert!(!DropFilter::Files.accepts(&text));
        assert!(DropFilter::Files.accepts(&files));
        assert!(!DropFilter::Text.accepts(&files));
    }

    #[test]
    fn test_drop_records_and_calls_back() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let mut zone = DropZone::new("Assets").on_drop(move |_| counter.set(counter.get() + 1));

        let payload = Arc::new(DragObject::new().with_text("mesh"));
        zone.drag_entered(&payload);
        assert!(zone.is_drag_over);

        zone.drag_dropped(&payload);
        assert!(!zone.is_drag_over);
        assert_eq!(zone.dropped.len(), 1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_rejected_drop() {
        let mut zone = DropZone::new("Files only").filter(DropFilter::Files);
        let payload = Arc::new(DragObject::new().with_text("mesh"));

        zone.drag_entered(&payload);
        assert!(!zone.is_drag_over);

        zone.drag_dropped(&payload);
        assert!(zone.dropped.is_empty());
    }
}
