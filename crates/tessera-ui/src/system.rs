use crate::drag::{DragDrop, DragDropConfig};
use crate::error::UiResult;
use crate::hover::HoverTracker;
use crate::tree::{LayoutRect, NodeId, UiTree};
use crate::widgets::Container;
use tessera_core::math::Vec2;
use tessera_core::profiling::profile_function;
use tessera_input::{Event, EventBatch, HandleStatus, InputState};

/// Owns the widget tree together with hover tracking and drag and drop,
/// and feeds them the frame's input.
pub struct UiSystem {
    tree: UiTree,
    root: NodeId,
    hover: HoverTracker,
    drag_drop: DragDrop,
}

impl UiSystem {
    pub fn new() -> UiResult<Self> {
        Self::with_config(DragDropConfig::default())
    }

    pub fn with_config(config: DragDropConfig) -> UiResult<Self> {
        let mut tree = UiTree::new();
        let root = tree.add_widget(Box::new(Container::new()));
        tree.set_root(root)?;

        let drag_drop = DragDrop::with_config(&mut tree, config)?;

        Ok(Self {
            tree,
            root,
            hover: HoverTracker::new(),
            drag_drop,
        })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn tree(&self) -> &UiTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut UiTree {
        &mut self.tree
    }

    pub fn hover(&self) -> &HoverTracker {
        &self.hover
    }

    pub fn hovered(&self) -> Option<NodeId> {
        self.hover.hovered()
    }

    pub fn drag_drop(&self) -> &DragDrop {
        &self.drag_drop
    }

    pub fn drag_drop_mut(&mut self) -> &mut DragDrop {
        &mut self.drag_drop
    }

    /// Resize the root to cover the viewport.
    pub fn set_viewport_size(&mut self, size: Vec2) {
        self.tree
            .set_rect(self.root, LayoutRect::from_position_size(Vec2::ZERO, size));
    }

    /// Process one frame of input, in order.
    ///
    /// Each event updates `input` first, then hover tracking, then drag and
    /// drop. Events are observed, not consumed.
    pub fn handle_events(&mut self, events: &EventBatch, input: &mut InputState) {
        profile_function!();
        for event in events.iter() {
            self.handle_event(event, input);
        }
    }

    /// Like [`handle_events`](Self::handle_events), but removes the events
    /// drag and drop consumed from `events` (the release that drops, OS
    /// file-drag events) so later handlers only see the rest.
    pub fn dispatch_events(&mut self, events: &mut EventBatch, input: &mut InputState) {
        profile_function!();
        events.dispatch(|event| self.handle_event(event, input));
    }

    fn handle_event(&mut self, event: &Event, input: &mut InputState) -> HandleStatus {
        input.on_event(event);
        self.hover.on_event(event, &self.tree);
        self.drag_drop
            .on_event(event, input, self.hover.hovered(), &mut self.tree)
    }
}
