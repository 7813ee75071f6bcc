use super::{DragEvent, DragIndicator, DragObject};
use crate::error::UiResult;
use crate::tree::{NodeId, UiTree};
use crate::widgets::FontDescription;
use std::path::PathBuf;
use std::sync::Arc;
use tessera_core::event::EventBus;
use tessera_core::math::Vec2;
use tessera_core::profiling::profile_function;
use tessera_input::{Event, HandleStatus, InputState, MouseButton};

/// Drag and drop settings.
#[derive(Debug, Clone)]
pub struct DragDropConfig {
    /// Font of the floating indicator label.
    pub font: FontDescription,
    /// Indicator position relative to the cursor.
    pub indicator_offset: Vec2,
    /// Button that starts and drops a drag.
    pub drag_button: MouseButton,
    /// Indicator text for OS file drags. Empty when `None`.
    pub file_drag_label: Option<String>,
}

impl Default for DragDropConfig {
    fn default() -> Self {
        Self {
            font: FontDescription::new("Vera", 12.0),
            indicator_offset: Vec2::new(0.0, -20.0),
            drag_button: MouseButton::Left,
            file_drag_label: None,
        }
    }
}

/// Drag-and-drop controller.
///
/// Fed with mouse and file-drag input, it tracks the widget under the
/// cursor while a drag is active and emits [`DragEvent`]s. There is at most
/// one active drag object at a time.
pub struct DragDrop {
    config: DragDropConfig,
    indicator: DragIndicator,
    /// Active drag payload.
    drag_object: Option<Arc<DragObject>>,
    /// Payload armed by a press; becomes active on the next move.
    drag_select_object: Option<Arc<DragObject>>,
    /// Widget the drag is currently over.
    current_target: Option<NodeId>,
    events: EventBus<DragEvent>,
}

impl DragDrop {
    /// Create a controller with the default configuration.
    ///
    /// Fails if `tree` has no root to host the indicator.
    pub fn new(tree: &mut UiTree) -> UiResult<Self> {
        Self::with_config(tree, DragDropConfig::default())
    }

    pub fn with_config(tree: &mut UiTree, config: DragDropConfig) -> UiResult<Self> {
        let indicator = DragIndicator::new(tree, config.font.clone(), config.indicator_offset)?;

        Ok(Self {
            config,
            indicator,
            drag_object: None,
            drag_select_object: None,
            current_target: None,
            events: EventBus::new(),
        })
    }

    pub fn config(&self) -> &DragDropConfig {
        &self.config
    }

    pub fn indicator(&self) -> &DragIndicator {
        &self.indicator
    }

    /// Bus on which every [`DragEvent`] is published.
    pub fn events(&mut self) -> &mut EventBus<DragEvent> {
        &mut self.events
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_object.is_some()
    }

    pub fn drag_object(&self) -> Option<&Arc<DragObject>> {
        self.drag_object.as_ref()
    }

    /// Payload armed by the last press, not yet moved.
    pub fn pending_drag_object(&self) -> Option<&Arc<DragObject>> {
        self.drag_select_object.as_ref()
    }

    pub fn current_target(&self) -> Option<NodeId> {
        self.current_target
    }

    /// Route one input event. `input` must already reflect `event`, and
    /// `hovered` is the node under the cursor after it.
    ///
    /// A release that finishes a drag and every file-drag event are
    /// consumed. Presses that arm a drag and moves during one are handled.
    pub fn on_event(
        &mut self,
        event: &Event,
        input: &InputState,
        hovered: Option<NodeId>,
        tree: &mut UiTree,
    ) -> HandleStatus {
        match event {
            Event::MouseButtonDown(_) => {
                self.handle_mouse_down(input, hovered, tree);
                if self.drag_select_object.is_some() {
                    HandleStatus::handled()
                } else {
                    HandleStatus::ignored()
                }
            }
            Event::MouseButtonUp(button) => {
                let finishes = self.is_dragging() && *button == self.config.drag_button;
                self.handle_mouse_up(*button, tree);
                if finishes {
                    HandleStatus::consumed()
                } else {
                    HandleStatus::ignored()
                }
            }
            Event::MouseMoved(pos) => {
                let position = Vec2::new(pos.x as f32, pos.y as f32);
                self.handle_mouse_move(position, input, hovered, tree);
                if self.is_dragging() {
                    HandleStatus::handled()
                } else {
                    HandleStatus::ignored()
                }
            }
            Event::FileDragEntered => {
                self.file_drag_entered(tree);
                HandleStatus::consumed()
            }
            Event::FileDragAddFile(path) => {
                self.file_drag_add_file(path.clone());
                HandleStatus::consumed()
            }
            Event::FileDragConcluded => {
                self.file_drag_conclude(tree);
                HandleStatus::consumed()
            }
            Event::FileDragCancelled => {
                self.cancel(tree);
                HandleStatus::consumed()
            }
            // The release of the drag button would never be reported
            Event::Focused(false) => {
                self.cancel(tree);
                HandleStatus::ignored()
            }
            _ => HandleStatus::ignored(),
        }
    }

    /// Arm a drag on the widget under the cursor.
    ///
    /// `input.buttons()` holds every pressed button, so pressing another
    /// button while the drag button is held re-arms as well. A press during
    /// an active drag keeps the entered target.
    pub fn handle_mouse_down(
        &mut self,
        input: &InputState,
        hovered: Option<NodeId>,
        tree: &UiTree,
    ) {
        if !input.is_mouse_visible() {
            return;
        }

        if !input.is_button_pressed(self.config.drag_button) {
            return;
        }

        let Some(widget) = hovered.and_then(|node| tree.resolve_pointer_target(node)) else {
            return;
        };

        if self.drag_object.is_none() {
            self.current_target = Some(widget);
        }
        self.drag_select_object = tree.drag_object(widget).cloned();

        if self.drag_select_object.is_some() {
            tracing::debug!(?widget, "drag armed");
        }
    }

    pub fn handle_mouse_up(&mut self, button: MouseButton, tree: &mut UiTree) {
        self.drag_select_object = None;

        if self.drag_object.is_none() {
            // Press without a drag; nothing was entered
            self.current_target = None;
            return;
        }

        if button != self.config.drag_button {
            return;
        }

        self.drag_end(tree);
    }

    pub fn handle_mouse_move(
        &mut self,
        position: Vec2,
        input: &InputState,
        hovered: Option<NodeId>,
        tree: &mut UiTree,
    ) {
        profile_function!();

        if !input.is_mouse_visible() {
            if self.drag_object.is_some() {
                tracing::debug!("mouse hidden, drag abandoned");
            }
            self.abandon(tree);
            return;
        }

        if let Some(selected) = self.drag_select_object.take() {
            tracing::debug!(text = selected.text(), "drag started");
            self.drag_object = Some(selected);
        }

        let Some(drag_object) = self.drag_object.clone() else {
            return;
        };

        if !self.indicator.is_visible(tree) {
            self.indicator.show(tree, &drag_object);
        }

        self.indicator.follow(tree, position);

        let Some(hover_widget) = hovered.and_then(|node| tree.resolve_pointer_target(node)) else {
            return;
        };

        if self.current_target == Some(hover_widget) {
            return;
        }

        if let Some(previous) = self.current_target {
            self.emit(
                DragEvent::ExitWidget {
                    widget: previous,
                    drag_object: Arc::clone(&drag_object),
                },
                tree,
            );
        }

        self.current_target = Some(hover_widget);

        self.emit(
            DragEvent::EnterWidget {
                widget: hover_widget,
                drag_object,
            },
            tree,
        );
    }

    /// Finish the drag, notifying the current target.
    pub fn drag_end(&mut self, tree: &mut UiTree) {
        let drag_object = self.drag_object.take();
        let current_target = self.current_target.take();

        self.drag_select_object = None;
        self.indicator.hide(tree);

        let (Some(target), Some(drag_object)) = (current_target, drag_object) else {
            return;
        };

        tracing::debug!(?target, text = drag_object.text(), "drag ended");
        self.emit(
            DragEvent::Ended {
                target,
                drag_object,
            },
            tree,
        );
    }

    /// An OS file drag entered the window: start an empty file payload.
    pub fn file_drag_entered(&mut self, tree: &mut UiTree) {
        if self.drag_object.is_some() {
            tracing::warn!("file drag replaces the active drag");
        }
        self.abandon(tree);

        let mut drag_object = DragObject::new();
        if let Some(label) = &self.config.file_drag_label {
            drag_object.set_text(label.clone());
        }
        self.drag_object = Some(Arc::new(drag_object));
    }

    pub fn file_drag_add_file(&mut self, filename: impl Into<PathBuf>) {
        let Some(drag_object) = self.drag_object.as_mut() else {
            tracing::warn!("file added without an active file drag");
            return;
        };

        Arc::make_mut(drag_object).add_filename(filename);
    }

    pub fn file_drag_conclude(&mut self, tree: &mut UiTree) {
        self.drag_end(tree);
    }

    /// Drop the current drag without a drop. The target it is over gets
    /// an exit.
    pub fn cancel(&mut self, tree: &mut UiTree) {
        if self.drag_object.is_some() {
            tracing::debug!("drag cancelled");
        }
        self.abandon(tree);
    }

    /// Leave the current target, then reset.
    fn abandon(&mut self, tree: &mut UiTree) {
        if let (Some(widget), Some(drag_object)) =
            (self.current_target, self.drag_object.clone())
        {
            self.emit(DragEvent::ExitWidget { widget, drag_object }, tree);
        }
        self.reset(tree);
    }

    fn reset(&mut self, tree: &mut UiTree) {
        self.drag_object = None;
        self.drag_select_object = None;
        self.current_target = None;
        self.indicator.hide(tree);
    }

    fn emit(&mut self, event: DragEvent, tree: &mut UiTree) {
        tracing::trace!(event = event.name(), widget = ?event.widget(), "drag event");

        if let Some(target) = tree
            .get_widget_mut(event.widget())
            .and_then(|w| w.as_drop_target_mut())
        {
            match &event {
                DragEvent::EnterWidget { drag_object, .. } => target.drag_entered(drag_object),
                DragEvent::ExitWidget { drag_object, .. } => target.drag_exited(drag_object),
                DragEvent::Ended { drag_object, .. } => target.drag_dropped(drag_object),
            }
        }

        self.events.publish(&event);
    }
}

impl std::fmt::Debug for DragDrop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragDrop")
            .field("drag_object", &self.drag_object)
            .field("drag_select_object", &self.drag_select_object)
            .field("current_target", &self.current_target)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}
