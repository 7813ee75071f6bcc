use tessera_core::geometry::{LogicalPosition, LogicalSize, PhysicalPosition};
pub use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent as WinitEvent};
pub use winit::keyboard::*;

use std::collections::VecDeque;
use std::path::PathBuf;

use crate::file_drop::FileDropAdapter;

/// Event queue with batching and deduplication
pub struct EventQueue {
    /// Pending events for this frame
    pending: VecDeque<Event>,

    /// High-priority events (processed first)
    priority: VecDeque<Event>,

    /// Deduplicated events (only last value kept)
    latest_scale_factor: Option<f64>,

    /// OS file drags arrive one file at a time
    file_drop: FileDropAdapter,

    /// Statistics
    stats: EventStats,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(64),
            priority: VecDeque::with_capacity(8),
            latest_scale_factor: None,
            file_drop: FileDropAdapter::new(),
            stats: EventStats::default(),
        }
    }

    /// Push event to queue
    pub fn push(&mut self, event: Event) {
        self.stats.events_received += 1;

        match event {
            // High priority - process immediately. Focus changes stay in
            // arrival order since losing focus releases held buttons.
            Event::CloseRequested | Event::WindowResized(_) => {
                self.priority.push_back(event);
            }

            // Consecutive moves collapse into the last one. Moves never cross
            // a button or file-drag event, so those stay at their position.
            Event::MouseMoved(_) => {
                if matches!(self.pending.back(), Some(Event::MouseMoved(_))) {
                    self.pending.pop_back();
                }
                self.pending.push_back(event);
            }

            // Deduplicate - only keep latest
            Event::ScaleFactorChanged(scale) => {
                self.latest_scale_factor = Some(scale);
            }

            // Normal priority
            _ => {
                self.pending.push_back(event);
            }
        }
    }

    /// Push a raw winit window event (called from the winit handler).
    pub fn push_window_event(&mut self, event: WinitEvent, scale_factor: f64) {
        match event {
            WinitEvent::HoveredFile(_)
            | WinitEvent::DroppedFile(_)
            | WinitEvent::HoveredFileCancelled => {
                for translated in self.file_drop.on_window_event(&event) {
                    self.push(translated);
                }
            }
            other => {
                if let Some(translated) = Event::from_winit(other, scale_factor) {
                    self.push(translated);
                }
            }
        }
    }

    /// Process all events and return batch
    pub fn drain(&mut self) -> EventBatch {
        if let Some(concluded) = self.file_drop.finish_frame() {
            self.push(concluded);
        }

        let mut events = Vec::with_capacity(self.priority.len() + self.pending.len() + 1);

        // Priority events first
        events.extend(self.priority.drain(..));

        // Deduplicated events
        if let Some(scale) = self.latest_scale_factor.take() {
            events.push(Event::ScaleFactorChanged(scale));
        }

        // Regular events, in arrival order
        events.extend(self.pending.drain(..));

        self.stats.events_processed += events.len();
        self.stats.events_dropped = self.stats.events_received - self.stats.events_processed;

        EventBatch { events }
    }

    pub fn stats(&self) -> &EventStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = EventStats::default();
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// The events of one frame, in delivery order.
#[derive(Debug, Clone, Default)]
pub struct EventBatch {
    events: Vec<Event>,
}

impl EventBatch {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Run `handler` over every event, removing the ones it consumes.
    pub fn dispatch<H>(&mut self, mut handler: H)
    where
        H: FnMut(&Event) -> HandleStatus,
    {
        self.events.retain(|event| {
            let status = handler(event);
            !status.is_consumed()
        });
    }
}

impl From<Vec<Event>> for EventBatch {
    fn from(events: Vec<Event>) -> Self {
        Self::new(events)
    }
}

#[derive(Default, Debug, Clone)]
pub struct EventStats {
    pub events_received: usize,
    pub events_processed: usize,
    pub events_dropped: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Window moved to a new physical position.
    WindowMoved(PhysicalPosition<i32>),
    /// Window resized to a new logical size.
    WindowResized(LogicalSize<u32>),
    /// Scale factor changed.
    ScaleFactorChanged(f64),
    /// Window focus changed.
    Focused(bool),
    /// Window close requested.
    CloseRequested,
    /// Mouse button pressed.
    MouseButtonDown(MouseButton),
    /// Mouse button released.
    MouseButtonUp(MouseButton),
    /// Mouse wheel scrolled.
    MouseScrolled(MouseScrollDelta),
    /// Mouse cursor moved (logical coordinates).
    MouseMoved(LogicalPosition<f64>),
    /// Mouse cursor entered the window.
    MouseEntered,
    /// Mouse cursor left the window.
    MouseLeft,
    /// The application showed (`true`) or hid (`false`) the mouse cursor.
    CursorVisibilityChanged(bool),
    /// Keyboard input event.
    KeyInput(KeyEvent),
    /// An OS file drag entered the window.
    FileDragEntered,
    /// A file was added to the current OS file drag.
    FileDragAddFile(PathBuf),
    /// The OS file drag was dropped on the window.
    FileDragConcluded,
    /// The OS file drag left the window without dropping.
    FileDragCancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    pub physical_key: PhysicalKey,
    pub logical_key: Key,
    pub text: Option<SmolStr>,
    pub location: KeyLocation,
    pub state: ElementState,
    pub repeat: bool,
    pub is_synthetic: bool,
}

impl Event {
    /// Convert a winit window event. File drag events are handled by
    /// [`FileDropAdapter`] and yield `None` here.
    pub fn from_winit(event: WinitEvent, scale_factor: f64) -> Option<Self> {
        let event = match event {
            WinitEvent::CloseRequested => Event::CloseRequested,
            WinitEvent::Focused(focused) => Event::Focused(focused),
            WinitEvent::Moved(pos) => Event::WindowMoved(PhysicalPosition::new(pos.x, pos.y)),
            WinitEvent::Resized(size) => Event::WindowResized(LogicalSize::new(
                (size.width as f64 / scale_factor) as u32,
                (size.height as f64 / scale_factor) as u32,
            )),
            WinitEvent::ScaleFactorChanged { scale_factor, .. } => {
                Event::ScaleFactorChanged(scale_factor)
            }
            WinitEvent::CursorMoved { position, .. } => Event::MouseMoved(
                LogicalPosition::from_physical(
                    PhysicalPosition::new(position.x, position.y),
                    scale_factor,
                ),
            ),
            WinitEvent::CursorEntered { .. } => Event::MouseEntered,
            WinitEvent::CursorLeft { .. } => Event::MouseLeft,
            WinitEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => Event::MouseButtonDown(button),
                ElementState::Released => Event::MouseButtonUp(button),
            },
            WinitEvent::MouseWheel { delta, .. } => Event::MouseScrolled(delta),
            WinitEvent::KeyboardInput {
                event,
                is_synthetic,
                ..
            } => Event::KeyInput(KeyEvent {
                physical_key: event.physical_key,
                logical_key: event.logical_key,
                text: event.text,
                location: event.location,
                state: event.state,
                repeat: event.repeat,
                is_synthetic,
            }),
            unknown => {
                tracing::trace!("unhandled window event: {:?}", unknown);
                return None;
            }
        };
        Some(event)
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HandleStatus: u8 {
        const HANDLED = 0b00000001;
        const CONSUMED = 0b00000010;
    }
}

impl HandleStatus {
    pub const fn is_consumed(&self) -> bool {
        self.contains(Self::CONSUMED)
    }

    pub const fn is_handled(&self) -> bool {
        self.contains(Self::HANDLED)
    }

    pub const fn consumed() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits() | Self::CONSUMED.bits())
    }

    pub const fn handled() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits())
    }

    pub const fn ignored() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(x: f64, y: f64) -> Event {
        Event::MouseMoved(LogicalPosition::new(x, y))
    }

    #[test]
    fn test_mouse_moves_are_deduplicated() {
        let mut queue = EventQueue::new();
        queue.push(moved(1.0, 1.0));
        queue.push(moved(5.0, 6.0));
        queue.push(Event::MouseButtonDown(MouseButton::Left));

        let batch = queue.drain();
        let events: Vec<_> = batch.iter().cloned().collect();
        assert_eq!(
            events,
            vec![moved(5.0, 6.0), Event::MouseButtonDown(MouseButton::Left)]
        );
        assert_eq!(queue.stats().events_dropped, 1);
    }

    #[test]
    fn test_moves_keep_position_around_buttons() {
        let mut queue = EventQueue::new();
        queue.push(moved(250.0, 50.0));
        queue.push(Event::MouseButtonUp(MouseButton::Left));
        queue.push(moved(400.0, 300.0));
        queue.push(moved(600.0, 300.0));
        queue.push(Event::FileDragCancelled);
        queue.push(moved(10.0, 10.0));

        let events: Vec<_> = queue.drain().iter().cloned().collect();
        assert_eq!(
            events,
            vec![
                moved(250.0, 50.0),
                Event::MouseButtonUp(MouseButton::Left),
                moved(600.0, 300.0),
                Event::FileDragCancelled,
                moved(10.0, 10.0),
            ]
        );
        assert_eq!(queue.stats().events_dropped, 1);
    }

    #[test]
    fn test_priority_events_first() {
        let mut queue = EventQueue::new();
        queue.push(Event::MouseButtonUp(MouseButton::Left));
        queue.push(Event::CloseRequested);

        let batch = queue.drain();
        assert_eq!(batch.iter().next(), Some(&Event::CloseRequested));
    }

    #[test]
    fn test_dispatch_removes_consumed() {
        let mut batch = EventBatch::from(vec![
            Event::MouseEntered,
            Event::MouseButtonDown(MouseButton::Left),
            Event::MouseLeft,
        ]);

        batch.dispatch(|event| match event {
            Event::MouseButtonDown(_) => HandleStatus::consumed(),
            Event::MouseEntered => HandleStatus::handled(),
            _ => HandleStatus::ignored(),
        });

        assert_eq!(batch.len(), 2);
        assert!(batch.iter().all(|e| !matches!(e, Event::MouseButtonDown(_))));
    }

    #[test]
    fn test_file_drop_concluded_on_drain() {
        let mut queue = EventQueue::new();
        queue.push_window_event(WinitEvent::DroppedFile(PathBuf::from("/tmp/a.png")), 1.0);

        let events: Vec<_> = queue.drain().iter().cloned().collect();
        assert_eq!(
            events,
            vec![
                Event::FileDragEntered,
                Event::FileDragAddFile(PathBuf::from("/tmp/a.png")),
                Event::FileDragConcluded,
            ]
        );

        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_handle_status() {
        assert!(HandleStatus::consumed().is_handled());
        assert!(HandleStatus::consumed().is_consumed());
        assert!(!HandleStatus::handled().is_consumed());
        assert!(!HandleStatus::ignored().is_handled());
    }
}
