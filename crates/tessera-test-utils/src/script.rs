use std::path::PathBuf;
use tessera_core::geometry::LogicalPosition;
use tessera_input::{Event, EventBatch, EventQueue, MouseButton};

/// Builder for scripted input, split into frames.
///
/// [`into_batches`](Self::into_batches) keeps events exactly as added.
/// [`into_queued_batches`](Self::into_queued_batches) sends each frame
/// through an [`EventQueue`] first, as a window loop would.
#[derive(Debug, Clone, Default)]
pub struct EventScript {
    frames: Vec<Vec<Event>>,
    current: Vec<Event>,
}

impl EventScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event(mut self, event: Event) -> Self {
        self.current.push(event);
        self
    }

    pub fn move_to(self, x: f64, y: f64) -> Self {
        self.event(Event::MouseMoved(LogicalPosition::new(x, y)))
    }

    pub fn press(self, button: MouseButton) -> Self {
        self.event(Event::MouseButtonDown(button))
    }

    pub fn release(self, button: MouseButton) -> Self {
        self.event(Event::MouseButtonUp(button))
    }

    /// Press and release the left button at the current position.
    pub fn click(self) -> Self {
        self.press(MouseButton::Left).release(MouseButton::Left)
    }

    pub fn hide_cursor(self) -> Self {
        self.event(Event::CursorVisibilityChanged(false))
    }

    pub fn show_cursor(self) -> Self {
        self.event(Event::CursorVisibilityChanged(true))
    }

    /// An OS file drag entering with `files`, without concluding it.
    pub fn file_drag<I, P>(self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        files
            .into_iter()
            .fold(self.event(Event::FileDragEntered), |script, file| {
                script.event(Event::FileDragAddFile(file.into()))
            })
    }

    pub fn file_drop(self) -> Self {
        self.event(Event::FileDragConcluded)
    }

    /// Close the current frame.
    pub fn frame(mut self) -> Self {
        let events = std::mem::take(&mut self.current);
        self.frames.push(events);
        self
    }

    /// One batch per frame. A non-empty trailing frame is closed implicitly.
    pub fn into_batches(mut self) -> Vec<EventBatch> {
        if !self.current.is_empty() {
            self = self.frame();
        }
        self.frames.into_iter().map(EventBatch::from).collect()
    }

    /// One batch per frame, each pushed through `queue` and drained.
    pub fn into_queued_batches(self, queue: &mut EventQueue) -> Vec<EventBatch> {
        self.into_batches()
            .into_iter()
            .map(|frame| {
                for event in frame.iter() {
                    queue.push(event.clone());
                }
                queue.drain()
            })
            .collect()
    }

    /// Every event in a single batch.
    pub fn into_batch(self) -> EventBatch {
        let mut events: Vec<Event> = self.frames.into_iter().flatten().collect();
        events.extend(self.current);
        EventBatch::from(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_split() {
        let batches = EventScript::new()
            .move_to(1.0, 1.0)
            .frame()
            .click()
            .into_batches();

        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].len(), 1);
        assert_eq!(batches[1].len(), 2);
    }

    #[test]
    fn test_queued_frames_merge_adjacent_moves() {
        let mut queue = EventQueue::new();
        let batches = EventScript::new()
            .move_to(1.0, 1.0)
            .move_to(2.0, 2.0)
            .click()
            .frame()
            .move_to(3.0, 3.0)
            .into_queued_batches(&mut queue);

        assert_eq!(batches.len(), 2);
        let first: Vec<_> = batches[0].iter().cloned().collect();
        assert_eq!(
            first,
            vec![
                Event::MouseMoved(LogicalPosition::new(2.0, 2.0)),
                Event::MouseButtonDown(MouseButton::Left),
                Event::MouseButtonUp(MouseButton::Left),
            ]
        );
        assert_eq!(batches[1].len(), 1);
    }

    #[test]
    fn test_file_drag_events() {
        let batch = EventScript::new()
            .file_drag(["/a.png", "/b.png"])
            .file_drop()
            .into_batch();

        let events: Vec<_> = batch.iter().cloned().collect();
        assert_eq!(
            events,
            vec![
                Event::FileDragEntered,
                Event::FileDragAddFile(PathBuf::from("/a.png")),
                Event::FileDragAddFile(PathBuf::from("/b.png")),
                Event::FileDragConcluded,
            ]
        );
    }
}
