//! OS file drag translation.
//!
//! winit reports a file drag one file at a time:
//!
//! 1. `HoveredFile(path)` for every file while the drag is over the window
//! 2. `DroppedFile(path)` for every file when the user releases
//! 3. `HoveredFileCancelled` if the drag leaves without dropping
//!
//! The engine consumes a session shaped drag instead: one
//! [`Event::FileDragEntered`], one [`Event::FileDragAddFile`] per file, then
//! [`Event::FileDragConcluded`] or [`Event::FileDragCancelled`].
//! [`FileDropAdapter`] performs that translation.

use std::path::{Path, PathBuf};

use crate::event::{Event, WinitEvent};

#[derive(Debug, Default)]
pub struct FileDropAdapter {
    /// Files announced to the engine for the current drag.
    files: Vec<PathBuf>,
    /// A drag session is open.
    active: bool,
    /// At least one file was dropped this frame.
    dropped: bool,
}

impl FileDropAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while an OS file drag is over the window.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Files announced for the current drag.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Translate a winit event. Non file-drag events yield nothing.
    pub fn on_window_event(&mut self, event: &WinitEvent) -> Vec<Event> {
        match event {
            WinitEvent::HoveredFile(path) => self.announce(path),
            WinitEvent::DroppedFile(path) => {
                let events = self.announce(path);
                self.dropped = true;
                events
            }
            WinitEvent::HoveredFileCancelled => self.cancel().into_iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Close a drag that was dropped during this frame.
    ///
    /// Call once per frame after all window events were pushed.
    pub fn finish_frame(&mut self) -> Option<Event> {
        if !self.dropped {
            return None;
        }

        tracing::debug!(files = self.files.len(), "file drag concluded");
        self.reset();
        Some(Event::FileDragConcluded)
    }

    fn announce(&mut self, path: &Path) -> Vec<Event> {
        let mut events = Vec::with_capacity(2);

        if !self.active {
            tracing::debug!("file drag entered");
            self.active = true;
            events.push(Event::FileDragEntered);
        }

        // Hovered files are reported again on drop
        if !self.files.iter().any(|file| file == path) {
            self.files.push(path.to_path_buf());
            events.push(Event::FileDragAddFile(path.to_path_buf()));
        }

        events
    }

    fn cancel(&mut self) -> Option<Event> {
        if !self.active {
            return None;
        }

        tracing::debug!("file drag cancelled");
        self.reset();
        Some(Event::FileDragCancelled)
    }

    fn reset(&mut self) {
        self.files.clear();
        self.active = false;
        self.dropped = false;
    }
}
