use std::any::Any;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The payload of a drag: display text, optional icon, dragged files and an
/// arbitrary application value.
#[derive(Clone, Default)]
pub struct DragObject {
    text: String,
    icon: Option<String>,
    filenames: Vec<PathBuf>,
    payload: Option<Arc<dyn Any + Send + Sync>>,
}

impl DragObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.add_filename(filename);
        self
    }

    /// Attach an application value, retrieved with [`DragObject::payload`].
    pub fn with_payload<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.payload = Some(Arc::new(value));
        self
    }

    /// Text shown by the drag indicator.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn filenames(&self) -> &[PathBuf] {
        &self.filenames
    }

    pub fn add_filename(&mut self, filename: impl Into<PathBuf>) {
        self.filenames.push(filename.into());
    }

    pub fn contains_file(&self, filename: &Path) -> bool {
        self.filenames.iter().any(|f| f == filename)
    }

    pub fn has_files(&self) -> bool {
        !self.filenames.is_empty()
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn has_payload(&self) -> bool {
        self.payload.is_some()
    }

    /// The attached application value, if it is a `T`.
    pub fn payload<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.payload.as_deref()?.downcast_ref::<T>()
    }
}

impl fmt::Debug for DragObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragObject")
            .field("text", &self.text)
            .field("icon", &self.icon)
            .field("filenames", &self.filenames)
            .field("payload", &self.payload.is_some())
            .finish()
    }
}
