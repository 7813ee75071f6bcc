//! Tessera input handling.
//!
//! - [`event`]: the engine's window/input event model and per-frame batching
//! - [`state`]: polled input state (cursor, held buttons, cursor visibility)
//! - [`file_drop`]: turns OS file drags into engine file-drag events

pub mod event;
pub mod file_drop;
pub mod state;

pub use event::{Event, EventBatch, EventQueue, HandleStatus, MouseButton};
pub use file_drop::FileDropAdapter;
pub use state::InputState;
