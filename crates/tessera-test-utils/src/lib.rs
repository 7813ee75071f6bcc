//! Test utilities for the Tessera editor UI.
//!
//! - [`EventScript`] builds ordered input batches, one per frame
//! - [`Recorder`] captures everything published on an event bus
//!
//! # Example
//!
//! ```rust
//! use tessera_core::event::EventBus;
//! use tessera_test_utils::{EventScript, Recorder};
//! use tessera_input::MouseButton;
//!
//! let frames = EventScript::new()
//!     .move_to(10.0, 10.0)
//!     .press(MouseButton::Left)
//!     .frame()
//!     .move_to(50.0, 10.0)
//!     .release(MouseButton::Left)
//!     .into_batches();
//! assert_eq!(frames.len(), 2);
//!
//! let recorder = Recorder::<u32>::new();
//! let mut bus = EventBus::new();
//! recorder.attach(&mut bus);
//! bus.publish(&5);
//! assert_eq!(recorder.events(), vec![5]);
//! ```

mod recorder;
mod script;

pub use recorder::Recorder;
pub use script::EventScript;
