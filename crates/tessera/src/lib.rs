//! Tessera - editor UI layer
//!
//! Tessera wires engine input into a retained widget tree and provides
//! widget drag and drop on top of it:
//!
//! - **Input**: window/input events, per-frame batches, cursor state and
//!   OS file drags
//! - **UI**: widget tree, hover tracking, drag objects, drop targets and a
//!   floating drag indicator
//!
//! # Quick Start
//!
//! ```ignore
//! use tessera::prelude::*;
//!
//! tessera::init(&Config::default());
//!
//! let mut ui = UiSystem::new()?;
//! let mut input = InputState::new();
//! let mut queue = EventQueue::new();
//!
//! // In the winit handler: queue.push_window_event(event, scale_factor);
//! // Once per frame:
//! let mut batch = queue.drain();
//! ui.dispatch_events(&mut batch, &mut input);
//! // `batch` now holds what drag and drop left for the application
//! ```

// Re-export core types
pub use tessera_core as core;
pub use tessera_core::math;

#[cfg(feature = "input")]
pub use tessera_input as input;

#[cfg(feature = "ui")]
pub use tessera_ui as ui;

/// Apply the runtime configuration (logging, profiling).
pub fn init(config: &tessera_core::config::Config) {
    config.init();
    tracing::debug!(?config, "tessera initialized");
}

pub mod prelude {
    pub use tessera_core::config::{BenchmarkMode, Config};
    pub use tessera_core::event::{EventBus, SubscriptionId};
    pub use tessera_core::math::Vec2;

    #[cfg(feature = "input")]
    pub use tessera_input::{Event, EventBatch, EventQueue, HandleStatus, InputState, MouseButton};

    #[cfg(feature = "ui")]
    pub use tessera_ui::{
        Container, DragDrop, DragDropConfig, DragEvent, DragObject, DropTarget, DropZone,
        LayoutRect, NodeId, Text, UiSystem, UiTree, Visibility, Widget,
    };
}
