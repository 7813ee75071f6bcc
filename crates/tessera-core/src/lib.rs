//! Tessera Core
//!
//! This crate contains the shared building blocks for the Tessera editor UI:
//! collections, math, geometry, logging, profiling, configuration and the
//! engine event bus.

pub mod alloc;
pub mod config;
pub mod event;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
