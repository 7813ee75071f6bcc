//! Vector math using SIMD-accelerated `glam` types.
//!
//! ```
//! use tessera_core::math::Vec2;
//!
//! let cursor = Vec2::new(120.0, 48.0);
//! let label = cursor + Vec2::new(0.0, -20.0);
//! assert_eq!(label.y, 28.0);
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::*;
