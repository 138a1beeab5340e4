//! Toolkit-neutral gradients, converted into native brushes.
//!
//! A drawing layer creates gradients through [`GradientFactory`], adds color
//! stops to them, and when it is time to paint asks a [`BrushBackend`] to turn
//! each gradient into a native brush. Backends live in their own crates;
//! [`RecordingBackend`] is a data-only backend for tests and headless use.

pub use kurbo;

/// utilities shared by various backends
pub mod util;

mod backend;
mod color;
mod error;
mod factory;
mod gradient;
mod recording;

pub use crate::backend::*;
pub use crate::color::*;
pub use crate::error::*;
pub use crate::factory::*;
pub use crate::gradient::*;
pub use crate::recording::*;
