//! Platform-agnostic input events.
//!
//! The engine consumes these instead of raw window events so the core
//! library stays windowing-free; the viewer (behind the `viewer` feature)
//! converts winit events into this vocabulary.

/// Input event and key types.
pub mod event;

pub use event::{InputEvent, Key};
