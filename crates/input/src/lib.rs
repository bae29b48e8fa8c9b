//! Input aggregation: raw key and cursor events folded into a held-key set and
//! an accumulated look delta, read once per frame by the camera.
//!
//! # Invariants
//! - Event handlers only do bookkeeping; no camera math happens here.
//! - The first cursor sample establishes a baseline and never produces a delta.
//! - The crate knows nothing about the windowing system; adapters translate
//!   their key codes into [`Key`].

pub mod action;
pub mod aggregator;
pub mod cursor;
pub mod event;

pub use action::{Action, Key, KeyAction, KeyBindings, MoveIntent, MoveKey};
pub use aggregator::{InputAggregator, InputState, LookDelta};
pub use cursor::CursorBaseline;
pub use event::{InputEvent, InputQueue};

/// Degrees of rotation per pixel of cursor travel.
pub const DEFAULT_SENSITIVITY: f32 = 0.05;

pub fn crate_info() -> &'static str {
    "flycam-input v0.1.0"
}
