//! Rendering Adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers only read the frame they are given; nothing flows back into
//!   the camera.
//! - All matrices are column-major `glam::Mat4`.

mod renderer;

pub use renderer::{DebugTextRenderer, RenderFrame, Renderer};

pub fn crate_info() -> &'static str {
    "flycam-render v0.1.0"
}
