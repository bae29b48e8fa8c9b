//! wgpu render backend for the fly camera demo.
//!
//! Draws every object in a [`flycam_render::RenderFrame`] as an instanced,
//! textured unit cube.
//!
//! # Invariants
//! - Renderer never mutates camera or scene state.
//! - View and projection are uploaded unchanged; the vertex shader composes
//!   `projection * view * world`.

mod gpu;
mod mesh;
mod shaders;
mod texture;

pub use gpu::WgpuRenderer;
pub use mesh::{CUBE_VERTEX_COUNT, TexturedVertex, cube_vertices};
pub use texture::{GpuTexture, TextureImage};

use std::path::PathBuf;

/// Errors from setting up the GPU renderer.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to load texture {path}: {source}")]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
