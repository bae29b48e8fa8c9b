//! Shared configuration and frame timing.
//!
//! # Invariants
//! - A config that passed `validate` always yields a finite, non-degenerate
//!   projection and a positive look sensitivity.
//! - Frame timing never goes backwards.

pub mod config;
pub mod timing;

pub use config::{
    CameraSettings, ConfigError, FlycamConfig, RenderSettings, SceneSettings, WindowSettings,
};
pub use timing::{FrameTimer, FrameTiming};

pub fn crate_info() -> &'static str {
    "flycam-common v0.1.0"
}
