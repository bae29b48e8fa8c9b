//! Fly camera: turns held keys and cursor motion into a camera pose, and the
//! pose into view and projection matrices.
//!
//! # Invariants
//! - Pitch stays within `[-PITCH_LIMIT, PITCH_LIMIT]`, so the forward vector is
//!   never parallel to world up and the right vector is always defined.
//! - Yaw stays within `[0, 360)`.
//! - Forward is unit length and always matches the current yaw/pitch.
//! - Movement scales with frame time, not frame count.

mod controller;
mod movement;
mod state;
mod transforms;

pub use controller::{CameraController, FrameUpdate};
pub use movement::{apply_movement, displacement};
pub use state::{CameraState, PITCH_LIMIT, WORLD_UP, clamp_pitch, forward_from, wrap_yaw};
pub use transforms::{CameraTransforms, Projection, Viewport, build_transforms, view_matrix};

pub fn crate_info() -> &'static str {
    "flycam-camera v0.1.0"
}
