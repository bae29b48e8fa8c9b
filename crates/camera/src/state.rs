use flycam_common::CameraSettings;
use flycam_input::LookDelta;
use glam::Vec3;

/// Fixed world up axis.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Maximum absolute pitch in degrees.
pub const PITCH_LIMIT: f32 = 89.0;

/// Wrap an angle in degrees into `[0, 360)`.
pub fn wrap_yaw(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

pub fn clamp_pitch(degrees: f32) -> f32 {
    degrees.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

/// Unit look direction for a yaw/pitch pair in degrees.
///
/// Yaw is measured from +X toward +Z, so a yaw of -90 (or 270) looks down -Z.
pub fn forward_from(yaw: f32, pitch: f32) -> Vec3 {
    let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
    Vec3::new(
        pitch.cos() * yaw.cos(),
        pitch.sin(),
        pitch.cos() * yaw.sin(),
    )
    .normalize()
}

/// Camera pose. Position is free to change; yaw, pitch and forward only move
/// together through [`CameraState::rotate`] or [`CameraState::set_orientation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    forward: Vec3,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0), -90.0, 0.0)
    }
}

impl CameraState {
    /// Angles are in degrees and are wrapped/clamped on the way in.
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut state = Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            forward: Vec3::X,
        };
        state.set_orientation(yaw, pitch);
        state
    }

    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self::new(
            settings.start_position,
            settings.start_yaw,
            settings.start_pitch,
        )
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn up(&self) -> Vec3 {
        WORLD_UP
    }

    /// Strafe axis, recomputed from the current forward every call.
    pub fn right(&self) -> Vec3 {
        self.forward.cross(WORLD_UP).normalize()
    }

    /// Point the camera at an absolute yaw/pitch.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = wrap_yaw(yaw);
        self.pitch = clamp_pitch(pitch);
        self.forward = forward_from(self.yaw, self.pitch);
    }

    /// Apply a frame's accumulated look delta.
    pub fn rotate(&mut self, delta: LookDelta) {
        self.set_orientation(self.yaw + delta.yaw, self.pitch + delta.pitch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn default_looks_down_negative_z() {
        let cam = CameraState::default();
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 3.0));
        assert!(cam.forward().abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), EPS));
        assert_eq!(cam.pitch(), 0.0);
        assert_eq!(cam.yaw(), 270.0);
    }

    #[test]
    fn forward_at_reference_orientation() {
        let f = forward_from(-90.0, 0.0);
        assert!(f.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), EPS));
    }

    #[test]
    fn pitch_is_clamped_for_any_sequence() {
        let mut cam = CameraState::default();
        let deltas = [50.0, 50.0, 50.0, -500.0, 30.0, -1.0, 1e6, -1e6, 88.9, 0.2];
        for d in deltas {
            cam.rotate(LookDelta::new(0.0, d));
            assert!(cam.pitch() >= -PITCH_LIMIT && cam.pitch() <= PITCH_LIMIT);
        }
        cam.rotate(LookDelta::new(0.0, 1000.0));
        assert_eq!(cam.pitch(), PITCH_LIMIT);
        cam.rotate(LookDelta::new(0.0, -1000.0));
        assert_eq!(cam.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn yaw_wraps_into_range() {
        let mut cam = CameraState::default();
        let mut unwrapped = -90.0_f32;
        for d in [100.0, 400.0, -1000.0, 359.9, -0.1, 720.0, -45.5] {
            cam.rotate(LookDelta::new(d, 0.0));
            unwrapped += d;
            assert!((0.0..360.0).contains(&cam.yaw()), "yaw {}", cam.yaw());
            let expected = forward_from(unwrapped, 0.0);
            assert!(cam.forward().abs_diff_eq(expected, 1e-3));
        }
    }

    #[test]
    fn wrap_yaw_edges() {
        assert_eq!(wrap_yaw(0.0), 0.0);
        assert_eq!(wrap_yaw(360.0), 0.0);
        assert_eq!(wrap_yaw(-90.0), 270.0);
        assert_eq!(wrap_yaw(725.0), 5.0);
        assert!(wrap_yaw(-1e-9) < 360.0);
    }

    #[test]
    fn forward_is_unit_for_all_orientations() {
        let mut yaw = -720.0;
        while yaw <= 720.0 {
            let mut pitch = -PITCH_LIMIT;
            while pitch <= PITCH_LIMIT {
                let f = forward_from(yaw, pitch);
                assert!((f.length() - 1.0).abs() < EPS, "yaw={yaw} pitch={pitch}");
                pitch += 7.5;
            }
            yaw += 13.0;
        }
    }

    #[test]
    fn right_is_perpendicular_and_horizontal() {
        let mut cam = CameraState::default();
        cam.set_orientation(33.0, 60.0);
        let r = cam.right();
        assert!((r.length() - 1.0).abs() < EPS);
        assert!(r.dot(cam.forward()).abs() < EPS);
        assert!(r.y.abs() < EPS);
    }

    #[test]
    fn right_defined_at_pitch_limit() {
        let mut cam = CameraState::default();
        cam.rotate(LookDelta::new(0.0, 500.0));
        assert!(cam.right().is_finite());
        assert!((cam.right().length() - 1.0).abs() < EPS);
    }

    #[test]
    fn up_is_fixed() {
        let mut cam = CameraState::default();
        cam.rotate(LookDelta::new(45.0, 45.0));
        assert_eq!(cam.up(), Vec3::Y);
    }

    #[test]
    fn from_settings_uses_start_pose() {
        let settings = CameraSettings {
            start_position: Vec3::new(1.0, 2.0, 3.0),
            start_yaw: 0.0,
            start_pitch: 120.0,
            ..CameraSettings::default()
        };
        let cam = CameraState::from_settings(&settings);
        assert_eq!(cam.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(cam.yaw(), 0.0);
        assert_eq!(cam.pitch(), PITCH_LIMIT);
    }
}
