use crate::state::CameraState;
use flycam_common::CameraSettings;
use glam::{Mat4, Vec3};

/// Perspective frustum parameters. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self {
            fov_degrees: settings.fov_degrees,
            near: settings.near,
            far: settings.far,
        }
    }

    /// Right-handed perspective with depth mapped to `[0, 1]`.
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), aspect, self.near, self.far)
    }
}

/// Drawable area in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height. A zero height (minimized window) is treated as 1.
    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}

/// View and projection for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransforms {
    pub view: Mat4,
    pub projection: Mat4,
}

impl CameraTransforms {
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// Look-at from `position` toward `position + forward`.
pub fn view_matrix(position: Vec3, forward: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at_rh(position, position + forward, up)
}

pub fn build_transforms(
    camera: &CameraState,
    projection: &Projection,
    viewport: Viewport,
) -> CameraTransforms {
    CameraTransforms {
        view: view_matrix(camera.position, camera.forward(), camera.up()),
        projection: projection.matrix(viewport.aspect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn builder_is_idempotent() {
        let cam = CameraState::new(Vec3::new(1.0, -2.0, 4.0), 12.0, -30.0);
        let proj = Projection::default();
        let vp = Viewport::new(1280, 720);
        assert_eq!(
            build_transforms(&cam, &proj, vp),
            build_transforms(&cam, &proj, vp)
        );
    }

    #[test]
    fn view_maps_eye_to_origin_and_target_onto_negative_z() {
        let cam = CameraState::default();
        let t = build_transforms(&cam, &Projection::default(), Viewport::new(1280, 720));

        let eye = t.view.transform_point3(cam.position);
        assert!(eye.abs_diff_eq(Vec3::ZERO, 1e-5));

        let ahead = t.view.transform_point3(cam.position + cam.forward() * 2.0);
        assert!(ahead.abs_diff_eq(Vec3::new(0.0, 0.0, -2.0), 1e-5));
    }

    #[test]
    fn projection_maps_near_and_far_planes_to_depth_range() {
        let p = Projection::default();
        let m = p.matrix(16.0 / 9.0);

        let near = m * Vec4::new(0.0, 0.0, -p.near, 1.0);
        let far = m * Vec4::new(0.0, 0.0, -p.far, 1.0);
        assert!((near.z / near.w).abs() < 1e-5);
        assert!((far.z / far.w - 1.0).abs() < 1e-5);
    }

    #[test]
    fn projection_uses_fov_and_aspect() {
        let p = Projection::default();
        let m = p.matrix(2.0);
        let f = 1.0 / (30.0_f32.to_radians()).tan();
        assert!((m.y_axis.y - f).abs() < 1e-5);
        assert!((m.x_axis.x - f / 2.0).abs() < 1e-5);
    }

    #[test]
    fn aspect_handles_zero_height() {
        assert_eq!(Viewport::new(1280, 720).aspect(), 1280.0 / 720.0);
        assert_eq!(Viewport::new(800, 0).aspect(), 800.0);
    }

    #[test]
    fn view_projection_is_product() {
        let t = build_transforms(
            &CameraState::default(),
            &Projection::default(),
            Viewport::new(4, 3),
        );
        assert_eq!(t.view_projection(), t.projection * t.view);
    }

    #[test]
    fn projection_from_settings() {
        let s = CameraSettings {
            fov_degrees: 90.0,
            near: 0.5,
            far: 50.0,
            ..CameraSettings::default()
        };
        let p = Projection::from_settings(&s);
        assert_eq!(
            p,
            Projection {
                fov_degrees: 90.0,
                near: 0.5,
                far: 50.0
            }
        );
    }
}
