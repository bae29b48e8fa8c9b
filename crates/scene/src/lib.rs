//! Demo scene: a fixed set of cubes, each spinning in place.
//!
//! # Invariants
//! - The scene never reads camera state; cube motion depends only on elapsed
//!   wall-clock time.
//! - One world matrix per cube, in placement order.

use flycam_common::SceneSettings;
use glam::{Mat4, Vec3};

/// Where the demo cubes sit in world space.
pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, -3.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

/// Cube placements plus the shared spin rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    cubes: Vec<Vec3>,
    spin_degrees_per_second: f32,
}

impl Default for Scene {
    fn default() -> Self {
        Self::from_settings(&SceneSettings::default())
    }
}

impl Scene {
    pub fn new(cubes: Vec<Vec3>, spin_degrees_per_second: f32) -> Self {
        Self {
            cubes,
            spin_degrees_per_second,
        }
    }

    pub fn from_settings(settings: &SceneSettings) -> Self {
        Self::new(CUBE_POSITIONS.to_vec(), settings.spin_degrees_per_second)
    }

    pub fn cubes(&self) -> &[Vec3] {
        &self.cubes
    }

    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    /// Spin angle in radians after `elapsed` seconds.
    pub fn spin_angle(&self, elapsed: f32) -> f32 {
        (self.spin_degrees_per_second * elapsed).to_radians()
    }

    /// `translate(position) * rotX(a) * rotY(a) * rotZ(a)`.
    pub fn world_matrix(&self, position: Vec3, elapsed: f32) -> Mat4 {
        let a = self.spin_angle(elapsed);
        Mat4::from_translation(position)
            * Mat4::from_rotation_x(a)
            * Mat4::from_rotation_y(a)
            * Mat4::from_rotation_z(a)
    }

    pub fn world_matrices(&self, elapsed: f32) -> Vec<Mat4> {
        self.cubes
            .iter()
            .map(|p| self.world_matrix(*p, elapsed))
            .collect()
    }
}

pub fn crate_info() -> &'static str {
    "flycam-scene v0.1.0"
}
