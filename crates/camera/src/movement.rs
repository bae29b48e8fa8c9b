use crate::state::CameraState;
use flycam_input::MoveIntent;
use glam::Vec3;

/// Offset produced by `intent` for one frame at `speed` world units.
///
/// Every active direction contributes independently. Forward/backward follow
/// the full look direction, pitch included, so looking up while moving
/// forward climbs. The strafe axis is `normalize(cross(forward, up))`.
pub fn displacement(forward: Vec3, up: Vec3, intent: MoveIntent, speed: f32) -> Vec3 {
    let mut offset = Vec3::ZERO;

    if intent.forward {
        offset += forward * speed;
    }
    if intent.backward {
        offset -= forward * speed;
    }
    if intent.left || intent.right {
        let right = forward.cross(up).normalize();
        if intent.left {
            offset -= right * speed;
        }
        if intent.right {
            offset += right * speed;
        }
    }

    offset
}

/// Move the camera for a frame lasting `dt` seconds.
pub fn apply_movement(camera: &mut CameraState, intent: MoveIntent, base_speed: f32, dt: f32) {
    if intent.is_idle() {
        return;
    }
    let speed = base_speed * dt;
    camera.position += displacement(camera.forward(), camera.up(), intent, speed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use flycam_input::MoveKey;

    const FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);
    const UP: Vec3 = Vec3::Y;

    #[test]
    fn forward_only_moves_exactly_base_speed_times_dt() {
        let intent = MoveIntent::none().with(MoveKey::Forward);
        let d = displacement(FORWARD, UP, intent, 5.0 * 1.0);
        assert_eq!(d, Vec3::new(0.0, 0.0, -5.0));
    }

    #[test]
    fn forward_and_left_are_additive() {
        let intent = MoveIntent::none()
            .with(MoveKey::Forward)
            .with(MoveKey::Left);
        let d = displacement(FORWARD, UP, intent, 5.0);
        assert_eq!(d, Vec3::new(-5.0, 0.0, -5.0));
    }

    #[test]
    fn opposite_keys_cancel() {
        let intent = MoveIntent::none()
            .with(MoveKey::Forward)
            .with(MoveKey::Backward)
            .with(MoveKey::Left)
            .with(MoveKey::Right);
        assert_eq!(displacement(FORWARD, UP, intent, 5.0), Vec3::ZERO);
    }

    #[test]
    fn right_strafes_along_positive_x_when_facing_negative_z() {
        let intent = MoveIntent::none().with(MoveKey::Right);
        assert_eq!(
            displacement(FORWARD, UP, intent, 2.0),
            Vec3::new(2.0, 0.0, 0.0)
        );
    }

    #[test]
    fn speed_scales_with_frame_time() {
        let mut a = CameraState::default();
        let mut b = CameraState::default();
        let intent = MoveIntent::none().with(MoveKey::Backward);

        apply_movement(&mut a, intent, 5.0, 0.5);
        for _ in 0..5 {
            apply_movement(&mut b, intent, 5.0, 0.1);
        }
        assert!(a.position.abs_diff_eq(b.position, 1e-5));
        assert!((a.position.z - 5.5).abs() < 1e-5);
    }

    #[test]
    fn pitched_forward_changes_height() {
        let mut cam = CameraState::new(Vec3::ZERO, -90.0, 45.0);
        apply_movement(&mut cam, MoveIntent::none().with(MoveKey::Forward), 5.0, 1.0);
        assert!(cam.position.y > 3.0);
        assert!((cam.position.length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn strafing_never_changes_height() {
        let mut cam = CameraState::new(Vec3::ZERO, 10.0, 60.0);
        apply_movement(&mut cam, MoveIntent::none().with(MoveKey::Left), 5.0, 1.0);
        assert!(cam.position.y.abs() < 1e-6);
    }

    #[test]
    fn idle_does_not_move() {
        let mut cam = CameraState::default();
        let before = cam.position;
        apply_movement(&mut cam, MoveIntent::none(), 5.0, 1.0);
        assert_eq!(cam.position, before);
    }
}
