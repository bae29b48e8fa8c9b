use glam::{Mat4, Vec3};
use std::fmt::Write;

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// World to camera space.
    pub view: Mat4,
    /// Camera to clip space.
    pub projection: Mat4,
    /// One world matrix per drawn object.
    pub objects: Vec<Mat4>,
}

impl Default for RenderFrame {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            objects: Vec::new(),
        }
    }
}

impl RenderFrame {
    pub fn new(view: Mat4, projection: Mat4, objects: Vec<Mat4>) -> Self {
        Self {
            view,
            projection,
            objects,
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Camera position recovered from the view matrix.
    pub fn eye(&self) -> Vec3 {
        self.view.inverse().w_axis.truncate()
    }

    /// Camera look direction recovered from the view matrix.
    pub fn look_direction(&self) -> Vec3 {
        // Third row of a look-at view matrix is -forward.
        -self.view.row(2).truncate()
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, frame: &RenderFrame) -> Self::Output;
}

/// Renders a frame as human-readable text.
///
/// Used by the headless CLI and in tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &RenderFrame) -> String {
        let mut out = String::new();
        let eye = frame.eye();
        let dir = frame.look_direction();

        let _ = writeln!(out, "=== Frame ({} objects) ===", frame.objects.len());
        let _ = writeln!(
            out,
            "Camera: eye=({:.2}, {:.2}, {:.2}) dir=({:.3}, {:.3}, {:.3})",
            eye.x, eye.y, eye.z, dir.x, dir.y, dir.z
        );
        write_matrix(&mut out, "view", &frame.view);
        write_matrix(&mut out, "projection", &frame.projection);

        for (i, m) in frame.objects.iter().enumerate() {
            let p = m.w_axis;
            let _ = writeln!(out, "  [{i}] pos=({:.2}, {:.2}, {:.2})", p.x, p.y, p.z);
        }

        out
    }
}

fn write_matrix(out: &mut String, name: &str, m: &Mat4) {
    let _ = writeln!(out, "{name}:");
    for r in 0..4 {
        let row = m.row(r);
        let _ = writeln!(
            out,
            "  [{:>9.4} {:>9.4} {:>9.4} {:>9.4}]",
            row.x, row.y, row.z, row.w
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn look_frame(eye: Vec3, forward: Vec3) -> RenderFrame {
        RenderFrame::new(
            Mat4::look_at_rh(eye, eye + forward, Vec3::Y),
            Mat4::perspective_rh(60.0_f32.to_radians(), 16.0 / 9.0, 0.1, 100.0),
            Vec::new(),
        )
    }

    #[test]
    fn eye_and_direction_recovered_from_view() {
        let frame = look_frame(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(frame.eye().abs_diff_eq(Vec3::new(1.0, 2.0, 3.0), 1e-5));
        assert!(
            frame
                .look_direction()
                .abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-5)
        );
    }

    #[test]
    fn debug_renderer_empty_frame() {
        let frame = look_frame(Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, 0.0, -1.0));
        let output = DebugTextRenderer::new().render(&frame);

        assert!(output.contains("0 objects"));
        assert!(output.contains("Camera: eye=("));
        assert!(output.contains("3.00) dir=("));
        assert!(output.contains("-1.000)"));
        assert!(output.contains("projection:"));
    }

    #[test]
    fn debug_renderer_with_objects() {
        let mut frame = look_frame(Vec3::ZERO, Vec3::X);
        frame.objects = vec![
            Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0)),
            Mat4::from_translation(Vec3::new(2.0, 5.0, -15.0)),
        ];
        let output = DebugTextRenderer::new().render(&frame);

        assert!(output.contains("2 objects"));
        assert!(output.contains("[1] pos=(2.00, 5.00, -15.00)"));
    }

    #[test]
    fn render_frame_default_is_identity() {
        let frame = RenderFrame::default();
        assert_eq!(frame.view_projection(), Mat4::IDENTITY);
        assert!(frame.objects.is_empty());
    }
}
