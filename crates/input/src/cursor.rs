use glam::DVec2;

/// Last observed cursor position.
///
/// Starts `Uninitialized`; the first sample moves it to `Tracking` and it never
/// goes back. Without this the first motion event would be measured against an
/// arbitrary origin and swing the camera.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CursorBaseline {
    #[default]
    Uninitialized,
    Tracking {
        last: DVec2,
    },
}

impl CursorBaseline {
    /// Record `position` as the new baseline and return the pixel offset from
    /// the previous one. Returns `None` for the first sample.
    pub fn observe(&mut self, position: DVec2) -> Option<DVec2> {
        let delta = match *self {
            CursorBaseline::Uninitialized => None,
            CursorBaseline::Tracking { last } => Some(position - last),
        };
        *self = CursorBaseline::Tracking { last: position };
        delta
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self, CursorBaseline::Tracking { .. })
    }
}
