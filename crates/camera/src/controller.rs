use crate::movement::apply_movement;
use crate::state::CameraState;
use crate::transforms::{CameraTransforms, Projection, Viewport, build_transforms};
use flycam_common::{CameraSettings, FrameTiming};
use flycam_input::{InputAggregator, InputEvent, InputQueue, KeyBindings, LookDelta};

/// Summary of one [`CameraController::update`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameUpdate {
    /// Events drained from the queue this frame.
    pub events: usize,
    /// Look delta applied this frame.
    pub look: LookDelta,
    pub close_requested: bool,
}

/// Owns the camera, its input bookkeeping and its tuning.
///
/// Window callbacks only call [`push`](Self::push). Once per frame the host
/// calls [`update`](Self::update) and then [`transforms`](Self::transforms).
#[derive(Debug, Clone)]
pub struct CameraController {
    camera: CameraState,
    input: InputAggregator,
    queue: InputQueue,
    projection: Projection,
    base_speed: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(&CameraSettings::default())
    }
}

impl CameraController {
    pub fn new(settings: &CameraSettings) -> Self {
        Self::with_bindings(settings, KeyBindings::default())
    }

    pub fn with_bindings(settings: &CameraSettings, bindings: KeyBindings) -> Self {
        Self {
            camera: CameraState::from_settings(settings),
            input: InputAggregator::with_bindings(bindings, settings.sensitivity),
            queue: InputQueue::new(),
            projection: Projection::from_settings(settings),
            base_speed: settings.base_speed,
        }
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn input(&self) -> &InputAggregator {
        &self.input
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    /// Queue a raw event for the next frame.
    pub fn push(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Advance one frame: drain input, turn, then move.
    pub fn update(&mut self, timing: FrameTiming) -> FrameUpdate {
        let events = self.input.drain(&mut self.queue);

        let look = self.input.take_look_delta();
        if look != LookDelta::ZERO {
            self.camera.rotate(look);
        }

        apply_movement(
            &mut self.camera,
            self.input.move_intent(),
            self.base_speed,
            timing.dt,
        );

        tracing::trace!(
            events,
            dt = timing.dt,
            yaw = self.camera.yaw(),
            pitch = self.camera.pitch(),
            "camera updated"
        );

        FrameUpdate {
            events,
            look,
            close_requested: self.input.close_requested(),
        }
    }

    pub fn transforms(&self, viewport: Viewport) -> CameraTransforms {
        build_transforms(&self.camera, &self.projection, viewport)
    }

    pub fn close_requested(&self) -> bool {
        self.input.close_requested()
    }
}
