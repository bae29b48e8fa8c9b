use crate::action::{Action, Key, KeyAction, KeyBindings, MoveIntent, MoveKey};
use crate::cursor::CursorBaseline;
use crate::event::{InputEvent, InputQueue};
use glam::DVec2;
use std::collections::HashSet;

/// Yaw/pitch change in degrees accumulated from cursor motion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LookDelta {
    pub yaw: f32,
    pub pitch: f32,
}

impl LookDelta {
    pub const ZERO: Self = Self {
        yaw: 0.0,
        pitch: 0.0,
    };

    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }
}

impl std::ops::AddAssign for LookDelta {
    fn add_assign(&mut self, rhs: Self) {
        self.yaw += rhs.yaw;
        self.pitch += rhs.pitch;
    }
}

/// Live input bookkeeping between frames.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    baseline: CursorBaseline,
    look: LookDelta,
    close_requested: bool,
}

impl InputState {
    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn held_keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.held.iter().copied()
    }

    pub fn baseline(&self) -> CursorBaseline {
        self.baseline
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }
}

/// Folds raw events into [`InputState`].
#[derive(Debug, Clone)]
pub struct InputAggregator {
    state: InputState,
    bindings: KeyBindings,
    sensitivity: f32,
}

impl Default for InputAggregator {
    fn default() -> Self {
        Self::new(crate::DEFAULT_SENSITIVITY)
    }
}

impl InputAggregator {
    pub fn new(sensitivity: f32) -> Self {
        Self::with_bindings(KeyBindings::default(), sensitivity)
    }

    pub fn with_bindings(bindings: KeyBindings, sensitivity: f32) -> Self {
        Self {
            state: InputState::default(),
            bindings,
            sensitivity,
        }
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn on_key(&mut self, key: Key, action: KeyAction) {
        match action {
            KeyAction::Press | KeyAction::Repeat => {
                self.state.held.insert(key);
            }
            KeyAction::Release => {
                self.state.held.remove(&key);
            }
        }

        if action == KeyAction::Press && self.bindings.action_for(key) == Some(Action::Exit) {
            tracing::debug!("exit key pressed, requesting close");
            self.state.close_requested = true;
        }
    }

    /// Feed an absolute cursor position. Returns the look delta this sample
    /// contributed, or `None` if it only established the baseline.
    pub fn on_cursor_move(&mut self, x: f64, y: f64) -> Option<LookDelta> {
        let Some(offset) = self.state.baseline.observe(DVec2::new(x, y)) else {
            tracing::debug!("cursor baseline set at ({x:.1}, {y:.1})");
            return None;
        };

        // Screen y grows downward, pitch grows upward.
        let sensitivity = f64::from(self.sensitivity);
        let delta = LookDelta {
            yaw: (sensitivity * offset.x) as f32,
            pitch: (sensitivity * -offset.y) as f32,
        };
        self.state.look += delta;
        Some(delta)
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key { key, action } => self.on_key(key, action),
            InputEvent::CursorMoved { x, y } => {
                self.on_cursor_move(x, y);
            }
        }
    }

    /// Apply every queued event in order. Returns how many were applied.
    pub fn drain(&mut self, queue: &mut InputQueue) -> usize {
        let mut count = 0;
        for event in queue.drain() {
            self.apply(event);
            count += 1;
        }
        count
    }

    /// Hand the accumulated look delta to the caller and reset it.
    pub fn take_look_delta(&mut self) -> LookDelta {
        std::mem::take(&mut self.state.look)
    }

    /// Movement directions whose bound keys are currently held.
    pub fn move_intent(&self) -> MoveIntent {
        let mut intent = MoveIntent::none();
        for key in self.state.held_keys() {
            if let Some(Action::Move(dir)) = self.bindings.action_for(key) {
                intent.set(dir, true);
            }
        }
        intent
    }

    pub fn is_moving(&self, dir: MoveKey) -> bool {
        self.move_intent().is_held(dir)
    }

    pub fn close_requested(&self) -> bool {
        self.state.close_requested
    }
}
