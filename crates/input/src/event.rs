use crate::action::{Key, KeyAction};
use std::collections::VecDeque;

/// A raw input event as delivered by the window system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key { key: Key, action: KeyAction },
    /// Absolute cursor position in device pixels.
    CursorMoved { x: f64, y: f64 },
}

impl InputEvent {
    pub fn press(key: Key) -> Self {
        Self::Key {
            key,
            action: KeyAction::Press,
        }
    }

    pub fn release(key: Key) -> Self {
        Self::Key {
            key,
            action: KeyAction::Release,
        }
    }

    pub fn cursor(x: f64, y: f64) -> Self {
        Self::CursorMoved { x, y }
    }
}

/// FIFO of events collected between frames.
///
/// Window callbacks push; the frame update drains everything at once.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Remove and yield all pending events in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_order_and_empties_queue() {
        let mut q = InputQueue::new();
        q.push(InputEvent::press(Key::W));
        q.push(InputEvent::cursor(1.0, 2.0));
        q.push(InputEvent::release(Key::W));
        assert_eq!(q.len(), 3);

        let drained: Vec<_> = q.drain().collect();
        assert_eq!(
            drained,
            vec![
                InputEvent::press(Key::W),
                InputEvent::cursor(1.0, 2.0),
                InputEvent::release(Key::W),
            ]
        );
        assert!(q.is_empty());
    }
}
