use std::collections::BTreeMap;

/// Keys the camera understands. Window adapters map their own key codes onto
/// these and drop everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    W,
    A,
    S,
    D,
    Escape,
}

/// What happened to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Release,
    /// Auto-repeat while held. Treated like a press.
    Repeat,
}

/// Camera-relative movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MoveKey {
    Forward,
    Backward,
    Left,
    Right,
}

/// A high-level action a key is bound to.
///
/// The camera consumes actions, never raw keys, so rebinding does not touch
/// camera logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move while the key is held.
    Move(MoveKey),
    /// Ask the host to close the window.
    Exit,
}

/// Mapping from keys to actions.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    bindings: BTreeMap<Key, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = BTreeMap::new();
        bindings.insert(Key::W, Action::Move(MoveKey::Forward));
        bindings.insert(Key::S, Action::Move(MoveKey::Backward));
        bindings.insert(Key::A, Action::Move(MoveKey::Left));
        bindings.insert(Key::D, Action::Move(MoveKey::Right));
        bindings.insert(Key::Escape, Action::Exit);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Bindings with nothing bound.
    pub fn empty() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    /// Bind `key` to `action`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: Key, action: Action) {
        self.bindings.insert(key, action);
    }

    pub fn action_for(&self, key: Key) -> Option<Action> {
        self.bindings.get(&key).copied()
    }
}

/// Which movement directions are active this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    pub fn none() -> Self {
        Self::default()
    }

    /// Builder-style: mark `key` active.
    pub fn with(mut self, key: MoveKey) -> Self {
        self.set(key, true);
        self
    }

    pub fn set(&mut self, key: MoveKey, held: bool) {
        match key {
            MoveKey::Forward => self.forward = held,
            MoveKey::Backward => self.backward = held,
            MoveKey::Left => self.left = held,
            MoveKey::Right => self.right = held,
        }
    }

    pub fn is_held(&self, key: MoveKey) -> bool {
        match key {
            MoveKey::Forward => self.forward,
            MoveKey::Backward => self.backward,
            MoveKey::Left => self.left,
            MoveKey::Right => self.right,
        }
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_are_wasd_and_escape() {
        let b = KeyBindings::default();
        assert_eq!(b.action_for(Key::W), Some(Action::Move(MoveKey::Forward)));
        assert_eq!(b.action_for(Key::S), Some(Action::Move(MoveKey::Backward)));
        assert_eq!(b.action_for(Key::A), Some(Action::Move(MoveKey::Left)));
        assert_eq!(b.action_for(Key::D), Some(Action::Move(MoveKey::Right)));
        assert_eq!(b.action_for(Key::Escape), Some(Action::Exit));
    }

    #[test]
    fn rebinding_replaces_previous_action() {
        let mut b = KeyBindings::empty();
        assert_eq!(b.action_for(Key::W), None);
        b.bind(Key::W, Action::Move(MoveKey::Backward));
        b.bind(Key::W, Action::Exit);
        assert_eq!(b.action_for(Key::W), Some(Action::Exit));
    }

    #[test]
    fn move_intent_builder() {
        let i = MoveIntent::none()
            .with(MoveKey::Forward)
            .with(MoveKey::Left);
        assert!(i.is_held(MoveKey::Forward));
        assert!(i.is_held(MoveKey::Left));
        assert!(!i.is_held(MoveKey::Backward));
        assert!(!i.is_held(MoveKey::Right));
        assert!(!i.is_idle());
        assert!(MoveIntent::none().is_idle());
    }
}
