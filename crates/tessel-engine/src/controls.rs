//! Key bindings for the interactive control surface.

use indexmap::IndexMap;

use crate::input::Key;

/// What a bound key does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Suspend or resume generation stepping.
    TogglePause,
    /// Shorten the generation timeout.
    SpeedUp,
    /// Lengthen the generation timeout.
    SpeedDown,
    /// Clear the board to state 0.
    Reset,
    /// Write a snapshot to the configured path.
    Save,
    /// Read a snapshot from the configured path.
    Load,
    /// Stop the simulation.
    Quit,
}

/// Ordered map from key to action.
///
/// Defaults: `Space` pause, `x` faster, `z` slower, `r` reset, `s` save,
/// `l` load, `Escape` quit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyBindings {
    map: IndexMap<Key, Action>,
}

impl KeyBindings {
    /// No bindings at all.
    pub fn empty() -> Self {
        Self {
            map: IndexMap::new(),
        }
    }

    /// Bind `key` to `action`, returning the action it replaced.
    ///
    /// Letters are case-insensitive: `'S'` and `'s'` share one binding.
    pub fn bind(&mut self, key: Key, action: Action) -> Option<Action> {
        self.map.insert(key.folded(), action)
    }

    /// Remove the binding for `key`.
    pub fn unbind(&mut self, key: Key) -> Option<Action> {
        self.map.shift_remove(&key.folded())
    }

    /// The action bound to `key`.
    pub fn action_for(&self, key: Key) -> Option<Action> {
        self.map.get(&key.folded()).copied()
    }

    /// Every binding, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, Action)> + '_ {
        self.map.iter().map(|(&k, &a)| (k, a))
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            map: IndexMap::from([
                (Key::Space, Action::TogglePause),
                (Key::Char('x'), Action::SpeedUp),
                (Key::Char('z'), Action::SpeedDown),
                (Key::Char('r'), Action::Reset),
                (Key::Char('s'), Action::Save),
                (Key::Char('l'), Action::Load),
                (Key::Escape, Action::Quit),
            ]),
        }
    }
}
