//! Discrete input events and the queue that carries them.
//!
//! Hosts translate raw window events into [`InputEvent`]s and push them
//! through an [`EventSender`]. The simulation drains the queue once per
//! frame, in arrival order.

use crossbeam_channel::{Receiver, Sender, TryRecvError};

/// A key, reduced to what the control surface can bind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Space bar.
    Space,
    /// Escape.
    Escape,
    /// A printable character. Bindings match letters in either case.
    Char(char),
}

impl Key {
    /// Build a [`Key::Char`], folding letters to lowercase.
    pub fn char(c: char) -> Self {
        Self::Char(c.to_ascii_lowercase())
    }

    /// This key with any letter folded to lowercase.
    pub fn folded(self) -> Self {
        match self {
            Self::Char(c) => Self::char(c),
            other => other,
        }
    }
}

/// One host input event.
///
/// Mouse positions are in logical screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// The host wants the simulation to stop.
    Quit,
    /// A key was pressed.
    KeyDown(Key),
    /// The pointer moved.
    MouseMove {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// A mouse button was pressed.
    MouseDown {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
}

/// Cloneable producer half of an [`EventQueue`].
#[derive(Clone, Debug)]
pub struct EventSender {
    tx: Sender<InputEvent>,
}

impl EventSender {
    /// Queue `event`. Returns `false` if the queue has been dropped.
    pub fn send(&self, event: InputEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Unbounded FIFO of input events, owned by the simulation.
#[derive(Debug)]
pub struct EventQueue {
    tx: Sender<InputEvent>,
    rx: Receiver<InputEvent>,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self { tx, rx }
    }

    /// A new producer handle.
    pub fn sender(&self) -> EventSender {
        EventSender {
            tx: self.tx.clone(),
        }
    }

    /// Pop the oldest queued event, if any.
    pub fn next_event(&self) -> Option<InputEvent> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            // The queue holds its own sender, so it never disconnects.
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    /// Whether no events are queued.
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
