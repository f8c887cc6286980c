//! The [`Cell`] state type.

/// A discrete cell state in `[0, N)` where `N` is the automaton's state count.
///
/// Values are opaque state identifiers, not colours. State `0` is the
/// "empty" state that [`clear`](crate::CellWriter) operations reset to.
pub type Cell = u8;

/// Largest state count a palette or rule may declare.
pub const MAX_STATES: usize = Cell::MAX as usize + 1;
