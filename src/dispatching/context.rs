//! Selection context for rule evaluation.

use crate::models::Position;

/// State passed to selection rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionContext {
    /// Position being filled.
    pub position: Position,
}

impl SelectionContext {
    /// Creates a context for filling `position`.
    pub fn for_position(position: Position) -> Self {
        Self { position }
    }
}
