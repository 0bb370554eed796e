//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the player at `seat` to take a turn.
    AwaitingMove {
        /// Index into the player list.
        seat: usize,
    },
    /// Every player finished.
    RoundOver {
        /// Seat of the winner, or `None` when everyone busted.
        winner: Option<usize>,
    },
    /// The player at `seat` quit before the round finished.
    Abandoned {
        /// Index of the player who quit.
        seat: usize,
    },
}

impl GameState {
    /// Returns whether no further turns will be played.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self, Self::AwaitingMove { .. })
    }
}
