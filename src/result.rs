//! Round outcome types.

extern crate alloc;

use alloc::string::String;
use core::fmt;

use crate::hand::Hand;

/// How a round ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Every player finished and one came closest to 21.
    Winner {
        /// Seat index of the winner.
        seat: usize,
        /// The winner's name.
        name: String,
        /// The winning hand, fully revealed.
        hand: Hand,
    },
    /// Every player finished over 21.
    EveryoneBusts,
    /// A player quit before the round finished. No winner was computed.
    Quit {
        /// Seat index of the player who quit.
        seat: usize,
        /// The name of the player who quit.
        name: String,
    },
}

impl RoundOutcome {
    /// Returns the winner's seat, if the round produced one.
    #[must_use]
    pub const fn winner(&self) -> Option<usize> {
        match self {
            Self::Winner { seat, .. } => Some(*seat),
            Self::EveryoneBusts | Self::Quit { .. } => None,
        }
    }

    /// Returns whether the round was abandoned.
    #[must_use]
    pub const fn is_quit(&self) -> bool {
        matches!(self, Self::Quit { .. })
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner { name, hand, .. } => {
                write!(f, "Game Over! The winner is {name} with a hand of {hand}")
            }
            Self::EveryoneBusts => f.write_str("Everyone busts."),
            Self::Quit { name, .. } => write!(f, "{name} quit the round."),
        }
    }
}
