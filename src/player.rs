//! Players, their moves, and how they choose them.

extern crate alloc;

use alloc::borrow::ToOwned;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::{InputError, ParseMoveError};
use crate::event::{Event, Observer};
use crate::hand::Hand;
use crate::input::MoveSource;

/// A move a player can make on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Take another card.
    Hit,
    /// Keep the current hand and finish.
    Stay,
    /// Abandon the round.
    Quit,
}

impl Move {
    /// Every move, in the order they are offered by default.
    pub const ALL: [Self; 3] = [Self::Hit, Self::Stay, Self::Quit];

    /// Returns the word a player types to choose this move.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Stay => "stay",
            Self::Quit => "quit",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parses the exact move word; no case folding or abbreviations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hit" => Ok(Self::Hit),
            "stay" => Ok(Self::Stay),
            "quit" => Ok(Self::Quit),
            other => Err(ParseMoveError(other.to_owned())),
        }
    }
}

/// How a player picks moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    /// Moves are read from a [`MoveSource`].
    Human,
    /// Hits below the stand threshold, otherwise stays.
    Dealer,
}

/// Whether a player still takes turns, and why not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    /// The player still chooses moves.
    Active,
    /// The player chose to stay.
    Stood,
    /// The hand went over 21.
    Bust,
    /// The hand reached exactly 21.
    TwentyOne,
}

/// A seat at the table.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Hand,
    kind: PlayerKind,
    status: PlayerStatus,
}

impl Player {
    /// Creates an active player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            kind,
            status: PlayerStatus::Active,
        }
    }

    /// Creates an active player already holding `hand`.
    #[must_use]
    pub fn with_hand(name: impl Into<String>, kind: PlayerKind, hand: Hand) -> Self {
        Self {
            hand,
            ..Self::new(name, kind)
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns how the player picks moves.
    #[must_use]
    pub const fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Returns whether the player is the dealer.
    #[must_use]
    pub fn is_dealer(&self) -> bool {
        self.kind == PlayerKind::Dealer
    }

    /// Returns the player's status.
    #[must_use]
    pub const fn status(&self) -> PlayerStatus {
        self.status
    }

    pub(crate) const fn set_status(&mut self, status: PlayerStatus) {
        self.status = status;
    }

    /// Returns whether the player takes no further turns.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status != PlayerStatus::Active
    }

    /// Chooses a move from `moves`.
    ///
    /// A human player reads lines from `input` until one names a move in
    /// `moves`, reporting each rejected line to `observer`. The dealer
    /// ignores both and hits while its hand is below `stands_on`.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` fails or runs dry before a legal move is
    /// read.
    pub fn select_move<S, O>(
        &self,
        moves: &[Move],
        stands_on: u8,
        input: &mut S,
        observer: &mut O,
    ) -> Result<Move, InputError>
    where
        S: MoveSource + ?Sized,
        O: Observer + ?Sized,
    {
        match self.kind {
            PlayerKind::Dealer => {
                if self.hand.value() < stands_on {
                    Ok(Move::Hit)
                } else {
                    Ok(Move::Stay)
                }
            }
            PlayerKind::Human => loop {
                let line = input.next_line()?;
                let line = line.trim();
                match line.parse::<Move>() {
                    Ok(mv) if moves.contains(&mv) => return Ok(mv),
                    _ => observer.on_event(&Event::InvalidMove { input: line }),
                }
            },
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\n{}", self.name, self.hand)
    }
}
