//! Events reported to the table while a round runs.

use core::fmt;

use crate::card::Card;
use crate::player::{Move, Player};
use crate::result::RoundOutcome;

/// Something that happened during a round.
///
/// The `Display` form of each event is the text a console table shows for
/// it.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// Initial hands have been dealt.
    Dealt {
        /// Every seat, in turn order.
        players: &'a [Player],
    },
    /// A player is about to choose a move.
    Turn {
        /// The player to move.
        player: &'a Player,
        /// The moves on offer.
        moves: &'a [Move],
    },
    /// A line of input did not name a legal move.
    InvalidMove {
        /// The rejected line, trimmed.
        input: &'a str,
    },
    /// A player chose a move.
    Moved {
        /// The player who moved.
        player: &'a Player,
        /// The chosen move.
        action: Move,
    },
    /// A player drew a card after hitting.
    Drew {
        /// The player, with the new card already in hand.
        player: &'a Player,
        /// The drawn card.
        card: Card,
    },
    /// A player's hand went over 21.
    Busted {
        /// The player who busted.
        player: &'a Player,
    },
    /// A player's hand reached exactly 21.
    TwentyOne {
        /// The player at 21.
        player: &'a Player,
    },
    /// The round is over.
    RoundOver {
        /// How it ended.
        outcome: &'a RoundOutcome,
    },
}

impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dealt { players } => {
                for (i, player) in players.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{player}")?;
                }
                Ok(())
            }
            Self::Turn { player, moves } => {
                write!(f, "{player}\nSelect a move: \n")?;
                for (i, mv) in moves.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{mv}")?;
                }
                Ok(())
            }
            Self::InvalidMove { .. } => f.write_str("\nInvalid Move!\n"),
            Self::Moved { player, action } => match action {
                Move::Hit => f.write_str("Hit me."),
                Move::Stay => f.write_str("I'll stay."),
                Move::Quit => write!(f, "{} quits.", player.name()),
            },
            Self::Drew { player, .. } => write!(f, "{}", player.hand()),
            Self::Busted { player } => write!(f, "{} has busted!", player.name()),
            Self::TwentyOne { player } => write!(f, "{} has 21!", player.name()),
            Self::RoundOver { outcome } => write!(f, "{outcome}"),
        }
    }
}

/// Receives round events.
///
/// Closures taking `&Event` are observers, and `()` discards everything.
pub trait Observer {
    /// Called once per event, in the order events happen.
    fn on_event(&mut self, event: &Event<'_>);
}

impl Observer for () {
    fn on_event(&mut self, _event: &Event<'_>) {}
}

impl<F> Observer for F
where
    F: FnMut(&Event<'_>),
{
    fn on_event(&mut self, event: &Event<'_>) {
        self(event);
    }
}
