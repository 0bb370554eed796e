//! Error types for round operations.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// A line that does not name a move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid move `{0}`")]
pub struct ParseMoveError(pub String);

/// Errors that can occur while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors raised by a move source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The source has no more lines.
    #[error("input closed")]
    Closed,
    /// Reading from the source failed.
    #[error("failed to read input: {0}")]
    Io(String),
}

/// Errors that can occur while setting up or running a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The round was created without any players.
    #[error("no players")]
    NoPlayers,
    /// More than one player carries the dealer name.
    #[error("more than one dealer")]
    MultipleDealers,
    /// The round has already ended.
    #[error("round is already over")]
    RoundFinished,
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// The move source failed.
    #[error(transparent)]
    Input(#[from] InputError),
}
