//! A turn-by-turn blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals a single round from a
//! 52-card deck, lets every player take turns until they stay, bust, or hit
//! 21, and then names the player closest to 21. Human moves come from a
//! [`MoveSource`]; everything that happens is reported to an [`Observer`].
//!
//! # Example
//!
//! ```
//! use bjround::{Game, GameOptions, Scripted};
//!
//! let mut game = Game::new(["Dealer", "Player1"], GameOptions::default(), 42).unwrap();
//! let mut input = Scripted::new(["stay"]);
//! let outcome = game.play(&mut input, &mut ()).unwrap();
//! println!("{outcome}");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod input;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod io;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{DealError, GameError, InputError, ParseMoveError};
pub use event::{Event, Observer};
pub use game::{Game, GameState, determine_winner};
pub use hand::Hand;
pub use input::{MoveSource, Scripted};
#[cfg(feature = "std")]
pub use io::{LineSource, WriteObserver};
pub use options::{FirstTurn, GameOptions};
pub use player::{Move, Player, PlayerKind, PlayerStatus};
pub use result::RoundOutcome;
