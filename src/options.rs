//! Round configuration options.

extern crate alloc;

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::player::Move;

/// Which seat takes the first turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FirstTurn {
    /// The seat after the first one dealt (seat 1, or seat 0 when alone).
    #[default]
    AfterFirstSeat,
    /// The first seat dealt.
    FirstSeat,
}

/// Configuration options for a blackjack round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::{FirstTurn, GameOptions};
///
/// let options = GameOptions::default()
///     .with_dealer_name("House")
///     .with_dealer_stands_on(18)
///     .with_first_turn(FirstTurn::FirstSeat);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// The name that marks a player as the dealer.
    pub dealer_name: Cow<'static, str>,
    /// The dealer stays once its hand reaches this value.
    pub dealer_stands_on: u8,
    /// Cards dealt to every player before the first turn.
    pub initial_cards: u8,
    /// How many of the dealer's initial cards are dealt face down.
    pub dealer_hidden_cards: u8,
    /// Moves offered to players, in display order.
    pub moves: Vec<Move>,
    /// Which seat takes the first turn.
    pub first_turn: FirstTurn,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_name: Cow::Borrowed("Dealer"),
            dealer_stands_on: 17,
            initial_cards: 2,
            dealer_hidden_cards: 1,
            moves: Move::ALL.to_vec(),
            first_turn: FirstTurn::AfterFirstSeat,
        }
    }
}

impl GameOptions {
    /// Sets the name that marks a player as the dealer.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_name("House");
    /// assert_eq!(options.dealer_name, "House");
    /// ```
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.dealer_name = name.into();
        self
    }

    /// Sets the value at which the dealer stays.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u8) -> Self {
        self.dealer_stands_on = value;
        self
    }

    /// Sets the number of cards dealt to each player up front.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_initial_cards(3);
    /// assert_eq!(options.initial_cards, 3);
    /// ```
    #[must_use]
    pub const fn with_initial_cards(mut self, count: u8) -> Self {
        self.initial_cards = count;
        self
    }

    /// Sets how many of the dealer's initial cards are face down.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_hidden_cards(0);
    /// assert_eq!(options.dealer_hidden_cards, 0);
    /// ```
    #[must_use]
    pub const fn with_dealer_hidden_cards(mut self, count: u8) -> Self {
        self.dealer_hidden_cards = count;
        self
    }

    /// Sets the moves offered to players.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{GameOptions, Move};
    ///
    /// let options = GameOptions::default().with_moves([Move::Hit, Move::Stay]);
    /// assert_eq!(options.moves, [Move::Hit, Move::Stay]);
    /// ```
    #[must_use]
    pub fn with_moves(mut self, moves: impl IntoIterator<Item = Move>) -> Self {
        self.moves = moves.into_iter().collect();
        self
    }

    /// Sets which seat takes the first turn.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{FirstTurn, GameOptions};
    ///
    /// let options = GameOptions::default().with_first_turn(FirstTurn::FirstSeat);
    /// assert_eq!(options.first_turn, FirstTurn::FirstSeat);
    /// ```
    #[must_use]
    pub const fn with_first_turn(mut self, first_turn: FirstTurn) -> Self {
        self.first_turn = first_turn;
        self
    }
}
