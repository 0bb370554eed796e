//! Card types and deck constants.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits in the order a fresh deck is built.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Clubs, Self::Diamonds];

    /// Returns the unicode symbol of the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '\u{2660}',
            Self::Hearts => '\u{2665}',
            Self::Clubs => '\u{2663}',
            Self::Diamonds => '\u{2666}',
        }
    }
}

/// A playing card.
///
/// Rank and suit never change once the card is created. Only the visibility
/// flag is toggled, when the card is dealt face down or revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    visible: bool,
}

impl Card {
    /// Creates a new face-up card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but contribute nothing to a hand's value.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            visible: true,
        }
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Turns the card face up or face down.
    pub const fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }

    /// Blackjack contribution of the card, with an ace counted high.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self.rank {
            1 => 11,
            2..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }

    /// Returns the face symbol of the rank (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn rank_symbol(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.visible {
            write!(f, "{}{}", self.rank_symbol(), self.suit.symbol())
        } else {
            f.write_str("??")
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
