//! The pool of undealt cards.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DealError;
use crate::hand::Hand;

/// A standard 52-card deck.
///
/// Cards are dealt from the top of the pool. Since the pool is shuffled
/// uniformly, every undealt card is equally likely to come next.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Undealt cards; the last element is dealt next.
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a shuffled 52-card deck from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(7);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        let mut deck = Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.shuffle();
        deck
    }

    /// Creates a deck that deals exactly `draws`, first element first.
    ///
    /// The deck is not shuffled. Calling [`Deck::shuffle`] afterwards uses
    /// the generator seeded with `seed`.
    #[must_use]
    pub fn stacked(draws: &[Card], seed: u64) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Randomizes the order of the remaining cards.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        log::trace!("shuffled {} cards", self.cards.len());
    }

    /// Deals one card into `hand`, face down when `hide` is set.
    ///
    /// Returns a copy of the dealt card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards are left.
    pub fn deal_card(&mut self, hand: &mut Hand, hide: bool) -> Result<Card, DealError> {
        let mut card = self.cards.pop().ok_or(DealError::EmptyDeck)?;
        card.set_visible(!hide);
        hand.add_card(card);
        log::trace!(
            "dealt {}{} ({} left)",
            card.rank_symbol(),
            card.suit.symbol(),
            self.cards.len()
        );
        Ok(card)
    }

    /// Deals `count` cards into `hand`, hiding the first `hide_count`.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if the deck runs out part way. Cards
    /// dealt before that point stay in the hand.
    pub fn deal_hand(
        &mut self,
        hand: &mut Hand,
        count: u8,
        hide_count: u8,
    ) -> Result<(), DealError> {
        for i in 0..count {
            self.deal_card(hand, i < hide_count)?;
        }
        Ok(())
    }

    /// Returns the undealt cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
