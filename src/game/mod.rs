//! Round engine and state management.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::deck::Deck;
use crate::error::GameError;
use crate::options::{FirstTurn, GameOptions};
use crate::player::{Player, PlayerKind, PlayerStatus};

mod turn;
mod winner;
pub mod state;

pub use state::GameState;
pub use winner::determine_winner;

/// A single blackjack round.
///
/// The game owns the deck, every player's hand, and the turn cursor. Turns
/// go round-robin over the players in the order their names were given.
#[derive(Debug, Clone)]
pub struct Game {
    /// Round options.
    options: GameOptions,
    /// Undealt cards.
    deck: Deck,
    /// Seats in turn order.
    players: Vec<Player>,
    /// Current round state.
    state: GameState,
}

impl Game {
    /// Creates a round with a freshly shuffled deck and deals the opening
    /// hands.
    ///
    /// A player whose name equals [`GameOptions::dealer_name`] is the
    /// dealer; everyone else is human.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Game, GameOptions};
    ///
    /// let game = Game::new(["Dealer", "Player1"], GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.players().len(), 2);
    /// assert!(game.players()[0].is_dealer());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if `names` is empty, if more than one name is the
    /// dealer name, or if the deck cannot cover the opening hands.
    pub fn new<I, N>(names: I, options: GameOptions, seed: u64) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self::with_deck(names, options, Deck::new(seed))
    }

    /// Creates a round that deals from `deck`.
    ///
    /// Pair with [`Deck::stacked`] to play out a known sequence of cards.
    ///
    /// # Errors
    ///
    /// Same as [`Game::new`].
    pub fn with_deck<I, N>(names: I, options: GameOptions, deck: Deck) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let mut players = Vec::new();
        let mut has_dealer = false;
        for name in names {
            let name = name.into();
            let kind = if name == options.dealer_name {
                if has_dealer {
                    return Err(GameError::MultipleDealers);
                }
                has_dealer = true;
                PlayerKind::Dealer
            } else {
                PlayerKind::Human
            };
            players.push(Player::new(name, kind));
        }

        if players.is_empty() {
            log::warn!("refusing to start a round with no players");
            return Err(GameError::NoPlayers);
        }

        let current = match options.first_turn {
            FirstTurn::AfterFirstSeat => 1 % players.len(),
            FirstTurn::FirstSeat => 0,
        };

        let mut game = Self {
            options,
            deck,
            players,
            state: GameState::AwaitingMove { seat: current },
        };
        game.deal_opening_hands()?;

        log::info!(
            "round started with {} players, seat {} to move",
            game.players.len(),
            current
        );

        Ok(game)
    }

    /// Deals the opening hands and finishes anyone already at 21.
    fn deal_opening_hands(&mut self) -> Result<(), GameError> {
        let count = self.options.initial_cards;
        for player in &mut self.players {
            let hidden = if player.is_dealer() {
                self.options.dealer_hidden_cards
            } else {
                0
            };
            self.deck.deal_hand(player.hand_mut(), count, hidden)?;

            if player.hand().value() == 21 {
                log::debug!("{} dealt 21", player.name());
                player.set_status(PlayerStatus::TwentyOne);
            }
        }
        Ok(())
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the undealt cards.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns every player, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the seat whose turn it is, or `None` once the round is over.
    #[must_use]
    pub const fn current_seat(&self) -> Option<usize> {
        match self.state {
            GameState::AwaitingMove { seat } => Some(seat),
            GameState::RoundOver { .. } | GameState::Abandoned { .. } => None,
        }
    }

    /// Returns the player whose turn it is, or `None` once the round is
    /// over.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current_seat().map(|seat| &self.players[seat])
    }

    /// Returns whether every player is finished.
    #[must_use]
    pub fn all_finished(&self) -> bool {
        self.players.iter().all(Player::is_finished)
    }
}
