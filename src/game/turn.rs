use crate::error::GameError;
use crate::event::{Event, Observer};
use crate::input::MoveSource;
use crate::player::{Move, PlayerStatus};
use crate::result::RoundOutcome;

use super::{Game, GameState};

impl Game {
    /// Plays turns until the round ends.
    ///
    /// Announces the opening hands, then calls [`Game::step`] until every
    /// player is finished or someone quits.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Game, GameOptions, Scripted};
    ///
    /// let mut game = Game::new(["Dealer", "Player1"], GameOptions::default(), 3).unwrap();
    /// let outcome = game.play(&mut Scripted::new(["quit"]), &mut ()).unwrap();
    /// # let _ = outcome;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the round is already over, the deck runs out, or
    /// the move source fails.
    pub fn play<S, O>(
        &mut self,
        input: &mut S,
        observer: &mut O,
    ) -> Result<RoundOutcome, GameError>
    where
        S: MoveSource + ?Sized,
        O: Observer + ?Sized,
    {
        if self.state.is_over() {
            return Err(GameError::RoundFinished);
        }

        observer.on_event(&Event::Dealt {
            players: &self.players,
        });

        loop {
            if let Some(outcome) = self.step(input, observer)? {
                return Ok(outcome);
            }
        }
    }

    /// Plays exactly one turn.
    ///
    /// A finished player's turn is skipped; otherwise the player picks a
    /// move and it is applied. The hand is then checked for bust or 21 and
    /// the turn passes to the next seat. Returns the outcome once the round
    /// has ended, `None` while it continues.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is already over, the deck runs out, or
    /// the move source fails. A failed step leaves the turn with the same
    /// player.
    pub fn step<S, O>(
        &mut self,
        input: &mut S,
        observer: &mut O,
    ) -> Result<Option<RoundOutcome>, GameError>
    where
        S: MoveSource + ?Sized,
        O: Observer + ?Sized,
    {
        let GameState::AwaitingMove { seat } = self.state else {
            return Err(GameError::RoundFinished);
        };

        if !self.players[seat].is_finished() {
            let player = &self.players[seat];
            observer.on_event(&Event::Turn {
                player,
                moves: &self.options.moves,
            });

            let action = player.select_move(
                &self.options.moves,
                self.options.dealer_stands_on,
                input,
                observer,
            )?;
            log::debug!("{} chose {action}", player.name());
            observer.on_event(&Event::Moved { player, action });

            match action {
                Move::Quit => return Ok(Some(self.abandon(seat))),
                Move::Hit => {
                    let player = &mut self.players[seat];
                    let card = self.deck.deal_card(player.hand_mut(), false)?;
                    observer.on_event(&Event::Drew {
                        player: &self.players[seat],
                        card,
                    });
                }
                Move::Stay => self.players[seat].set_status(PlayerStatus::Stood),
            }
        }

        self.check_hand(seat, observer);

        if self.all_finished() {
            let outcome = self.finish_round();
            observer.on_event(&Event::RoundOver { outcome: &outcome });
            return Ok(Some(outcome));
        }

        let next = (seat + 1) % self.players.len();
        self.state = GameState::AwaitingMove { seat: next };
        Ok(None)
    }

    /// Finishes the player at `seat` on a bust or on exactly 21.
    fn check_hand<O: Observer + ?Sized>(&mut self, seat: usize, observer: &mut O) {
        let player = &mut self.players[seat];
        if player.status() != PlayerStatus::Active {
            return;
        }

        let value = player.hand().value();
        if value > 21 {
            player.set_status(PlayerStatus::Bust);
            log::debug!("{} busted with {value}", player.name());
            observer.on_event(&Event::Busted { player });
        } else if value == 21 {
            player.set_status(PlayerStatus::TwentyOne);
            observer.on_event(&Event::TwentyOne { player });
        }
    }

    /// Ends the round early because the player at `seat` quit.
    fn abandon(&mut self, seat: usize) -> RoundOutcome {
        self.state = GameState::Abandoned { seat };
        log::info!("{} quit, round abandoned", self.players[seat].name());
        RoundOutcome::Quit {
            seat,
            name: self.players[seat].name().into(),
        }
    }
}
