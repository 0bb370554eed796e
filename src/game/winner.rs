use crate::player::Player;
use crate::result::RoundOutcome;

use super::{Game, GameState};

/// Picks the player closest to 21 without going over.
///
/// On a tie the earliest seat wins. Returns `None` when every player is
/// over 21.
///
/// # Example
///
/// ```
/// use bjround::{Player, PlayerKind, determine_winner};
///
/// // Two empty hands tie at zero, so the first seat takes it.
/// let alice = Player::new("Alice", PlayerKind::Human);
/// let bob = Player::new("Bob", PlayerKind::Human);
/// assert_eq!(determine_winner(&[alice, bob]), Some(0));
/// ```
#[must_use]
pub fn determine_winner(players: &[Player]) -> Option<usize> {
    let mut best: Option<(usize, u8)> = None;

    for (seat, player) in players.iter().enumerate() {
        let Some(gap) = 21u8.checked_sub(player.hand().value()) else {
            continue;
        };
        if best.is_none_or(|(_, best_gap)| gap < best_gap) {
            best = Some((seat, gap));
        }
    }

    best.map(|(seat, _)| seat)
}

impl Game {
    /// Reveals every hand, picks the winner, and closes the round.
    pub(super) fn finish_round(&mut self) -> RoundOutcome {
        for player in &mut self.players {
            player.hand_mut().reveal();
        }

        let winner = determine_winner(&self.players);
        self.state = GameState::RoundOver { winner };

        let outcome = winner.map_or(RoundOutcome::EveryoneBusts, |seat| {
            let player = &self.players[seat];
            RoundOutcome::Winner {
                seat,
                name: player.name().into(),
                hand: player.hand().clone(),
            }
        });

        log::info!("round over: {outcome}");
        outcome
    }
}
