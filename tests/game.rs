//! Round integration tests.

use bjround::{
    Card, DECK_SIZE, DealError, Deck, Event, FirstTurn, Game, GameError, GameOptions, GameState,
    Hand, InputError, Move, ParseMoveError, Player, PlayerKind, PlayerStatus, RoundOutcome,
    Scripted, Suit, determine_winner,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn stacked_game(names: &[&str], draws: &[Card]) -> Game {
    stacked_game_with(names, draws, GameOptions::default())
}

fn stacked_game_with(names: &[&str], draws: &[Card], options: GameOptions) -> Game {
    Game::with_deck(names.iter().copied(), options, Deck::stacked(draws, 0)).unwrap()
}

fn hand_of(cards: &[Card]) -> Hand {
    cards.iter().copied().collect()
}

fn player_with(name: &str, cards: &[Card]) -> Player {
    Player::with_hand(name, PlayerKind::Human, hand_of(cards))
}

#[test]
fn hand_scores_soft_and_hard_aces() {
    let blackjack = hand_of(&[card(Suit::Spades, 1), card(Suit::Spades, 13)]);
    assert_eq!(blackjack.value(), 21);
    assert!(blackjack.is_soft());

    let two_aces = hand_of(&[
        card(Suit::Spades, 1),
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 9),
    ]);
    assert_eq!(two_aces.value(), 21);

    let faces = hand_of(&[card(Suit::Spades, 13), card(Suit::Hearts, 12)]);
    assert_eq!(faces.value(), 20);
    assert!(!faces.is_soft());

    let four_aces = hand_of(&[
        card(Suit::Spades, 1),
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 1),
        card(Suit::Diamonds, 1),
        card(Suit::Clubs, 7),
    ]);
    assert_eq!(four_aces.value(), 21);
    assert!(four_aces.is_soft());

    let hard_bust = hand_of(&[
        card(Suit::Spades, 1),
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 13),
        card(Suit::Diamonds, 12),
    ]);
    assert_eq!(hard_bust.value(), 22);
    assert!(hard_bust.is_bust());
    assert!(!hard_bust.is_soft());
}

#[test]
fn card_and_hand_rendering() {
    let mut ace = card(Suit::Spades, 1);
    assert_eq!(ace.to_string(), "A\u{2660}");
    assert_eq!(ace.value(), 11);
    assert_eq!(card(Suit::Hearts, 10).to_string(), "10\u{2665}");
    assert_eq!(card(Suit::Diamonds, 12).value(), 10);

    ace.set_visible(false);
    assert_eq!(ace.to_string(), "??");

    let hand = hand_of(&[ace, card(Suit::Clubs, 9)]);
    assert_eq!(hand.to_string(), "?? 9\u{2663} ");
    assert_eq!(hand.value(), 20);
    assert_eq!(hand.visible_value(), 9);
}

#[test]
fn fresh_deck_holds_every_card_once() {
    let deck = Deck::new(3);
    assert_eq!(deck.len(), DECK_SIZE);

    let mut seen: Vec<(Suit, u8)> = deck.cards().iter().map(|c| (c.suit, c.rank)).collect();
    seen.sort_by_key(|&(suit, rank)| (suit as u8, rank));
    seen.dedup();
    assert_eq!(seen.len(), DECK_SIZE);
    assert!(deck.cards().iter().all(Card::is_visible));
}

#[test]
fn same_seed_shuffles_the_same() {
    assert_eq!(Deck::new(11).cards(), Deck::new(11).cards());
    assert_ne!(Deck::new(11).cards(), Deck::new(12).cards());
}

#[test]
fn deal_hand_hides_leading_cards() {
    let mut deck = Deck::stacked(
        &[
            card(Suit::Hearts, 9),
            card(Suit::Hearts, 1),
            card(Suit::Spades, 4),
        ],
        0,
    );
    let mut hand = Hand::new();

    deck.deal_hand(&mut hand, 2, 1).unwrap();
    assert_eq!(deck.len(), 1);
    assert!(!hand.cards()[0].is_visible());
    assert!(hand.cards()[1].is_visible());
    assert_eq!(hand.value(), 20);
    assert_eq!(hand.visible_value(), 11);

    let dealt = deck.deal_card(&mut hand, false).unwrap();
    assert_eq!(dealt, card(Suit::Spades, 4));
    assert!(deck.is_empty());
    assert_eq!(
        deck.deal_card(&mut hand, false).unwrap_err(),
        DealError::EmptyDeck
    );
    assert_eq!(hand.len(), 3);
}

#[test]
fn move_parsing_is_exact() {
    assert_eq!("hit".parse::<Move>(), Ok(Move::Hit));
    assert_eq!("stay".parse::<Move>(), Ok(Move::Stay));
    assert_eq!("quit".parse::<Move>(), Ok(Move::Quit));
    assert_eq!(
        "Hit".parse::<Move>(),
        Err(ParseMoveError("Hit".to_string()))
    );
    assert!("stand".parse::<Move>().is_err());
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_dealer_name("House")
        .with_dealer_stands_on(18)
        .with_initial_cards(3)
        .with_dealer_hidden_cards(2)
        .with_moves([Move::Hit, Move::Stay])
        .with_first_turn(FirstTurn::FirstSeat);

    assert_eq!(options.dealer_name, "House");
    assert_eq!(options.dealer_stands_on, 18);
    assert_eq!(options.initial_cards, 3);
    assert_eq!(options.dealer_hidden_cards, 2);
    assert_eq!(options.moves, [Move::Hit, Move::Stay]);
    assert_eq!(options.first_turn, FirstTurn::FirstSeat);
}

#[test]
fn new_game_deals_opening_hands() {
    let game = Game::new(["Dealer", "Player1", "Player2"], GameOptions::default(), 9).unwrap();

    assert_eq!(game.deck().len(), DECK_SIZE - 6);
    assert_eq!(game.current_seat(), Some(1));

    let dealer = &game.players()[0];
    assert!(dealer.is_dealer());
    assert!(!dealer.hand().cards()[0].is_visible());
    assert!(dealer.hand().cards()[1].is_visible());

    for player in &game.players()[1..] {
        assert_eq!(player.kind(), PlayerKind::Human);
        assert_eq!(player.hand().len(), 2);
        assert!(player.hand().cards().iter().all(Card::is_visible));
    }
}

#[test]
fn first_seat_option_starts_at_zero() {
    let options = GameOptions::default().with_first_turn(FirstTurn::FirstSeat);
    let game = Game::new(["Dealer", "Player1"], options, 1).unwrap();
    assert_eq!(game.state(), GameState::AwaitingMove { seat: 0 });

    let alone = Game::new(["Player1"], GameOptions::default(), 1).unwrap();
    assert_eq!(alone.current_seat(), Some(0));
}

#[test]
fn setup_errors() {
    assert_eq!(
        Game::new(Vec::<&str>::new(), GameOptions::default(), 1).unwrap_err(),
        GameError::NoPlayers
    );
    assert_eq!(
        Game::new(["Dealer", "Dealer"], GameOptions::default(), 1).unwrap_err(),
        GameError::MultipleDealers
    );
    assert_eq!(
        Game::with_deck(
            ["Player1"],
            GameOptions::default(),
            Deck::stacked(&[card(Suit::Clubs, 2)], 0)
        )
        .unwrap_err(),
        GameError::Deal(DealError::EmptyDeck)
    );
}

#[test]
fn natural_twenty_one_wins_against_standing_dealer() {
    let mut game = stacked_game(
        &["Dealer", "Player1"],
        &[
            card(Suit::Hearts, 9),  // dealer hole
            card(Suit::Hearts, 1),  // dealer up
            card(Suit::Spades, 1),  // player
            card(Suit::Spades, 13), // player
        ],
    );
    assert_eq!(game.players()[1].status(), PlayerStatus::TwentyOne);

    let mut lines = Vec::new();
    let mut observer = |event: &Event<'_>| lines.push(event.to_string());
    let outcome = game.play(&mut Scripted::default(), &mut observer).unwrap();

    assert_eq!(outcome.winner(), Some(1));
    assert_eq!(game.state(), GameState::RoundOver { winner: Some(1) });
    assert_eq!(game.players()[0].status(), PlayerStatus::Stood);
    assert_eq!(game.players()[0].hand().len(), 2);
    assert!(game.players()[0].hand().cards().iter().all(Card::is_visible));

    assert_eq!(
        lines.first().map(String::as_str),
        Some("Dealer:\n?? A\u{2665} \nPlayer1:\nA\u{2660} K\u{2660} ")
    );
    assert!(lines.iter().any(|l| l == "I'll stay."));
    assert_eq!(
        lines.last().map(String::as_str),
        Some("Game Over! The winner is Player1 with a hand of A\u{2660} K\u{2660} ")
    );
}

#[test]
fn dealer_hits_until_seventeen() {
    let mut game = stacked_game(
        &["Dealer"],
        &[
            card(Suit::Clubs, 2),
            card(Suit::Diamonds, 3),
            card(Suit::Spades, 4),
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 3),
        ],
    );

    let outcome = game.play(&mut Scripted::default(), &mut ()).unwrap();

    let dealer = &game.players()[0];
    assert_eq!(dealer.hand().len(), 5);
    assert_eq!(dealer.hand().value(), 17);
    assert_eq!(dealer.status(), PlayerStatus::Stood);
    assert!(game.deck().is_empty());
    assert_eq!(outcome.winner(), Some(0));
}

#[test]
fn everyone_busts_means_no_winner() {
    let mut game = stacked_game(
        &["Dealer"],
        &[
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 6),
            card(Suit::Spades, 13),
        ],
    );

    let mut lines = Vec::new();
    let mut observer = |event: &Event<'_>| lines.push(event.to_string());
    let outcome = game.play(&mut Scripted::default(), &mut observer).unwrap();

    assert_eq!(outcome, RoundOutcome::EveryoneBusts);
    assert_eq!(game.state(), GameState::RoundOver { winner: None });
    assert_eq!(game.players()[0].status(), PlayerStatus::Bust);
    assert!(lines.iter().any(|l| l == "Dealer has busted!"));
    assert_eq!(lines.last().map(String::as_str), Some("Everyone busts."));
}

#[test]
fn quit_ends_round_without_winner() {
    let mut game = stacked_game(
        &["Dealer", "Player1"],
        &[
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 5),
            card(Suit::Hearts, 6),
        ],
    );

    let outcome = game.play(&mut Scripted::new(["quit"]), &mut ()).unwrap();

    assert_eq!(
        outcome,
        RoundOutcome::Quit {
            seat: 1,
            name: "Player1".to_string(),
        }
    );
    assert!(outcome.is_quit());
    assert_eq!(outcome.winner(), None);
    assert_eq!(game.state(), GameState::Abandoned { seat: 1 });
    assert_eq!(game.players()[0].status(), PlayerStatus::Active);
    assert_eq!(
        game.step(&mut Scripted::default(), &mut ()).unwrap_err(),
        GameError::RoundFinished
    );
}

#[test]
fn invalid_input_is_reprompted() {
    let mut game = stacked_game(
        &["Dealer", "Player1"],
        &[
            card(Suit::Clubs, 10),   // dealer hole
            card(Suit::Diamonds, 7), // dealer up
            card(Suit::Spades, 5),   // player
            card(Suit::Hearts, 6),   // player
            card(Suit::Clubs, 9),    // player hit
        ],
    );

    let mut input = Scripted::new(["HIT", "fold", " hit \n", "stay\n"]);
    let mut invalid = Vec::new();
    let mut observer = |event: &Event<'_>| {
        if let Event::InvalidMove { input } = event {
            invalid.push(input.to_string());
        }
    };
    let outcome = game.play(&mut input, &mut observer).unwrap();

    assert_eq!(invalid, ["HIT", "fold"]);
    assert_eq!(input.remaining(), 0);
    assert_eq!(game.players()[1].hand().value(), 20);
    assert_eq!(outcome.winner(), Some(1));
}

#[test]
fn moves_outside_the_offer_are_rejected() {
    let options = GameOptions::default().with_moves([Move::Hit, Move::Stay]);
    let mut game = stacked_game_with(
        &["Dealer", "Player1"],
        &[
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 5),
            card(Suit::Hearts, 6),
        ],
        options,
    );

    let mut rejected = 0;
    let mut observer = |event: &Event<'_>| {
        if matches!(event, Event::InvalidMove { .. }) {
            rejected += 1;
        }
    };
    let outcome = game
        .play(&mut Scripted::new(["quit", "stay"]), &mut observer)
        .unwrap();

    assert_eq!(rejected, 1);
    assert_eq!(outcome.winner(), Some(0));
}

#[test]
fn hitting_to_twenty_one_finishes_the_player() {
    let mut game = stacked_game(
        &["Dealer", "Player1"],
        &[
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 5),
            card(Suit::Hearts, 6),
            card(Suit::Spades, 13),
        ],
    );

    let mut lines = Vec::new();
    let mut observer = |event: &Event<'_>| lines.push(event.to_string());
    let outcome = game.play(&mut Scripted::new(["hit"]), &mut observer).unwrap();

    assert_eq!(game.players()[1].status(), PlayerStatus::TwentyOne);
    assert!(lines.iter().any(|l| l == "Hit me."));
    assert!(lines.iter().any(|l| l == "5\u{2660} 6\u{2665} K\u{2660} "));
    assert!(lines.iter().any(|l| l == "Player1 has 21!"));
    assert_eq!(outcome.winner(), Some(1));
}

#[test]
fn turns_go_round_robin() {
    let mut game = stacked_game(
        &["Dealer", "Alice", "Bob"],
        &[
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 9),
            card(Suit::Hearts, 9),
            card(Suit::Spades, 10),
            card(Suit::Hearts, 6),
        ],
    );
    let mut input = Scripted::new(["stay", "stay"]);

    assert_eq!(game.current_player().map(Player::name), Some("Alice"));
    assert_eq!(game.step(&mut input, &mut ()).unwrap(), None);
    assert_eq!(game.current_player().map(Player::name), Some("Bob"));
    assert_eq!(game.step(&mut input, &mut ()).unwrap(), None);
    assert_eq!(game.current_seat(), Some(0));

    // Dealer and Alice tie on 18; the earlier seat takes it.
    let outcome = game.step(&mut input, &mut ()).unwrap().unwrap();
    assert_eq!(outcome.winner(), Some(0));
    assert_eq!(game.current_seat(), None);
    assert!(game.all_finished());
}

#[test]
fn closed_input_aborts_and_keeps_the_turn() {
    let mut game = stacked_game(
        &["Dealer", "Player1"],
        &[
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 5),
            card(Suit::Hearts, 6),
        ],
    );

    assert_eq!(
        game.play(&mut Scripted::default(), &mut ()).unwrap_err(),
        GameError::Input(InputError::Closed)
    );
    assert_eq!(game.state(), GameState::AwaitingMove { seat: 1 });
}

#[test]
fn empty_deck_on_hit_aborts_round() {
    let mut game = stacked_game(
        &["Dealer", "Player1"],
        &[
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 5),
            card(Suit::Hearts, 6),
        ],
    );

    assert_eq!(
        game.play(&mut Scripted::new(["hit"]), &mut ()).unwrap_err(),
        GameError::Deal(DealError::EmptyDeck)
    );
    assert_eq!(game.players()[1].hand().len(), 2);
}

#[test]
fn winner_is_closest_to_twenty_one() {
    let nineteen = player_with("A", &[card(Suit::Clubs, 10), card(Suit::Clubs, 9)]);
    let twenty_one = player_with("B", &[card(Suit::Hearts, 1), card(Suit::Hearts, 10)]);
    let twenty_three = player_with(
        "C",
        &[
            card(Suit::Spades, 10),
            card(Suit::Spades, 9),
            card(Suit::Spades, 4),
        ],
    );
    assert_eq!(
        determine_winner(&[nineteen.clone(), twenty_one, twenty_three.clone()]),
        Some(1)
    );

    let twenty_two = player_with(
        "D",
        &[
            card(Suit::Diamonds, 10),
            card(Suit::Diamonds, 9),
            card(Suit::Diamonds, 3),
        ],
    );
    assert_eq!(determine_winner(&[twenty_two, twenty_three]), None);

    let first = player_with("E", &[card(Suit::Clubs, 13), card(Suit::Clubs, 12)]);
    let second = player_with("F", &[card(Suit::Hearts, 13), card(Suit::Hearts, 12)]);
    assert_eq!(determine_winner(&[nineteen, first, second]), Some(1));
}
