//! CLI blackjack example: one round for a dealer and one human player.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{Game, GameOptions, LineSource, WriteObserver};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut game = match Game::new(["Dealer", "Player1"], GameOptions::default(), seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Error! {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut input = LineSource::new(io::stdin().lock());
    let mut table = WriteObserver::new(io::stdout());

    match game.play(&mut input, &mut table) {
        Ok(outcome) => {
            log::info!("finished: {outcome}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Round aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
