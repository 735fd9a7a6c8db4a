use std::env;

use anyhow::{bail, Context, Result};
use log::info;

use arcade_ai::{
    CheckersBoard, ConnectFourBoard, Difficulty, GameEndState, GameState, Match, MinMaxBot,
    Position, SearchConfig, Side,
};

#[derive(Debug, Default)]
struct Tally {
    ai: usize,
    player: usize,
    draws: usize,
}

impl Tally {
    fn record(&mut self, end_state: GameEndState) {
        match end_state {
            GameEndState::Winner(Side::Ai) => self.ai += 1,
            GameEndState::Winner(Side::Player) => self.player += 1,
            GameEndState::Draw => self.draws += 1,
        }
    }
}

/// AI against a random opponent, until someone wins or `max_plies` is reached.
fn play<P: Position>(mut game: Match<P>, bot: &MinMaxBot, max_plies: usize) -> GameEndState {
    for _ in 0..max_plies {
        let state = if game.current_player() == Side::Ai {
            game.make_ai_move(bot)
        } else {
            game.make_random_move()
        };
        if let GameState::Finished(end_state) = state {
            return end_state;
        }
    }
    info!("Game stopped after {} plies", max_plies);
    GameEndState::Draw
}

fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        bail!("usage: {} <checkers|connect4> [difficulty] [games]", args[0]);
    }
    let difficulty: Difficulty = match args.get(2) {
        Some(level) => level.parse().context("failed to parse difficulty")?,
        None => Difficulty::default(),
    };
    let games: usize = match args.get(3) {
        Some(games) => games.parse().context("failed to parse number of games")?,
        None => 1,
    };
    let config = SearchConfig::new(difficulty);

    let mut tally = Tally::default();
    for index in 0..games {
        let end_state = match args[1].as_str() {
            "checkers" => play(Match::new(CheckersBoard::new()), &config.checkers_bot(), 200),
            "connect4" | "connect-four" => play(
                Match::new(ConnectFourBoard::new()),
                &config.connect_four_bot(),
                42,
            ),
            other => bail!("unknown game '{}'", other),
        };
        info!("Game #{} finished: {:?}", index + 1, end_state);
        tally.record(end_state);
    }
    println!(
        "{} games at difficulty {}: AI {} - random {} - draws {}",
        games, difficulty, tally.ai, tally.player, tally.draws
    );
    Ok(())
}
