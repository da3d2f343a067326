use clap::Parser;
use env_logger::Env;
use log::info;

use quoridor_engine::config::{GameMode, MatchArgs, MatchConfig};
use quoridor_engine::orchestrator::{play_game, run_batch};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = MatchConfig::from(MatchArgs::parse());

    match config.mode {
        GameMode::AiVsAi => {
            let seeds = config.game_seeds(0);
            let mut player1 = config.player1.create_player(seeds.player1);
            let mut player2 = config.player2.create_player(seeds.player2);
            info!("{} vs {}", player1.name(), player2.name());

            let record = play_game(player1.as_mut(), player2.as_mut(), config.max_plies, seeds.fallback);
            println!("{}", record.final_state);
            println!("{} after {} plies", record.outcome, record.plies);
        }
        GameMode::Batch => {
            let report = run_batch(&config);
            println!("{}", report);
        }
    }
}
