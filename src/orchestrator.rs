//! Headless game loop and batch runner.
//!
//! [`play_game`] alternates two [`Player`]s from the starting position until
//! a pawn reaches its goal row, the side to move has nothing to play, or the
//! ply limit runs out. [`run_batch`] plays a series of such games from a
//! [`MatchConfig`] and tallies the results.
//!
//! # Game Flow
//!
//! ```text
//! [New Game] -> [Request Action] -> [Validate + Apply] -> [Check End]
//!   -> [Switch Turn] -> [Request Action] ...
//! ```
//!
//! An action that fails validation is replaced once by a random legal
//! action, so a misbehaving player cannot stall the game.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::time::Instant;

use crate::agent::player::Player;
use crate::agent::RandomPlayer;
use crate::config::MatchConfig;
use crate::game_repr::{Action, GameError, GameState, PlayerId};

pub use crate::agent::player::{DrawReason, GameOutcome};

/// Everything that happened in one game
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub actions: Vec<Action>,
    pub plies: u32,
    /// Actions replaced by the random fallback
    pub fallbacks: u32,
    pub final_state: GameState,
}

/// Play one game from the starting position.
///
/// `fallback_seed` seeds the random player used when an action is rejected.
pub fn play_game(
    player1: &mut dyn Player,
    player2: &mut dyn Player,
    max_plies: u32,
    fallback_seed: u64,
) -> GameRecord {
    let mut state = GameState::new();
    let mut actions = Vec::new();
    let mut fallback = RandomPlayer::with_name(StdRng::seed_from_u64(fallback_seed), "Fallback");
    let mut fallbacks = 0;

    let outcome = loop {
        if let Some(winner) = state.winner() {
            break GameOutcome::Winner(winner);
        }
        if state.ply() >= max_plies {
            break GameOutcome::Draw(DrawReason::MaxPlies);
        }

        let mover = state.to_move();
        let player: &mut dyn Player = match mover {
            PlayerId::One => &mut *player1,
            PlayerId::Two => &mut *player2,
        };

        let action = match next_action(&mut state, player, &mut fallback, &mut fallbacks) {
            Ok(action) => action,
            Err(GameError::NoLegalActions(id)) => break GameOutcome::Draw(DrawReason::NoLegalActions(id)),
            Err(err) => {
                warn!("Player {} could not act: {}", mover, err);
                break GameOutcome::Draw(DrawReason::NoLegalActions(mover));
            }
        };

        debug!("ply {}: player {} plays {}", state.ply(), mover, action);
        actions.push(action);
    };

    player1.game_ended(outcome);
    player2.game_ended(outcome);

    GameRecord {
        outcome,
        plies: state.ply(),
        actions,
        fallbacks,
        final_state: state,
    }
}

/// Ask `player` for an action and apply it. A rejected choice is replaced by
/// the fallback player's action.
fn next_action(
    state: &mut GameState,
    player: &mut dyn Player,
    fallback: &mut RandomPlayer<StdRng>,
    fallbacks: &mut u32,
) -> Result<Action, GameError> {
    let rejection = match player.choose_action(state) {
        Ok(action) => match state.apply_action(action) {
            Ok(()) => return Ok(action),
            Err(err) => err,
        },
        Err(GameError::NoLegalActions(id)) => return Err(GameError::NoLegalActions(id)),
        Err(err) => err,
    };

    warn!("{} (player {}): {}, playing a random action instead", player.name(), state.to_move(), rejection);
    *fallbacks += 1;

    let action = fallback.choose_action(state)?;
    state.apply_action(action)?;
    Ok(action)
}

/// Tallies over a batch of games
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub games: u32,
    pub player1_wins: u32,
    pub player2_wins: u32,
    pub draws: u32,
    pub total_plies: u64,
    pub fallbacks: u32,
    pub time_ms: u64,
}

impl BatchReport {
    fn record(&mut self, record: &GameRecord) {
        self.games += 1;
        self.total_plies += record.plies as u64;
        self.fallbacks += record.fallbacks;
        match record.outcome {
            GameOutcome::Winner(PlayerId::One) => self.player1_wins += 1,
            GameOutcome::Winner(PlayerId::Two) => self.player2_wins += 1,
            GameOutcome::Draw(_) => self.draws += 1,
        }
    }

    pub fn average_plies(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_plies as f64 / self.games as f64
        }
    }

    pub fn wins(&self, player: PlayerId) -> u32 {
        match player {
            PlayerId::One => self.player1_wins,
            PlayerId::Two => self.player2_wins,
        }
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: player 1 won {}, player 2 won {}, {} drawn, {:.1} plies on average, {} fallbacks, {}ms",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.average_plies(),
            self.fallbacks,
            self.time_ms
        )
    }
}

/// Play `config.num_matches` games with fresh, seeded players for each game.
pub fn run_batch(config: &MatchConfig) -> BatchReport {
    let start_time = Instant::now();
    let mut report = BatchReport::default();

    info!(
        "Playing {} game(s): {} vs {}, seed {}",
        config.num_matches, config.player1, config.player2, config.seed
    );

    for game in 0..config.num_matches {
        let seeds = config.game_seeds(game);
        let mut player1 = config.player1.create_player(seeds.player1);
        let mut player2 = config.player2.create_player(seeds.player2);

        let record = play_game(player1.as_mut(), player2.as_mut(), config.max_plies, seeds.fallback);
        info!("Game {}/{}: {} after {} plies", game + 1, config.num_matches, record.outcome, record.plies);
        report.record(&record);
    }

    report.time_ms = start_time.elapsed().as_millis() as u64;
    info!("{}", report);
    report
}
