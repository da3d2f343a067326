//! Match configuration for the headless runner.
//!
//! A [`MatchConfig`] holds everything needed to play one game or a batch of
//! games between two configured players. It is usually built from command
//! line arguments: [`MatchArgs`] is the clap parser, converted with `From`.

use std::fmt;

use clap::builder::PossibleValue;
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::agent::ai::{Difficulty, MinimaxPlayer};
use crate::agent::{Player, RandomPlayer};

pub const DEFAULT_MAX_PLIES: u32 = 400;

/// Configuration for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Minimax AI with the given difficulty
    Ai { difficulty: Difficulty },
    /// Uniformly random legal actions
    Random,
}

impl PlayerConfig {
    /// Build the player, seeding its RNG with `seed`
    pub fn create_player(&self, seed: u64) -> Box<dyn Player> {
        let rng = StdRng::seed_from_u64(seed);
        match self {
            PlayerConfig::Ai { difficulty } => Box::new(MinimaxPlayer::with_difficulty(rng, *difficulty)),
            PlayerConfig::Random => Box::new(RandomPlayer::new(rng)),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig::Ai {
            difficulty: Difficulty::default(),
        }
    }
}

impl fmt::Display for PlayerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerConfig::Ai { difficulty } => write!(f, "AI ({})", difficulty),
            PlayerConfig::Random => f.write_str("Random"),
        }
    }
}

impl ValueEnum for PlayerConfig {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            PlayerConfig::Ai { difficulty: Difficulty::Easy },
            PlayerConfig::Ai { difficulty: Difficulty::Medium },
            PlayerConfig::Ai { difficulty: Difficulty::Hard },
            PlayerConfig::Random,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let value = match self {
            PlayerConfig::Ai { difficulty: Difficulty::Easy } => {
                PossibleValue::new("easy").help("Minimax, depth 1, noisy")
            }
            PlayerConfig::Ai { difficulty: Difficulty::Medium } => {
                PossibleValue::new("medium").help("Minimax, depth 2")
            }
            PlayerConfig::Ai { difficulty: Difficulty::Hard } => {
                PossibleValue::new("hard").help("Minimax, depth 3")
            }
            PlayerConfig::Random => PossibleValue::new("random").help("Uniformly random legal actions"),
        };
        Some(value)
    }
}

/// How many games the runner plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// A single game, logged move by move
    AiVsAi,
    /// Several games, summarized at the end
    Batch,
}

/// Complete runner configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub mode: GameMode,
    pub player1: PlayerConfig,
    pub player2: PlayerConfig,
    pub num_matches: u32,
    pub max_plies: u32,
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::AiVsAi,
            player1: PlayerConfig::default(),
            player2: PlayerConfig::default(),
            num_matches: 1,
            max_plies: DEFAULT_MAX_PLIES,
            seed: 0,
        }
    }
}

/// RNG seeds for one game of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSeeds {
    pub player1: u64,
    pub player2: u64,
    /// Seeds the random player that replaces rejected actions
    pub fallback: u64,
}

impl MatchConfig {
    /// A single game between two AIs
    pub fn ai_vs_ai(p1: Difficulty, p2: Difficulty) -> Self {
        Self {
            player1: PlayerConfig::Ai { difficulty: p1 },
            player2: PlayerConfig::Ai { difficulty: p2 },
            ..Self::default()
        }
    }

    /// `num_matches` games between the given players
    pub fn batch(player1: PlayerConfig, player2: PlayerConfig, num_matches: u32) -> Self {
        Self {
            mode: GameMode::Batch,
            player1,
            player2,
            num_matches,
            ..Self::default()
        }
    }

    /// Parse command line arguments, program name first.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        MatchArgs::try_parse_from(args).map(Self::from)
    }

    /// Seeds for game `game_index` of a run. Distinct within a game and
    /// across the games of a run.
    pub fn game_seeds(&self, game_index: u32) -> GameSeeds {
        let base = self
            .seed
            .wrapping_mul(0x9E37_79B9_7F4A_7C15)
            .wrapping_add(game_index as u64)
            .wrapping_mul(3);
        GameSeeds {
            player1: base,
            player2: base.wrapping_add(1),
            fallback: base.wrapping_add(2),
        }
    }
}

/// Headless match runner: play one game, or a batch of games, between two players.
#[derive(Parser, Debug, Clone)]
#[command(name = "quoridor")]
#[command(about = "Headless match runner for the 9x9 wall-racing game")]
#[command(after_help = "Log verbosity follows RUST_LOG (default: info).")]
pub struct MatchArgs {
    /// Player one
    #[arg(long, value_enum, ignore_case = true, default_value = "medium")]
    pub p1: PlayerConfig,

    /// Player two
    #[arg(long, value_enum, ignore_case = true, default_value = "medium")]
    pub p2: PlayerConfig,

    /// Games to play; more than one runs a batch
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub matches: u32,

    /// Plies before a game is scored as a draw
    #[arg(long, default_value_t = DEFAULT_MAX_PLIES, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_plies: u32,

    /// Base seed for every random choice
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

impl From<MatchArgs> for MatchConfig {
    fn from(args: MatchArgs) -> Self {
        Self {
            mode: if args.matches > 1 { GameMode::Batch } else { GameMode::AiVsAi },
            player1: args.p1,
            player2: args.p2,
            num_matches: args.matches,
            max_plies: args.max_plies,
            seed: args.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::try_from_args(["quoridor"]).unwrap();
        assert_eq!(config, MatchConfig::default());
        assert_eq!(config.mode, GameMode::AiVsAi);
        assert_eq!(config.player1, PlayerConfig::Ai { difficulty: Difficulty::Medium });
        assert_eq!(config.max_plies, 400);
    }

    #[test]
    fn test_full_command_line() {
        let args = [
            "quoridor", "--p1", "hard", "--p2", "Random", "--matches", "10", "--max-plies", "150", "--seed", "7",
        ];
        let config = MatchConfig::try_from_args(args).unwrap();

        assert_eq!(config.mode, GameMode::Batch);
        assert_eq!(config.player1, PlayerConfig::Ai { difficulty: Difficulty::Hard });
        assert_eq!(config.player2, PlayerConfig::Random);
        assert_eq!(config.num_matches, 10);
        assert_eq!(config.max_plies, 150);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_errors() {
        let kind = |args: &[&str]| MatchConfig::try_from_args(args.iter().copied()).unwrap_err().kind();

        assert_eq!(kind(&["quoridor", "--p1"]), ErrorKind::InvalidValue);
        assert_eq!(kind(&["quoridor", "--p2", "expert"]), ErrorKind::InvalidValue);
        assert_eq!(kind(&["quoridor", "--matches", "0"]), ErrorKind::ValueValidation);
        assert_eq!(kind(&["quoridor", "--fast"]), ErrorKind::UnknownArgument);
        assert_eq!(kind(&["quoridor", "--help"]), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        MatchArgs::command().debug_assert();
    }

    #[test]
    fn test_game_seeds_are_distinct() {
        let config = MatchConfig::default();
        let mut seen = std::collections::HashSet::new();
        for game in 0..50 {
            let seeds = config.game_seeds(game);
            assert!(seen.insert(seeds.player1));
            assert!(seen.insert(seeds.player2));
            assert!(seen.insert(seeds.fallback));
        }
    }

    #[test]
    fn test_fallback_seed_follows_base_seed() {
        let a = MatchConfig { seed: 1, ..MatchConfig::default() };
        let b = MatchConfig { seed: 12345, ..MatchConfig::default() };
        let fallbacks: Vec<u64> = (0..5).map(|game| b.game_seeds(game).fallback).collect();

        assert_ne!(a.game_seeds(0).fallback, b.game_seeds(0).fallback);
        assert!(fallbacks.windows(2).all(|w| w[0] != w[1]), "{:?}", fallbacks);
    }

    #[test]
    fn test_create_player_names() {
        assert_eq!(PlayerConfig::Random.create_player(1).name(), "Random");
        let ai = PlayerConfig::Ai { difficulty: Difficulty::Hard }.create_player(1);
        assert_eq!(ai.name(), "AI (Hard)");
    }
}
