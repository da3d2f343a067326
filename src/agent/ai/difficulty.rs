//! Difficulty levels and the search parameters behind them
//!
//! Every knob the search reads lives in [`SearchProfile`]; a [`Difficulty`]
//! is only a name for one of three fixed profiles. Nothing in the search
//! compares difficulty levels directly.
//!
//! # Difficulty Levels
//!
//! - **Easy**: depth 1, base evaluation, random move sampling, early cutoffs
//!   and noisy leaf scores. Deliberately beatable.
//! - **Medium**: depth 2, blocking-oriented evaluation, deterministic.
//! - **Hard**: depth 3, advanced evaluation with route flexibility, fewer but
//!   better wall candidates.

use std::fmt;
use std::str::FromStr;

/// Which scoring function the search uses at its leaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationTier {
    /// Path-distance race with progress, centre and late wall economy terms
    Base,
    /// Weighs slowing the opponent over advancing
    Blocking,
    /// Adds route flexibility and a phase-dependent wall economy
    Advanced,
}

/// Search parameters for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchProfile {
    /// Plies searched below each root candidate
    pub depth: u8,
    pub evaluation: EvaluationTier,
    /// Pawn moves examined per interior node (`None` = all of them)
    pub move_sample: Option<usize>,
    /// Chance an interior node is scored on the spot instead of expanded
    pub early_cutoff_probability: f64,
    /// Leaf scores get a uniform offset in `-noise..=noise`
    pub evaluation_noise: i32,
    /// Chance the root also considers wall placements
    pub wall_probability: f64,
    /// Same, used while the opponent is within `urgency_distance` of its goal
    pub urgent_wall_probability: f64,
    pub urgency_distance: u32,
    /// Steps of the opponent's shortest path inspected for wall slots
    pub path_segments: usize,
    /// Wall candidates handed to the search
    pub max_wall_candidates: usize,
    /// Detour depth for route flexibility (advanced evaluation only)
    pub flexibility_depth: u8,
    /// Hard cap on nodes per decision
    pub node_budget: Option<u64>,
}

/// AI difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn profile(&self) -> SearchProfile {
        match self {
            Difficulty::Easy => SearchProfile {
                depth: 1,
                evaluation: EvaluationTier::Base,
                move_sample: Some(2),
                early_cutoff_probability: 0.15,
                evaluation_noise: 120,
                wall_probability: 0.25,
                urgent_wall_probability: 0.5,
                urgency_distance: 3,
                path_segments: 8,
                max_wall_candidates: 2,
                flexibility_depth: 0,
                node_budget: Some(50_000),
            },
            Difficulty::Medium => SearchProfile {
                depth: 2,
                evaluation: EvaluationTier::Blocking,
                move_sample: None,
                early_cutoff_probability: 0.0,
                evaluation_noise: 0,
                wall_probability: 0.5,
                urgent_wall_probability: 0.8,
                urgency_distance: 4,
                path_segments: 6,
                max_wall_candidates: 4,
                flexibility_depth: 0,
                node_budget: Some(200_000),
            },
            Difficulty::Hard => SearchProfile {
                depth: 3,
                evaluation: EvaluationTier::Advanced,
                move_sample: None,
                early_cutoff_probability: 0.0,
                evaluation_noise: 0,
                wall_probability: 0.6,
                urgent_wall_probability: 0.95,
                urgency_distance: 4,
                path_segments: 4,
                max_wall_candidates: 5,
                flexibility_depth: 4,
                node_budget: Some(500_000),
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown difficulty name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}
