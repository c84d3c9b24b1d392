use super::constants::{BYE_NAME, BYE_SCORE_LABEL};
use crate::app_version;
use crate::roster::{Participant, Pool, NO_AFFILIATION};
use crate::types::BracketId;
use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::Display;

#[derive(
    Debug, Default, Clone, Copy, Display, Serialize, Deserialize, PartialEq, Eq, ValueEnum,
)]
pub enum GenerationMode {
    /// Seed by score, best first; ties keep their roster order.
    #[default]
    SkillOrdered,
    /// Seed by uniform shuffle.
    Random,
}

/// One seat of the 16-seed assignment: a real entrant or a bye.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Entrant {
    Player(Participant),
    Bye,
}

impl Entrant {
    pub fn name(&self) -> &str {
        match self {
            Entrant::Player(p) => &p.name,
            Entrant::Bye => BYE_NAME,
        }
    }

    pub fn affiliation(&self) -> &str {
        match self {
            Entrant::Player(p) => &p.affiliation,
            Entrant::Bye => NO_AFFILIATION,
        }
    }

    /// Display-only: byes never hold a numeric score.
    pub fn score_label(&self) -> String {
        match self {
            Entrant::Player(p) => p.score.to_string(),
            Entrant::Bye => BYE_SCORE_LABEL.to_string(),
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Entrant::Bye)
    }
}

impl fmt::Display for Entrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entrant::Player(p) => write!(
                f,
                "{} ({}/{})",
                p.name,
                p.affiliation,
                self.score_label()
            ),
            Entrant::Bye => write!(f, "{BYE_NAME}"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Match {
    pub label: String,
    pub home_seed: usize,
    pub away_seed: usize,
    pub home: Entrant,
    pub away: Entrant,
}

impl Match {
    pub fn has_bye(&self) -> bool {
        self.home.is_bye() || self.away.is_bye()
    }
}

/// A generated first-round bracket. Regenerating a pool replaces its
/// previous bracket wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bracket {
    pub id: BracketId,
    pub pool: Pool,
    pub mode: GenerationMode,
    pub matches: Vec<Match>,
    pub generated_at: DateTime<Local>,
    app_version: [usize; 3],
}

impl Bracket {
    pub fn new(pool: Pool, mode: GenerationMode, matches: Vec<Match>) -> Self {
        Self {
            id: BracketId::new_v4(),
            pool,
            mode,
            matches,
            generated_at: Local::now(),
            app_version: app_version(),
        }
    }

    pub fn title(&self) -> String {
        format!("{} pool bracket", self.pool)
    }

    /// File-friendly stem for exports, e.g. "bracket_ranked".
    pub fn slug(&self) -> String {
        format!("bracket_{}", self.pool.to_string().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::{Bracket, Entrant, GenerationMode, Match};
    use crate::roster::{Participant, Pool};

    #[test]
    fn test_entrant_labels() {
        let player = Entrant::Player(Participant::new("Kim", Some("Seoul Baggers")).with_score(120));
        assert_eq!(player.to_string(), "Kim (Seoul Baggers/120)");
        assert_eq!(player.score_label(), "120");

        let bye = Entrant::Bye;
        assert_eq!(bye.name(), "BYE");
        assert_eq!(bye.affiliation(), "-");
        assert_eq!(bye.score_label(), "-");
        assert!(bye.is_bye());
    }

    #[test]
    fn test_match_bye_detection() {
        let m = Match {
            label: "S1 vs S16".to_string(),
            home_seed: 1,
            away_seed: 16,
            home: Entrant::Player(Participant::new("Kim", None)),
            away: Entrant::Bye,
        };
        assert!(m.has_bye());
    }

    #[test]
    fn test_bracket_metadata() {
        let bracket = Bracket::new(Pool::Ranked, GenerationMode::SkillOrdered, vec![]);
        assert_eq!(bracket.title(), "Ranked pool bracket");
        assert_eq!(bracket.slug(), "bracket_ranked");

        let other = Bracket::new(Pool::Ranked, GenerationMode::SkillOrdered, vec![]);
        assert_ne!(bracket.id, other.id);
    }
}
