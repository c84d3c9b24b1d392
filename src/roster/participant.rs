use rand::{seq::IndexedRandom, Rng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel affiliation for participants without a team.
pub const NO_AFFILIATION: &str = "-";

const DEMO_SCORE_AVG: f32 = 800.0;
const DEMO_SCORE_STD: f32 = 350.0;

const DEMO_FIRST_NAMES: [&str; 12] = [
    "Kim", "Lee", "Park", "Choi", "Jung", "Kang", "Cho", "Yoon", "Jang", "Lim", "Han", "Oh",
];
const DEMO_LAST_NAMES: [&str; 12] = [
    "Minjun", "Seojun", "Doyun", "Jiho", "Siwoo", "Jiyu", "Seoyeon", "Haeun", "Dayeon", "Sua",
    "Eunwoo", "Yejun",
];
const DEMO_CLUBS: [&str; 6] = [
    "Seoul Baggers",
    "Busan Tossers",
    "Incheon Aces",
    "Daegu Corners",
    "Gwangju Slide",
    NO_AFFILIATION,
];

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub affiliation: String,
    pub score: u32,
}

impl Participant {
    /// Builds a participant with score 0. Names are trimmed; a missing or
    /// blank affiliation becomes the `NO_AFFILIATION` sentinel.
    pub fn new(name: &str, affiliation: Option<&str>) -> Self {
        let affiliation = match affiliation.map(str::trim) {
            Some(team) if !team.is_empty() => team.to_string(),
            _ => NO_AFFILIATION.to_string(),
        };

        Self {
            name: name.trim().to_string(),
            affiliation,
            score: 0,
        }
    }

    pub fn with_score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    pub fn is_ranked(&self) -> bool {
        self.score > 0
    }

    /// Random entrant for demo rosters and tests. Roughly half come out
    /// unranked so a demo roster exercises both pools.
    pub fn random(rng: &mut impl Rng) -> Self {
        let first = *DEMO_FIRST_NAMES
            .choose(rng)
            .expect("Name pool should not be empty");
        let last = *DEMO_LAST_NAMES
            .choose(rng)
            .expect("Name pool should not be empty");
        let club = *DEMO_CLUBS
            .choose(rng)
            .expect("Club pool should not be empty");

        let score = if rng.random_bool(0.5) {
            0
        } else {
            Normal::new(DEMO_SCORE_AVG, DEMO_SCORE_STD)
                .expect("Normal parameters should be valid")
                .sample(rng)
                .max(1.0) as u32
        };

        Self::new(&format!("{first} {last}"), Some(club)).with_score(score)
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.name, self.affiliation, self.score)
    }
}
