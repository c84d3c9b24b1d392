/// Fixed bracket capacity. The topology is a 16-seed single-elimination
/// first round; extra entrants are dropped, empty seats become byes.
pub const BRACKET_SIZE: usize = 16;

pub const FIRST_ROUND_MATCHES: usize = 8;

pub const MIN_ENTRANTS: usize = 2;

/// Standard 16-seed pairing table, in match order. Keeps the two top seeds
/// apart until a hypothetical final. A fixed constant of the topology,
/// never derived.
pub const FIRST_ROUND_PAIRINGS: [(usize, usize); FIRST_ROUND_MATCHES] = [
    (1, 16),
    (8, 9),
    (4, 13),
    (5, 12),
    (2, 15),
    (7, 10),
    (3, 14),
    (6, 11),
];

pub const BYE_NAME: &str = "BYE";

/// Display-only score placeholder for bye seats.
pub const BYE_SCORE_LABEL: &str = "-";
