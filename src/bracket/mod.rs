pub mod constants;
pub mod lines;
pub mod seeding;
pub mod types;

pub use constants::{BRACKET_SIZE, FIRST_ROUND_MATCHES, FIRST_ROUND_PAIRINGS, MIN_ENTRANTS};
pub use lines::bracket_lines;
pub use seeding::generate;
pub use types::{Bracket, Entrant, GenerationMode, Match};
