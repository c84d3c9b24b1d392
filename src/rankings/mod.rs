pub mod cache;
pub mod parse;
pub mod source;

pub use cache::{CachedRankings, Lookup, CACHE_TTL};
pub use parse::parse_rankings;
pub use source::{FederationSource, RankingSource, FETCH_TIMEOUT, RANKINGS_URL};
