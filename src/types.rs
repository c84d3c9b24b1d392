use std::collections::HashMap;

pub type AppResult<T> = Result<T, anyhow::Error>;

pub type BracketId = uuid::Uuid;

/// Federation ranking scores keyed by exact participant name.
pub type RankingTable = HashMap<String, u32>;
