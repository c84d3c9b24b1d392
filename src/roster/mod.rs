use crate::types::RankingTable;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

pub mod enrich;
pub mod ingest;
pub mod participant;
pub mod split;

pub use ingest::RawTable;
pub use participant::{Participant, NO_AFFILIATION};

#[derive(
    Debug, Default, Clone, Copy, Display, Serialize, Deserialize, PartialEq, Eq, Hash, EnumIter,
    ValueEnum,
)]
pub enum Pool {
    #[default]
    All,
    Ranked,
    Unranked,
}

/// Session roster state: three independently editable pools. Loading replaces
/// the All pool wholesale; Ranked and Unranked are derived on demand by
/// `split_pools`.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct RosterStore {
    all: Vec<Participant>,
    ranked: Vec<Participant>,
    unranked: Vec<Participant>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the All pool with participants loaded from raw roster rows
    /// and returns how many were loaded.
    pub fn load(&mut self, table: &RawTable) -> usize {
        self.all = ingest::load_participants(table);
        log::info!("Loaded {} participants into the All pool", self.all.len());
        self.all.len()
    }

    pub fn reset(&mut self) {
        self.all.clear();
        self.ranked.clear();
        self.unranked.clear();
    }

    pub fn pool(&self, pool: Pool) -> &[Participant] {
        match pool {
            Pool::All => &self.all,
            Pool::Ranked => &self.ranked,
            Pool::Unranked => &self.unranked,
        }
    }

    /// Wholesale replacement of a single pool, the "editable table" surface.
    pub fn set_pool(&mut self, pool: Pool, participants: Vec<Participant>) {
        match pool {
            Pool::All => self.all = participants,
            Pool::Ranked => self.ranked = participants,
            Pool::Unranked => self.unranked = participants,
        }
    }

    /// Overwrites All-pool scores from the lookup, returning the update count.
    pub fn enrich(&mut self, lookup: &RankingTable) -> usize {
        enrich::enrich(&mut self.all, lookup)
    }

    /// Re-derives Ranked and Unranked from All and returns their sizes.
    pub fn split_pools(&mut self) -> (usize, usize) {
        let (ranked, unranked) = split::split(&self.all);
        self.ranked = ranked;
        self.unranked = unranked;
        (self.ranked.len(), self.unranked.len())
    }
}
