use crate::bracket::seeding;
use crate::bracket::types::{Bracket, GenerationMode};
use crate::rankings::{CachedRankings, FederationSource};
use crate::roster::{Participant, Pool, RawTable, RosterStore};
use crate::types::AppResult;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// Organizer session state. Owns the roster pools, the cached ranking
/// lookup, the RNG, and the last generated bracket per pool. All operations
/// run to completion before the next is accepted; nothing here is shared.
pub struct App {
    pub store: RosterStore,
    rankings: CachedRankings<FederationSource>,
    rng: ChaCha8Rng,
    brackets: HashMap<Pool, Bracket>,
}

impl App {
    pub fn new(seed: Option<u64>) -> AppResult<Self> {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };

        Ok(Self {
            store: RosterStore::new(),
            rankings: CachedRankings::new(FederationSource::new()?),
            rng,
            brackets: HashMap::new(),
        })
    }

    /// Replaces the All pool from raw roster rows, returning the count.
    pub fn load_roster(&mut self, table: &RawTable) -> usize {
        self.store.load(table)
    }

    /// Fills the All pool with random entrants, for demos and dry runs.
    pub fn load_demo_roster(&mut self, count: usize) -> usize {
        let entrants = (0..count)
            .map(|_| Participant::random(&mut self.rng))
            .collect();
        self.store.set_pool(Pool::All, entrants);
        info!("Loaded {count} demo participants into the All pool");
        count
    }

    /// Looks up federation rankings (cached, time-bounded) and overwrites
    /// matching All-pool scores. Returns how many participants were updated;
    /// an unavailable lookup degrades to 0.
    pub fn fetch_rankings(&mut self) -> usize {
        let lookup = self.rankings.lookup();
        if lookup.is_unavailable() {
            info!("Ranking lookup unavailable, no scores updated");
            return 0;
        }

        let updated = self.store.enrich(&lookup.table());
        info!("Updated scores for {updated} participants from federation rankings");
        updated
    }

    /// Re-derives the Ranked and Unranked pools, returning their sizes.
    pub fn split_pools(&mut self) -> (usize, usize) {
        let (ranked, unranked) = self.store.split_pools();
        info!("Split pools: {ranked} ranked / {unranked} unranked");
        (ranked, unranked)
    }

    /// Generates a fresh bracket for a pool, replacing any previous one.
    /// The Unranked pool always shuffles: its members have no score to order
    /// by, so skill seeding is never honored there.
    pub fn generate(&mut self, pool: Pool, mode: GenerationMode) -> AppResult<&Bracket> {
        let mode = if pool == Pool::Unranked {
            GenerationMode::Random
        } else {
            mode
        };

        let matches = seeding::generate(self.store.pool(pool), mode, &mut self.rng)?;
        info!("Generated {mode} bracket for the {pool} pool");

        self.brackets.insert(pool, Bracket::new(pool, mode, matches));
        Ok(self
            .brackets
            .get(&pool)
            .expect("Bracket was just stored for this pool"))
    }

    pub fn bracket(&self, pool: Pool) -> Option<&Bracket> {
        self.brackets.get(&pool)
    }

    /// Clears every pool and all generated brackets.
    pub fn reset(&mut self) {
        self.store.reset();
        self.brackets.clear();
        self.rankings.invalidate();
    }
}
