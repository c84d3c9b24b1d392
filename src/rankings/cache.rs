use super::source::RankingSource;
use crate::types::RankingTable;
use std::time::{Duration, Instant};

pub const CACHE_TTL: Duration = Duration::from_secs(600);

/// Outcome of a ranking lookup. `Unavailable` means the fetch could not run;
/// an empty `Table` means it ran and found nothing. Current callers treat
/// both as an empty mapping via `table()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Table(RankingTable),
    Unavailable,
}

impl Lookup {
    pub fn table(self) -> RankingTable {
        match self {
            Lookup::Table(table) => table,
            Lookup::Unavailable => RankingTable::new(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Lookup::Unavailable)
    }
}

/// Fixed-TTL cache in front of a ranking source. There is only one query, so
/// the cache is a single slot. A failed fetch degrades to an empty table
/// that occupies the slot for the full window.
pub struct CachedRankings<S: RankingSource> {
    source: S,
    ttl: Duration,
    slot: Option<(Instant, RankingTable)>,
}

impl<S: RankingSource> CachedRankings<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            ttl: CACHE_TTL,
            slot: None,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn lookup(&mut self) -> Lookup {
        if let Some((fetched_at, table)) = &self.slot {
            if fetched_at.elapsed() < self.ttl {
                return Lookup::Table(table.clone());
            }
        }

        match self.source.fetch() {
            Ok(table) => {
                self.slot = Some((Instant::now(), table.clone()));
                Lookup::Table(table)
            }
            Err(e) => {
                log::warn!("Ranking fetch failed: {e}");
                self.slot = Some((Instant::now(), RankingTable::new()));
                Lookup::Unavailable
            }
        }
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{CachedRankings, Lookup};
    use crate::rankings::source::RankingSource;
    use crate::types::{AppResult, RankingTable};
    use anyhow::anyhow;
    use std::cell::Cell;
    use std::time::Duration;

    struct CountingSource {
        fetches: Cell<usize>,
        fail: bool,
    }

    impl CountingSource {
        fn new(fail: bool) -> Self {
            Self {
                fetches: Cell::new(0),
                fail,
            }
        }
    }

    impl RankingSource for CountingSource {
        fn fetch(&self) -> AppResult<RankingTable> {
            self.fetches.set(self.fetches.get() + 1);
            if self.fail {
                return Err(anyhow!("connection refused"));
            }
            let mut table = RankingTable::new();
            table.insert("Kim".to_string(), 120);
            Ok(table)
        }
    }

    #[test]
    fn test_hit_within_ttl_skips_fetch() {
        let mut cache = CachedRankings::new(CountingSource::new(false));

        let first = cache.lookup().table();
        let second = cache.lookup().table();

        assert_eq!(first, second);
        assert_eq!(first.get("Kim"), Some(&120));
        assert_eq!(cache.source.fetches.get(), 1);
    }

    #[test]
    fn test_zero_ttl_always_refetches() {
        let mut cache = CachedRankings::new(CountingSource::new(false)).with_ttl(Duration::ZERO);

        cache.lookup();
        cache.lookup();

        assert_eq!(cache.source.fetches.get(), 2);
    }

    #[test]
    fn test_failure_degrades_and_occupies_slot() {
        let mut cache = CachedRankings::new(CountingSource::new(true));

        let lookup = cache.lookup();
        assert!(lookup.is_unavailable());
        assert!(lookup.table().is_empty());

        // The empty result is cached: the next lookup is a hit, not a retry.
        let second = cache.lookup();
        assert_eq!(second, Lookup::Table(RankingTable::new()));
        assert_eq!(cache.source.fetches.get(), 1);
    }

    #[test]
    fn test_invalidate_forces_refetch() {
        let mut cache = CachedRankings::new(CountingSource::new(false));

        cache.lookup();
        cache.invalidate();
        cache.lookup();

        assert_eq!(cache.source.fetches.get(), 2);
    }
}
