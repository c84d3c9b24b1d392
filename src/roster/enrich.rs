use super::participant::Participant;
use crate::types::RankingTable;

/// Overwrites scores for every participant whose name appears in the lookup
/// (exact, case-sensitive match) and returns the number updated. Later calls
/// always replace prior scores. Duplicate roster names sharing a lookup entry
/// are all updated identically.
pub fn enrich(pool: &mut [Participant], lookup: &RankingTable) -> usize {
    let mut updated = 0;
    for participant in pool.iter_mut() {
        if let Some(&score) = lookup.get(&participant.name) {
            participant.score = score;
            updated += 1;
        }
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::enrich;
    use crate::roster::participant::Participant;
    use crate::types::RankingTable;

    #[test]
    fn test_overwrite_and_untouched() {
        let mut pool = vec![
            Participant::new("Kim", None),
            Participant::new("Lee", None).with_score(40),
        ];
        let mut lookup = RankingTable::new();
        lookup.insert("Kim".to_string(), 120);

        let updated = enrich(&mut pool, &lookup);

        assert_eq!(updated, 1);
        assert_eq!(pool[0].score, 120);
        assert_eq!(pool[1].score, 40);
    }

    #[test]
    fn test_replaces_rather_than_accumulates() {
        let mut pool = vec![Participant::new("Kim", None).with_score(500)];
        let mut lookup = RankingTable::new();
        lookup.insert("Kim".to_string(), 120);

        enrich(&mut pool, &lookup);
        assert_eq!(pool[0].score, 120);

        enrich(&mut pool, &lookup);
        assert_eq!(pool[0].score, 120);
    }

    #[test]
    fn test_names_match_case_sensitively() {
        let mut pool = vec![Participant::new("kim", None)];
        let mut lookup = RankingTable::new();
        lookup.insert("Kim".to_string(), 120);

        assert_eq!(enrich(&mut pool, &lookup), 0);
        assert_eq!(pool[0].score, 0);
    }

    #[test]
    fn test_duplicate_names_all_updated() {
        let mut pool = vec![
            Participant::new("Kim", Some("Seoul Baggers")),
            Participant::new("Kim", Some("Busan Tossers")),
        ];
        let mut lookup = RankingTable::new();
        lookup.insert("Kim".to_string(), 120);

        assert_eq!(enrich(&mut pool, &lookup), 2);
        assert!(pool.iter().all(|p| p.score == 120));
    }

    #[test]
    fn test_empty_lookup_is_a_noop() {
        let mut pool = vec![Participant::new("Kim", None)];
        assert_eq!(enrich(&mut pool, &RankingTable::new()), 0);
    }
}
