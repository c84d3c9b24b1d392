use super::participant::Participant;

/// Partitions a pool into (ranked, unranked) on `score > 0`, preserving the
/// relative order of both halves. Every participant lands in exactly one
/// output.
pub fn split(all: &[Participant]) -> (Vec<Participant>, Vec<Participant>) {
    all.iter().cloned().partition(Participant::is_ranked)
}

#[cfg(test)]
mod tests {
    use super::split;
    use crate::roster::participant::Participant;

    fn entrant(name: &str, score: u32) -> Participant {
        Participant::new(name, None).with_score(score)
    }

    #[test]
    fn test_partition_law() {
        let all = vec![
            entrant("A", 300),
            entrant("B", 0),
            entrant("C", 120),
            entrant("D", 0),
            entrant("E", 1),
        ];

        let (ranked, unranked) = split(&all);

        assert_eq!(ranked.len() + unranked.len(), all.len());
        assert!(ranked.iter().all(|p| p.score > 0));
        assert!(unranked.iter().all(|p| p.score == 0));
        for p in &all {
            let in_ranked = ranked.contains(p);
            let in_unranked = unranked.contains(p);
            assert!(in_ranked != in_unranked);
        }
    }

    #[test]
    fn test_order_preserved() {
        let all = vec![
            entrant("A", 300),
            entrant("B", 0),
            entrant("C", 120),
            entrant("D", 0),
        ];

        let (ranked, unranked) = split(&all);

        let ranked_names: Vec<&str> = ranked.iter().map(|p| p.name.as_str()).collect();
        let unranked_names: Vec<&str> = unranked.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(ranked_names, vec!["A", "C"]);
        assert_eq!(unranked_names, vec!["B", "D"]);
    }

    #[test]
    fn test_empty_pool() {
        let (ranked, unranked) = split(&[]);
        assert!(ranked.is_empty());
        assert!(unranked.is_empty());
    }
}
