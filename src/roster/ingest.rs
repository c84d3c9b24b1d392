use super::participant::Participant;

/// Header aliases that identify the participant-name column.
pub const NAME_ALIASES: [&str; 4] = ["name", "player", "participant", "entrant"];

/// Header aliases that identify the affiliation column, in priority order.
pub const AFFILIATION_ALIASES: [&str; 4] = ["team", "club", "affiliation", "squad"];

/// Raw tabular roster data: one header row plus string cells.
#[derive(Debug, Default, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Parses delimited text. The first non-empty line is the header row.
    pub fn from_delimited(text: &str, delimiter: char) -> Self {
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());

        let headers = match lines.next() {
            Some(line) => split_cells(line, delimiter),
            None => return Self::default(),
        };
        let rows = lines.map(|line| split_cells(line, delimiter)).collect();

        Self { headers, rows }
    }

    fn name_column(&self) -> Option<usize> {
        self.headers.iter().position(|header| {
            let header = header.trim().to_lowercase();
            NAME_ALIASES.iter().any(|alias| header.contains(alias))
        })
    }

    // The alias list is scanned in priority order, so a "Team" column wins
    // over a "Club" column no matter how the headers are arranged.
    fn affiliation_column(&self) -> Option<usize> {
        for alias in AFFILIATION_ALIASES {
            let found = self
                .headers
                .iter()
                .position(|header| header.trim().to_lowercase().contains(alias));
            if found.is_some() {
                return found;
            }
        }
        None
    }
}

fn split_cells(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter)
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Converts raw roster rows into participants. Scores are always initialized
/// to 0, even when the input carries a score-like column. When no name column
/// can be identified the result is empty, which callers surface as
/// "0 participants loaded" rather than an error.
pub fn load_participants(table: &RawTable) -> Vec<Participant> {
    let Some(name_col) = table.name_column() else {
        log::warn!(
            "No name column among headers {:?}, loading no participants",
            table.headers
        );
        return vec![];
    };
    let affiliation_col = table.affiliation_column();

    table
        .rows
        .iter()
        .filter_map(|row| {
            let name = row.get(name_col)?;
            if name.trim().is_empty() {
                return None;
            }
            let affiliation = affiliation_col.and_then(|col| row.get(col).map(String::as_str));
            Some(Participant::new(name, affiliation))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{load_participants, RawTable};
    use crate::roster::participant::NO_AFFILIATION;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_alias_resolution() {
        let table = table(
            &["No.", "Player Name", "Club"],
            &[&["1", "Kim Dayeon", "Seoul Baggers"], &["2", "Lee Jiho", ""]],
        );
        let participants = load_participants(&table);

        assert_eq!(participants.len(), 2);
        assert_eq!(participants[0].name, "Kim Dayeon");
        assert_eq!(participants[0].affiliation, "Seoul Baggers");
        assert_eq!(participants[1].affiliation, NO_AFFILIATION);
    }

    #[test]
    fn test_affiliation_priority_order() {
        // "Team" outranks "Club" even when "Club" appears first.
        let table = table(
            &["Club", "Name", "Team"],
            &[&["Old Club", "Kim Dayeon", "New Team"]],
        );
        let participants = load_participants(&table);
        assert_eq!(participants[0].affiliation, "New Team");
    }

    #[test]
    fn test_scores_forced_to_zero() {
        let table = table(
            &["Name", "Team", "Score"],
            &[&["Kim Dayeon", "Seoul Baggers", "1200"]],
        );
        let participants = load_participants(&table);
        assert_eq!(participants[0].score, 0);
    }

    #[test]
    fn test_missing_name_column_loads_nothing() {
        let table = table(&["No.", "Club"], &[&["1", "Seoul Baggers"]]);
        assert!(load_participants(&table).is_empty());
    }

    #[test]
    fn test_blank_names_skipped() {
        let table = table(&["Name"], &[&["Kim Dayeon"], &["   "], &[""]]);
        assert_eq!(load_participants(&table).len(), 1);
    }

    #[test]
    fn test_from_delimited() {
        let text = "Name,Team\nKim Dayeon,Seoul Baggers\n\nLee Jiho,\n";
        let table = RawTable::from_delimited(text, ',');

        assert_eq!(table.headers, vec!["Name", "Team"]);
        assert_eq!(table.rows.len(), 2);

        let participants = load_participants(&table);
        assert_eq!(participants.len(), 2);
        assert_eq!(participants[1].affiliation, NO_AFFILIATION);
    }
}
