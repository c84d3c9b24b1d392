use crate::types::RankingTable;

/// Cell texts that look like column headers rather than participant names.
pub const HEADER_WORDS: [&str; 6] = ["name", "player", "participant", "rank", "score", "points"];

const SCORE_SUFFIXES: [&str; 3] = ["points", "pts", "pt"];
const MAX_NAME_LEN: usize = 32;

/// Extracts name→score pairs from the federation ranking page. Works on the
/// tag-stripped cell texts of each table row: the first letters-only cell is
/// the name, the largest numeric cell is the score. Rows without a positive
/// score are dropped. Names are kept exactly as published (case-sensitive).
pub fn parse_rankings(body: &str) -> RankingTable {
    let mut table = RankingTable::new();

    for row in table_rows(body) {
        if row.len() < 2 {
            continue;
        }

        let Some(name) = row.iter().find(|cell| is_candidate_name(cell)) else {
            continue;
        };

        let score = row
            .iter()
            .filter(|cell| *cell != name)
            .filter_map(|cell| parse_score(cell))
            .max()
            .unwrap_or(0);

        if score > 0 {
            table.insert(name.clone(), score);
        }
    }

    table
}

// Rows split on <tr, cells on <td/<th; each cell reduced to its text content.
fn table_rows(body: &str) -> Vec<Vec<String>> {
    body.split("<tr")
        .skip(1)
        .map(|row| {
            row.split("<t")
                .skip(1)
                .filter(|chunk| chunk.starts_with('d') || chunk.starts_with('h'))
                .map(strip_tags)
                .filter(|text| !text.is_empty())
                .collect()
        })
        .collect()
}

fn strip_tags(fragment: &str) -> String {
    let mut text = String::new();
    let mut in_tag = true; // fragment starts inside the cell's own tag
    for c in fragment.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.trim().to_string()
}

fn is_candidate_name(text: &str) -> bool {
    let letters_only = text
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace());
    letters_only
        && (2..=MAX_NAME_LEN).contains(&text.chars().count())
        && !HEADER_WORDS.contains(&text.to_lowercase().as_str())
}

// Accepts "1,234", "1234 pts", "1,234 points". Anything else is not a score.
fn parse_score(text: &str) -> Option<u32> {
    let mut digits = text.trim().to_lowercase();
    for suffix in SCORE_SUFFIXES {
        if let Some(stripped) = digits.strip_suffix(suffix) {
            digits = stripped.trim().to_string();
            break;
        }
    }
    let digits: String = digits.chars().filter(|&c| c != ',').collect();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
