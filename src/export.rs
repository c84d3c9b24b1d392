use crate::bracket::types::Bracket;
use crate::image::render_bracket;
use crate::types::AppResult;
use image::ImageFormat;
use itertools::Itertools;
use std::io::Cursor;
use std::path::{Path, PathBuf};

pub const TABULAR_HEADERS: [&str; 7] = [
    "Match", "Player 1", "Team 1", "Score 1", "Player 2", "Team 2", "Score 2",
];

/// Tabular export of the match list, one row per match in match order.
pub fn matches_csv(bracket: &Bracket) -> Vec<u8> {
    let header = TABULAR_HEADERS.iter().map(|h| csv_field(h)).join(",");

    let rows = bracket.matches.iter().map(|m| {
        [
            m.label.clone(),
            m.home.name().to_string(),
            m.home.affiliation().to_string(),
            m.home.score_label(),
            m.away.name().to_string(),
            m.away.affiliation().to_string(),
            m.away.score_label(),
        ]
        .iter()
        .map(|field| csv_field(field))
        .join(",")
    });

    let mut out = header;
    for row in rows {
        out.push('\n');
        out.push_str(&row);
    }
    out.push('\n');
    out.into_bytes()
}

fn csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Pretty-printed JSON of the full bracket record.
pub fn bracket_json(bracket: &Bracket) -> AppResult<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(bracket)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// PNG of the rendered bracket diagram.
pub fn bracket_png(bracket: &Bracket) -> AppResult<Vec<u8>> {
    let img = render_bracket(bracket);
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Writes all three exports next to each other and returns their paths.
pub fn save_exports(bracket: &Bracket, dir: &Path) -> AppResult<Vec<PathBuf>> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }

    let stem = bracket.slug();
    let mut written = Vec::with_capacity(3);
    for (extension, bytes) in [
        ("csv", matches_csv(bracket)),
        ("json", bracket_json(bracket)?),
        ("png", bracket_png(bracket)?),
    ] {
        let path = dir.join(format!("{stem}.{extension}"));
        std::fs::write(&path, bytes)?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::{bracket_json, bracket_png, matches_csv, save_exports};
    use crate::bracket::seeding::generate;
    use crate::bracket::types::{Bracket, GenerationMode};
    use crate::roster::{Participant, Pool};
    use crate::types::AppResult;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn bracket() -> AppResult<Bracket> {
        let pool = vec![
            Participant::new("Kim, Dayeon", Some("Seoul Baggers")).with_score(120),
            Participant::new("Lee Jiho", None).with_score(80),
        ];
        let rng = &mut ChaCha8Rng::seed_from_u64(0);
        let matches = generate(&pool, GenerationMode::SkillOrdered, rng)?;
        Ok(Bracket::new(Pool::All, GenerationMode::SkillOrdered, matches))
    }

    #[test]
    fn test_csv_shape_and_quoting() -> AppResult<()> {
        let csv = String::from_utf8(matches_csv(&bracket()?))?;
        let lines: Vec<&str> = csv.trim_end().lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(
            lines[0],
            "Match,Player 1,Team 1,Score 1,Player 2,Team 2,Score 2"
        );
        assert!(lines[1].starts_with("S1 vs S16,\"Kim, Dayeon\",Seoul Baggers,120,BYE,-,-"));

        Ok(())
    }

    #[test]
    fn test_json_round_trips() -> AppResult<()> {
        let bracket = bracket()?;
        let bytes = bracket_json(&bracket)?;
        let parsed: Bracket = serde_json::from_slice(&bytes)?;
        assert_eq!(parsed, bracket);
        Ok(())
    }

    #[test]
    fn test_png_magic() -> AppResult<()> {
        let bytes = bracket_png(&bracket()?)?;
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']);
        Ok(())
    }

    #[test]
    fn test_save_exports() -> AppResult<()> {
        let dir = std::env::temp_dir().join("baggo_export_test");
        let written = save_exports(&bracket()?, &dir)?;

        assert_eq!(written.len(), 3);
        for path in &written {
            assert!(path.exists());
        }
        std::fs::remove_dir_all(&dir)?;

        Ok(())
    }
}
