use super::types::{Bracket, Entrant, Match};
use unicode_width::UnicodeWidthStr;

const COL_WIDTH: usize = 40;
const BYE_SEAT: &str = "(bye)";
const BYE_STAR: &str = "★ ";

/// Renders a bracket as plain text, one three-line block per match:
/// home rule line, match label, away rule line. The terminal preview of the
/// bracket diagram.
pub fn bracket_lines(bracket: &Bracket) -> Vec<String> {
    let mut lines = Vec::with_capacity(2 + bracket.matches.len() * 4);
    lines.push(bracket.title());
    lines.push(String::new());

    for (idx, m) in bracket.matches.iter().enumerate() {
        lines.push(format!("{}╗", rule_line(&seat_text(m, true))));
        lines.push(center_line(idx + 1, m));
        lines.push(format!("{}╝", rule_line(&seat_text(m, false))));
        lines.push(String::new());
    }

    lines
}

fn seat_text(m: &Match, home_side: bool) -> String {
    let entrant = if home_side { &m.home } else { &m.away };
    match entrant {
        // The home seat gets a star when its opponent sits out.
        Entrant::Player(_) if home_side && m.away.is_bye() => {
            format!("{BYE_STAR}{entrant}")
        }
        Entrant::Player(_) => entrant.to_string(),
        Entrant::Bye => BYE_SEAT.to_string(),
    }
}

fn center_line(match_number: usize, m: &Match) -> String {
    let text = format!("  M{match_number} · {}", m.label);
    let fill = COL_WIDTH.saturating_sub(text.width());
    format!("{text}{}╠═", " ".repeat(fill))
}

fn rule_line(text: &str) -> String {
    let fill = COL_WIDTH.saturating_sub(text.width() + 4);
    format!("══ {text} {}", "═".repeat(fill))
}
