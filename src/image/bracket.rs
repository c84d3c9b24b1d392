use super::glyphs::{draw_text, text_width};
use crate::bracket::types::{Bracket, Entrant, Match};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_line_segment_mut;

pub const CANVAS_WIDTH: u32 = 640;
pub const CANVAS_HEIGHT: u32 = 880;

const TOP_MARGIN: u32 = 80;
const MATCH_STRIDE: u32 = 96;
const SIDE_OFFSET: f32 = 20.0;
const LINE_X0: f32 = 330.0;
const LINE_X1: f32 = 450.0;
const STUB_X1: f32 = 500.0;
const TEXT_RIGHT_EDGE: i32 = 320;
const TEXT_SCALE: u32 = 2;
const LABEL_SCALE: u32 = 1;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const INK: Rgba<u8> = Rgba([25, 25, 25, 255]);
const BYE_INK: Rgba<u8> = Rgba([30, 60, 200, 255]);
const LABEL_INK: Rgba<u8> = Rgba([130, 130, 130, 255]);

/// Draws the first-round bracket diagram: one slot per match at a fixed
/// vertical position, home entrant stacked above away entrant, connector
/// lines joining each pair into a stub toward the (out-of-scope) next round.
/// Bye matches are inked blue with a star on the advancing side.
pub fn render_bracket(bracket: &Bracket) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);

    let title = bracket.title();
    let title_x = (CANVAS_WIDTH as i32 - text_width(&title, TEXT_SCALE) as i32) / 2;
    draw_text(&mut img, &title, title_x.max(0), 24, TEXT_SCALE, INK);

    for (idx, m) in bracket.matches.iter().enumerate() {
        draw_match(&mut img, idx, m);
    }

    img
}

fn draw_match(img: &mut RgbaImage, idx: usize, m: &Match) {
    let yc = (TOP_MARGIN + idx as u32 * MATCH_STRIDE) as f32;
    let y_home = yc - SIDE_OFFSET;
    let y_away = yc + SIDE_OFFSET;
    let ink = if m.has_bye() { BYE_INK } else { INK };

    // Home rule carries the bye highlight, the rest of the slot stays plain.
    draw_line_segment_mut(img, (LINE_X0, y_home), (LINE_X1, y_home), ink);
    draw_line_segment_mut(img, (LINE_X0, y_away), (LINE_X1, y_away), INK);
    draw_line_segment_mut(img, (LINE_X1, y_home), (LINE_X1, y_away), INK);
    draw_line_segment_mut(img, (LINE_X1, yc), (STUB_X1, yc), INK);

    draw_seat(img, &seat_text(m, true), y_home, ink);
    draw_seat(img, &seat_text(m, false), y_away, INK);

    let label = format!("M{}", idx + 1);
    draw_text(
        img,
        &label,
        LINE_X1 as i32 + 8,
        yc as i32 - 14,
        LABEL_SCALE,
        LABEL_INK,
    );
}

fn draw_seat(img: &mut RgbaImage, text: &str, y_line: f32, color: Rgba<u8>) {
    let x = TEXT_RIGHT_EDGE - text_width(text, TEXT_SCALE) as i32;
    let y = y_line as i32 - 18;
    draw_text(img, text, x.max(0), y, TEXT_SCALE, color);
}

fn seat_text(m: &Match, home_side: bool) -> String {
    let entrant = if home_side { &m.home } else { &m.away };
    match entrant {
        Entrant::Player(_) if home_side && m.away.is_bye() => format!("* {entrant}"),
        Entrant::Player(_) => entrant.to_string(),
        Entrant::Bye => "(BYE)".to_string(),
    }
}
