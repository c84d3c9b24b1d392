pub mod bracket;
pub mod glyphs;

pub use bracket::{render_bracket, CANVAS_HEIGHT, CANVAS_WIDTH};
