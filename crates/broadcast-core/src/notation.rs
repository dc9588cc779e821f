//! Decoding of the small notation fragments the broadcast API hands out:
//! UCI-style last moves, the side-to-move field of a FEN, result strings.
//!
//! Malformed input never errors; it decodes to `None`.

use serde::{Serialize, Serializer};
use shakmaty::Color;

/// Origin and destination squares of the last move, e.g. `("e2", "e4")`.
/// Serializes as a two-element array, the shape chessground expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LastMove(pub String, pub String);

impl LastMove {
    pub fn orig(&self) -> &str {
        &self.0
    }

    pub fn dest(&self) -> &str {
        &self.1
    }
}

/// Splits a last-move string into its origin and destination squares.
/// Anything after the fourth character (promotion piece) is ignored.
pub fn parse_last_move(mv: &str) -> Option<LastMove> {
    let chars: Vec<char> = mv.chars().collect();
    if chars.len() < 4 {
        return None;
    }
    Some(LastMove(
        chars[0..2].iter().collect(),
        chars[2..4].iter().collect(),
    ))
}

/// Side to move from the second FEN field: `"w"` is white, any other value black.
pub fn side_to_move(fen: &str) -> Option<Color> {
    // FEN: "pieces side castling enpassant halfmove fullmove"
    let side = fen.split(' ').nth(1)?;
    if side == "w" {
        Some(Color::White)
    } else {
        Some(Color::Black)
    }
}

/// The side in check, given the API's check flag. Only the side to move can be in check.
pub fn check_side(fen: Option<&str>, check: Option<&str>) -> Option<Color> {
    match (fen, check) {
        (Some(fen), Some(_)) => side_to_move(fen),
        _ => None,
    }
}

/// Human-readable result: `"1-0"` becomes `"1 - 0"`. Only the first dash is spaced.
pub fn result_label(status: &str) -> String {
    status.replacen('-', " - ", 1)
}

pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

/// serde helper for `Option<Color>` fields, written as `"white"` / `"black"` / `null`.
pub fn serialize_side<S: Serializer>(side: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error> {
    match side {
        Some(color) => serializer.serialize_some(color_name(*color)),
        None => serializer.serialize_none(),
    }
}
