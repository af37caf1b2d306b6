// Game-file collaborators: tag lookup, movetext isolation, reading from disk.
use crate::error::ReplayError;
use crate::replay::{replay_with, Replay, ReplayOptions};
use anyhow::{Context, Result};
use std::path::Path;

pub const TAG_PLACEHOLDER: &str = "NOT GIVEN";

/// Tags printed in a game report, in roster order.
pub const SEVEN_TAG_ROSTER: [&str; 7] = ["Event", "Site", "Date", "Round", "White", "Black", "Result"];

/// Value of the `[Name "value"]` tag pair, if present.
pub fn tag_value<'a>(game: &'a str, name: &str) -> Option<&'a str> {
    let open = format!("[{name} \"");
    let start = game.find(&open)? + open.len();
    let rest = &game[start..];
    // the value ends at the last quote before this tag's closing bracket
    let close = rest.find(|c: char| c == ']' || c == '\n').unwrap_or(rest.len());
    let tag = &rest[..close];
    let end = tag.rfind('"')?;
    Some(&tag[..end])
}

pub fn tag_or_placeholder<'a>(game: &'a str, name: &str) -> &'a str {
    tag_value(game, name).unwrap_or(TAG_PLACEHOLDER)
}

/// Movetext of a game: everything after the header, starting at the first move number.
pub fn movetext(game: &str) -> Option<&str> {
    let body = match game.rfind(']') {
        Some(i) => &game[i + 1..],
        None => game,
    };
    body.find("1.").map(|i| &body[i..])
}

pub fn read_game<P: AsRef<Path>>(path: P) -> Result<String> {
    std::fs::read_to_string(&path).with_context(|| format!("read pgn file: {}", path.as_ref().display()))
}

/// Replay a whole game text. A game with no movetext yields the initial position.
pub fn final_position(game: &str, opts: &ReplayOptions) -> Result<Replay, ReplayError> {
    replay_with(movetext(game).unwrap_or(""), opts)
}
