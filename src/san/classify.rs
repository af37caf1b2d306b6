use crate::board::{file_to_col, rank_to_row, Coord, PieceKind};
use crate::error::MoveError;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw,
    /// `*`: game still in progress or result unknown.
    Unfinished,
}

impl Outcome {
    pub fn from_token(t: &str) -> Option<Self> {
        match t {
            "1-0" => Some(Outcome::WhiteWins),
            "0-1" => Some(Outcome::BlackWins),
            "1/2-1/2" => Some(Outcome::Draw),
            "*" => Some(Outcome::Unfinished),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::WhiteWins => "1-0",
            Outcome::BlackWins => "0-1",
            Outcome::Draw => "1/2-1/2",
            Outcome::Unfinished => "*",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Origin hint written between the piece letter and the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disambiguation {
    None,
    File(u8),
    Rank(u8),
    Square(Coord),
}

impl Disambiguation {
    pub fn admits(self, from: Coord) -> bool {
        match self {
            Disambiguation::None => true,
            Disambiguation::File(col) => from.col == col,
            Disambiguation::Rank(row) => from.row == row,
            Disambiguation::Square(sq) => from == sq,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    PawnPush { to: Coord, promotion: Option<PieceKind> },
    PawnCapture { from_file: u8, to: Coord, promotion: Option<PieceKind> },
    PieceMove { piece: PieceKind, capture: bool, disambiguation: Disambiguation, to: Coord },
    CastleKingside,
    CastleQueenside,
    GameTermination { result: Outcome },
}

/// Classify one movetext token by its shape. Pure; the board is not consulted.
pub fn classify(token: &str) -> Result<MoveKind, MoveError> {
    if let Some(result) = Outcome::from_token(token) {
        return Ok(MoveKind::GameTermination { result });
    }
    let san = strip_annotations(token);
    match san {
        "O-O-O" => Ok(MoveKind::CastleQueenside),
        "O-O" => Ok(MoveKind::CastleKingside),
        _ => parse_san(san).ok_or_else(|| MoveError::Malformed(token.to_string())),
    }
}

/// Drop trailing check, mate, quality and en-passant marks.
pub fn strip_annotations(token: &str) -> &str {
    let mut s = token;
    loop {
        let t = s.trim_end_matches(|c: char| matches!(c, '+' | '#' | '!' | '?'));
        let t = t.strip_suffix("e.p.").unwrap_or(t);
        if t.len() == s.len() {
            return t;
        }
        s = t;
    }
}

fn parse_san(san: &str) -> Option<MoveKind> {
    if !san.is_ascii() {
        return None;
    }
    let (body, promotion) = match san.split_once('=') {
        Some((body, promo)) => (body, Some(promotion_piece(promo)?)),
        None => (san, None),
    };
    if body.len() < 2 {
        return None;
    }
    let (head, dest) = body.split_at(body.len() - 2);
    let to: Coord = dest.parse().ok()?;
    let (head, capture) = match head.strip_suffix('x') {
        Some(h) => (h, true),
        None => (head, false),
    };

    let mut chars = head.chars();
    match chars.next() {
        None if !capture => Some(MoveKind::PawnPush { to, promotion }),
        None => None,
        Some(c) if c.is_ascii_lowercase() => {
            let from_file = file_to_col(c)?;
            if !capture || chars.next().is_some() {
                return None;
            }
            Some(MoveKind::PawnCapture { from_file, to, promotion })
        }
        Some(c) => {
            let piece = match PieceKind::from_letter(c) {
                Some(PieceKind::Pawn) | None => return None,
                Some(p) => p,
            };
            if promotion.is_some() {
                return None;
            }
            let disambiguation = parse_hint(chars.as_str())?;
            Some(MoveKind::PieceMove { piece, capture, disambiguation, to })
        }
    }
}

fn promotion_piece(s: &str) -> Option<PieceKind> {
    let mut chars = s.chars();
    let kind = match chars.next()? {
        'Q' => PieceKind::Queen,
        'R' => PieceKind::Rook,
        'B' => PieceKind::Bishop,
        'N' => PieceKind::Knight,
        _ => return None,
    };
    if chars.next().is_some() { None } else { Some(kind) }
}

fn parse_hint(s: &str) -> Option<Disambiguation> {
    let mut chars = s.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (None, _, _) => Some(Disambiguation::None),
        (Some(c), None, _) => file_to_col(c)
            .map(Disambiguation::File)
            .or_else(|| rank_to_row(c).map(Disambiguation::Rank)),
        (Some(f), Some(r), None) => Coord::from_file_rank(f, r).map(Disambiguation::Square),
        _ => None,
    }
}
