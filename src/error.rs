use crate::board::{Board, Coord, Piece};
use thiserror::Error;

/// Failure of a single half-move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("malformed move token: {0}")]
    Malformed(String),
    #[error("no {piece} can reach {to}")]
    NoOriginFound { piece: Piece, to: Coord },
    #[error("ambiguous {piece} move to {to}: candidates {candidates:?}")]
    AmbiguousOrigin { piece: Piece, to: Coord, candidates: Vec<Coord> },
}

/// A game whose replay stopped before the end of its movetext.
#[derive(Debug, Error)]
#[error("replay incomplete at ply {ply} ({token}): {source}")]
pub struct ReplayError {
    pub ply: usize,
    pub token: String,
    #[source]
    pub source: MoveError,
    /// Board as it stood before the failing ply.
    pub partial: Box<Board>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {rank} does not describe 8 squares")]
    RankWidth { rank: usize },
    #[error("invalid placement character {0:?}")]
    BadChar(char),
}
