// Origin resolution: which square did a piece move from?
use crate::board::geometry::{between, diagonal_step, king_origins, knight_origins, straight_step};
use crate::board::{Board, Coord, Piece, PieceKind};
use crate::error::MoveError;
use crate::san::Disambiguation;

/// What to do when more than one piece could have made the move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Resolution {
    /// Take the first candidate in row-major order (a8 → h1).
    #[default]
    FirstMatch,
    /// Fail with `AmbiguousOrigin` unless exactly one candidate remains.
    Strict,
}

/// Every square holding `piece` that can reach `to` and satisfies `hint`, in row-major order.
pub fn candidates(board: &Board, piece: Piece, to: Coord, hint: Disambiguation) -> Vec<Coord> {
    let mut found: Vec<Coord> = match piece.kind {
        PieceKind::Knight => knight_origins(to).collect(),
        PieceKind::King => king_origins(to).collect(),
        _ => {
            return board
                .pieces()
                .filter(|&(from, p)| p == piece && hint.admits(from) && slides_to(board, piece.kind, from, to))
                .map(|(from, _)| from)
                .collect()
        }
    };
    // offset tables are not in scan order
    found.retain(|&from| board.get(from) == Some(piece) && hint.admits(from));
    found.sort();
    found
}

pub fn resolve_origin(
    board: &Board,
    piece: Piece,
    to: Coord,
    hint: Disambiguation,
    resolution: Resolution,
) -> Result<Coord, MoveError> {
    let found = candidates(board, piece, to, hint);
    if found.len() > 1 && resolution == Resolution::Strict {
        return Err(MoveError::AmbiguousOrigin { piece, to, candidates: found });
    }
    found.first().copied().ok_or(MoveError::NoOriginFound { piece, to })
}

fn slides_to(board: &Board, kind: PieceKind, from: Coord, to: Coord) -> bool {
    let straight = matches!(kind, PieceKind::Rook | PieceKind::Queen);
    let diagonal = matches!(kind, PieceKind::Bishop | PieceKind::Queen);
    let step = match (straight_step(from, to), diagonal_step(from, to)) {
        (Some(s), _) if straight => s,
        (_, Some(s)) if diagonal => s,
        _ => return false,
    };
    between(from, to, step).all(|sq| board.is_empty(sq))
}
