use crate::board::{Board, Color, Coord, Piece, PieceKind};
use crate::error::{MoveError, ReplayError};
use crate::fen::placement;
use crate::resolve::{resolve_origin, Resolution};
use crate::san::{classify, plies, tokenize, MoveKind, Outcome};
use log::{debug, info, warn};
use serde::Serialize;

/// What a failing half-move does to the rest of the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OnError {
    /// Stop and return `ReplayError` with the board as it was before the failing ply.
    #[default]
    Abort,
    /// Log, record in `Replay::skipped`, and carry on with the next ply.
    Skip,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ReplayOptions {
    pub resolution: Resolution,
    pub on_error: OnError,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkippedMove {
    pub ply: usize,
    pub token: String,
    pub reason: String,
}

#[derive(Clone, Debug)]
pub struct Replay {
    pub board: Board,
    pub placement: String,
    /// Half-moves actually applied to the board.
    pub plies: usize,
    pub outcome: Option<Outcome>,
    pub skipped: Vec<SkippedMove>,
}

/// Replay with first-match resolution, aborting on the first bad half-move.
pub fn replay(movetext: &str) -> Result<Replay, ReplayError> {
    replay_with(movetext, &ReplayOptions::default())
}

pub fn replay_with(movetext: &str, opts: &ReplayOptions) -> Result<Replay, ReplayError> {
    let tokens = tokenize(movetext);
    let mut board = Board::startpos();
    let mut applied = 0usize;
    let mut outcome = None;
    let mut skipped = Vec::new();

    for ply in plies(&tokens) {
        let step = classify(ply.text).and_then(|kind| match kind {
            MoveKind::GameTermination { result } => Ok(Some(result)),
            kind => apply(&mut board, ply.color(), kind, opts.resolution).map(|_| None),
        });
        match step {
            Ok(Some(result)) => {
                info!("game terminated by {} after {} plies", result, applied);
                outcome = Some(result);
                break;
            }
            Ok(None) => {
                debug!("ply {} {:?} {}", ply.index, ply.color(), ply.text);
                applied += 1;
            }
            Err(source) => match opts.on_error {
                OnError::Abort => {
                    return Err(ReplayError {
                        ply: ply.index,
                        token: ply.text.to_string(),
                        source,
                        partial: Box::new(board),
                    });
                }
                OnError::Skip => {
                    warn!("skipping ply {} ({}): {}", ply.index, ply.text, source);
                    skipped.push(SkippedMove { ply: ply.index, token: ply.text.to_string(), reason: source.to_string() });
                }
            },
        }
    }

    let placement = placement(&board);
    Ok(Replay { board, placement, plies: applied, outcome, skipped })
}

/// Apply one classified half-move for `color`. The board is only touched once the
/// origin is known, so an error leaves it unchanged.
pub fn apply(board: &mut Board, color: Color, kind: MoveKind, resolution: Resolution) -> Result<(), MoveError> {
    match kind {
        MoveKind::PawnPush { to, promotion } => {
            let from = pawn_push_origin(board, color, to)?;
            board.set(from, None);
            board.set(to, Some(Piece::new(color, promotion.unwrap_or(PieceKind::Pawn))));
        }
        MoveKind::PawnCapture { from_file, to, promotion } => {
            let pawn = Piece::new(color, PieceKind::Pawn);
            let from = to
                .offset(-color.forward(), from_file as i8 - to.col as i8)
                .filter(|&from| board.get(from) == Some(pawn))
                .ok_or(MoveError::NoOriginFound { piece: pawn, to })?;
            if board.is_empty(to) {
                // en passant: the captured pawn sits beside the origin, behind the destination
                let victim = to
                    .offset(-color.forward(), 0)
                    .filter(|&v| board.get(v) == Some(Piece::new(color.opponent(), PieceKind::Pawn)))
                    .ok_or(MoveError::NoOriginFound { piece: pawn, to })?;
                board.set(victim, None);
            }
            board.set(from, None);
            board.set(to, Some(Piece::new(color, promotion.unwrap_or(PieceKind::Pawn))));
        }
        MoveKind::PieceMove { piece, disambiguation, to, .. } => {
            let piece = Piece::new(color, piece);
            let from = resolve_origin(board, piece, to, disambiguation, resolution)?;
            board.set(from, None);
            board.set(to, Some(piece));
        }
        MoveKind::CastleKingside => castle(board, color, true),
        MoveKind::CastleQueenside => castle(board, color, false),
        MoveKind::GameTermination { .. } => {}
    }
    Ok(())
}

/// Walk back down the file from `to` to the first occupied square; it must be our pawn.
fn pawn_push_origin(board: &Board, color: Color, to: Coord) -> Result<Coord, MoveError> {
    let pawn = Piece::new(color, PieceKind::Pawn);
    let mut cur = to;
    while let Some(prev) = cur.offset(-color.forward(), 0) {
        match board.get(prev) {
            None => cur = prev,
            Some(p) if p == pawn => return Ok(prev),
            Some(_) => break,
        }
    }
    Err(MoveError::NoOriginFound { piece: pawn, to })
}

fn castle(board: &mut Board, color: Color, kingside: bool) {
    let row = color.back_row();
    let (rook_from, king_to, rook_to) = if kingside { (7, 6, 5) } else { (0, 2, 3) };
    board.set(Coord { row, col: 4 }, None);
    board.set(Coord { row, col: rook_from }, None);
    board.set(Coord { row, col: king_to }, Some(Piece::new(color, PieceKind::King)));
    board.set(Coord { row, col: rook_to }, Some(Piece::new(color, PieceKind::Rook)));
}
