use crate::board::{Board, Coord, Piece};
use crate::error::PlacementError;

pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// FEN piece-placement field, rank 8 first, no trailing separator.
pub fn placement(board: &Board) -> String {
    let mut out = String::with_capacity(72);
    for (i, rank) in board.rows().iter().enumerate() {
        if i > 0 {
            out.push('/');
        }
        let mut empty = 0u8;
        for sq in rank {
            match sq {
                None => empty += 1,
                Some(p) => {
                    if empty > 0 {
                        out.push((b'0' + empty) as char);
                        empty = 0;
                    }
                    out.push(p.to_char());
                }
            }
        }
        if empty > 0 {
            out.push((b'0' + empty) as char);
        }
    }
    out
}

impl Board {
    /// Parse a placement field (the first FEN field; anything after a space is ignored).
    pub fn from_placement(fen: &str) -> Result<Board, PlacementError> {
        let field = fen.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::RankCount(ranks.len()));
        }
        let mut board = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0u8;
            for c in rank.chars() {
                if let Some(d) = c.to_digit(10) {
                    if d == 0 || d > 8 {
                        return Err(PlacementError::BadChar(c));
                    }
                    col += d as u8;
                } else {
                    let piece = Piece::from_char(c).ok_or(PlacementError::BadChar(c))?;
                    let at = Coord::new(row as u8, col).ok_or(PlacementError::RankWidth { rank: 8 - row })?;
                    board.set(at, Some(piece));
                    col += 1;
                }
                if col > 8 {
                    return Err(PlacementError::RankWidth { rank: 8 - row });
                }
            }
            if col != 8 {
                return Err(PlacementError::RankWidth { rank: 8 - row });
            }
        }
        Ok(board)
    }
}
