// Pure square geometry: offset tables and ray walkers. Nothing here looks at pieces.
use super::Coord;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

/// Squares a knight could have jumped from to land on `to`.
pub fn knight_origins(to: Coord) -> impl Iterator<Item = Coord> {
    KNIGHT_OFFSETS.iter().filter_map(move |&(dr, dc)| to.offset(dr, dc))
}

/// Squares adjacent to `to`.
pub fn king_origins(to: Coord) -> impl Iterator<Item = Coord> {
    KING_OFFSETS.iter().filter_map(move |&(dr, dc)| to.offset(dr, dc))
}

/// Unit step from `from` towards `to` along a rank or file.
pub fn straight_step(from: Coord, to: Coord) -> Option<(i8, i8)> {
    if from == to { return None; }
    if from.row == to.row || from.col == to.col {
        Some((sign(to.row, from.row), sign(to.col, from.col)))
    } else {
        None
    }
}

/// Unit step from `from` towards `to` along a diagonal.
pub fn diagonal_step(from: Coord, to: Coord) -> Option<(i8, i8)> {
    if from == to { return None; }
    let dr = (to.row as i8 - from.row as i8).abs();
    let dc = (to.col as i8 - from.col as i8).abs();
    if dr == dc {
        Some((sign(to.row, from.row), sign(to.col, from.col)))
    } else {
        None
    }
}

/// Squares strictly between `from` and `to` walking by `step`.
pub fn between(from: Coord, to: Coord, step: (i8, i8)) -> Between {
    Between { cur: from, to, step }
}

pub struct Between {
    cur: Coord,
    to: Coord,
    step: (i8, i8),
}

impl Iterator for Between {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let next = self.cur.offset(self.step.0, self.step.1)?;
        if next == self.to { return None; }
        self.cur = next;
        Some(next)
    }
}

fn sign(a: u8, b: u8) -> i8 {
    (a as i8 - b as i8).signum()
}
