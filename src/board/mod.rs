pub mod geometry;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Row step a pawn of this color advances by.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row index of this color's back rank.
    pub fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Uppercase SAN letter; pawns have none in SAN but use 'P' in FEN.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self { Self { color, kind } }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn to_char(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Self { color, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?}", self.color, self.kind)
    }
}

/// Board square as (row, col); row 0 is rank 8, col 0 is file a.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 { Some(Self { row, col }) } else { None }
    }

    pub fn from_file_rank(file: char, rank: char) -> Option<Self> {
        Some(Self { row: rank_to_row(rank)?, col: file_to_col(file)? })
    }

    /// Shift by a signed (row, col) delta; `None` when it leaves the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let r = self.row as i8 + dr;
        let c = self.col as i8 + dc;
        if (0..8).contains(&r) && (0..8).contains(&c) {
            Some(Self { row: r as u8, col: c as u8 })
        } else {
            None
        }
    }

    pub fn file_char(self) -> char { (b'a' + self.col) as char }

    pub fn rank_char(self) -> char { (b'8' - self.row) as char }
}

pub fn file_to_col(file: char) -> Option<u8> {
    if ('a'..='h').contains(&file) { Some(file as u8 - b'a') } else { None }
}

pub fn rank_to_row(rank: char) -> Option<u8> {
    if ('1'..='8').contains(&rank) { Some(b'8' - rank as u8) } else { None }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Coord {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => {
                Coord::from_file_rank(file, rank).ok_or_else(|| format!("invalid square: {s}"))
            }
            _ => Err(format!("invalid square: {s}")),
        }
    }
}

impl Serialize for Coord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self { Self::startpos() }
}

impl Board {
    pub fn empty() -> Self {
        Self { squares: [[None; 8]; 8] }
    }

    /// Standard initial arrangement.
    pub fn startpos() -> Self {
        let mut b = Self::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            b.squares[0][col] = Some(Piece::new(Color::Black, kind));
            b.squares[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            b.squares[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.squares[7][col] = Some(Piece::new(Color::White, kind));
        }
        b
    }

    pub fn get(&self, at: Coord) -> Option<Piece> {
        self.squares[at.row as usize][at.col as usize]
    }

    pub fn set(&mut self, at: Coord, piece: Option<Piece>) {
        self.squares[at.row as usize][at.col as usize] = piece;
    }

    pub fn is_empty(&self, at: Coord) -> bool { self.get(at).is_none() }

    /// Occupied squares in row-major order (a8, b8, ... h1).
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(r, rank)| {
            rank.iter().enumerate().filter_map(move |(c, sq)| sq.map(|p| (Coord { row: r as u8, col: c as u8 }, p)))
        })
    }

    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] { &self.squares }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in &self.squares {
            let line: Vec<String> = rank.iter().map(|sq| sq.map_or('.', Piece::to_char).to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
