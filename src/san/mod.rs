//! SAN movetext: splitting into tokens and classifying each half-move.
pub mod classify;
pub mod tokenize;

pub use classify::{classify, Disambiguation, MoveKind, Outcome};
pub use tokenize::{plies, tokenize, Ply, Token};
