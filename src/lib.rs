// PGN movetext replay down to a FEN piece-placement field
pub mod board;
pub mod error;
pub mod fen;
pub mod pgn;
pub mod replay;
pub mod resolve;
pub mod san;

pub use error::{MoveError, PlacementError, ReplayError};
pub use replay::{replay, replay_with, OnError, Replay, ReplayOptions};
pub use resolve::{resolve_origin, Resolution};
pub use san::classify;
