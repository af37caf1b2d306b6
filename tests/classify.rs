use pgnfen::board::{Coord, PieceKind};
use pgnfen::san::{classify, Disambiguation, MoveKind, Outcome};
use pgnfen::MoveError;

fn sq(s: &str) -> Coord { s.parse().expect("square") }

#[test]
fn pawn_pushes_and_promotions() {
    assert_eq!(classify("e4").unwrap(), MoveKind::PawnPush { to: sq("e4"), promotion: None });
    assert_eq!(classify("e8=Q").unwrap(), MoveKind::PawnPush { to: sq("e8"), promotion: Some(PieceKind::Queen) });
    assert_eq!(classify("a1=N+").unwrap(), MoveKind::PawnPush { to: sq("a1"), promotion: Some(PieceKind::Knight) });
}

#[test]
fn pawn_captures_keep_origin_file() {
    assert_eq!(classify("exd5").unwrap(), MoveKind::PawnCapture { from_file: 4, to: sq("d5"), promotion: None });
    assert_eq!(classify("exd6e.p.").unwrap(), MoveKind::PawnCapture { from_file: 4, to: sq("d6"), promotion: None });
    assert_eq!(
        classify("bxa8=Q+").unwrap(),
        MoveKind::PawnCapture { from_file: 1, to: sq("a8"), promotion: Some(PieceKind::Queen) }
    );
}

#[test]
fn piece_moves_with_and_without_hints() {
    assert_eq!(
        classify("Nf3").unwrap(),
        MoveKind::PieceMove { piece: PieceKind::Knight, capture: false, disambiguation: Disambiguation::None, to: sq("f3") }
    );
    assert_eq!(
        classify("Bxe5!?").unwrap(),
        MoveKind::PieceMove { piece: PieceKind::Bishop, capture: true, disambiguation: Disambiguation::None, to: sq("e5") }
    );
    assert_eq!(
        classify("Rad1").unwrap(),
        MoveKind::PieceMove { piece: PieceKind::Rook, capture: false, disambiguation: Disambiguation::File(0), to: sq("d1") }
    );
    assert_eq!(
        classify("R1a3").unwrap(),
        MoveKind::PieceMove { piece: PieceKind::Rook, capture: false, disambiguation: Disambiguation::Rank(7), to: sq("a3") }
    );
    assert_eq!(
        classify("Raxd1+").unwrap(),
        MoveKind::PieceMove { piece: PieceKind::Rook, capture: true, disambiguation: Disambiguation::File(0), to: sq("d1") }
    );
    assert_eq!(
        classify("Qh4xe1#").unwrap(),
        MoveKind::PieceMove { piece: PieceKind::Queen, capture: true, disambiguation: Disambiguation::Square(sq("h4")), to: sq("e1") }
    );
    assert_eq!(
        classify("Kd2").unwrap(),
        MoveKind::PieceMove { piece: PieceKind::King, capture: false, disambiguation: Disambiguation::None, to: sq("d2") }
    );
}

#[test]
fn castles_checked_long_first() {
    assert_eq!(classify("O-O").unwrap(), MoveKind::CastleKingside);
    assert_eq!(classify("O-O+").unwrap(), MoveKind::CastleKingside);
    assert_eq!(classify("O-O-O").unwrap(), MoveKind::CastleQueenside);
    assert_eq!(classify("O-O-O#").unwrap(), MoveKind::CastleQueenside);
}

#[test]
fn result_markers_terminate() {
    let cases = [("1-0", Outcome::WhiteWins), ("0-1", Outcome::BlackWins), ("1/2-1/2", Outcome::Draw), ("*", Outcome::Unfinished)];
    for (tok, result) in cases {
        assert_eq!(classify(tok).unwrap(), MoveKind::GameTermination { result });
    }
}

#[test]
fn malformed_tokens_are_rejected() {
    for tok in ["", "Zz9", "e9", "i4", "Pe4", "xe4", "ee4", "e4e5", "e8=K", "e8=", "Nf3=Q", "0-0", "1.e4", "N", "Nabc3"] {
        match classify(tok) {
            Err(MoveError::Malformed(t)) => assert_eq!(t, tok),
            other => panic!("{tok:?} classified as {other:?}"),
        }
    }
}

#[test]
fn classify_is_deterministic() {
    for tok in ["e4", "Nbd7", "exd5", "O-O-O", "1/2-1/2", "junk"] {
        assert_eq!(classify(tok), classify(tok));
    }
}
