use pgnfen::board::Board;
use pgnfen::fen::{placement, START_PLACEMENT};
use pgnfen::PlacementError;
use pretty_assertions::assert_eq;

#[test]
fn initial_arrangement_encodes() {
    assert_eq!(placement(&Board::startpos()), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
    assert_eq!(placement(&Board::default()), START_PLACEMENT);
}

#[test]
fn empty_board_has_no_trailing_separator() {
    let s = placement(&Board::empty());
    assert_eq!(s, "8/8/8/8/8/8/8/8");
    assert!(!s.ends_with('/'));
}

#[test]
fn parses_what_it_encodes() {
    for fen in [START_PLACEMENT, "1n1Rkb1r/p4ppp/4q3/4p1B1/4P3/8/PPP2PPP/2K5", "k3Q3/8/8/8/8/8/8/4K3"] {
        let b = Board::from_placement(fen).expect("placement");
        assert_eq!(placement(&b), fen);
    }
    let b = Board::from_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    assert_eq!(b, Board::startpos());
}

#[test]
fn rejects_bad_placements() {
    assert_eq!(Board::from_placement("8/8/8"), Err(PlacementError::RankCount(3)));
    assert_eq!(Board::from_placement("9/8/8/8/8/8/8/8"), Err(PlacementError::BadChar('9')));
    assert_eq!(Board::from_placement("7/8/8/8/8/8/8/8"), Err(PlacementError::RankWidth { rank: 8 }));
    assert_eq!(Board::from_placement("8/8/8/8/8/8/8/ppppppppp"), Err(PlacementError::RankWidth { rank: 1 }));
    assert_eq!(Board::from_placement("8/8/8/8/8/8/8/x7"), Err(PlacementError::BadChar('x')));
}

#[test]
fn grid_display_has_eight_lines() {
    let grid = Board::startpos().to_string();
    let lines: Vec<&str> = grid.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "r n b q k b n r");
    assert_eq!(lines[4], ". . . . . . . .");
}
