use crate::board::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// `12.` or `12...`
    MoveNumber(&'a str),
    /// Free-standing annotation such as `e.p.`
    Annotation(&'a str),
    /// Anything else: a half-move or a result marker.
    Move(&'a str),
}

/// One half-move with its 1-based index in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ply<'a> {
    pub index: usize,
    pub text: &'a str,
}

impl Ply<'_> {
    pub fn color(&self) -> Color {
        if self.index % 2 == 1 { Color::White } else { Color::Black }
    }
}

pub fn tokenize(movetext: &str) -> Vec<Token<'_>> {
    movetext
        .split_whitespace()
        .map(|t| {
            if is_move_number(t) {
                Token::MoveNumber(t)
            } else if t == "e.p." {
                Token::Annotation(t)
            } else {
                Token::Move(t)
            }
        })
        .collect()
}

/// Number the half-moves, dropping move numbers and annotations.
pub fn plies<'a>(tokens: &[Token<'a>]) -> Vec<Ply<'a>> {
    tokens
        .iter()
        .filter_map(|t| match t {
            Token::Move(text) => Some(*text),
            _ => None,
        })
        .enumerate()
        .map(|(i, text)| Ply { index: i + 1, text })
        .collect()
}

fn is_move_number(t: &str) -> bool {
    let rest = t.trim_start_matches(|c: char| c.is_ascii_digit());
    rest.len() < t.len() && !rest.is_empty() && rest.chars().all(|c| c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_numbers_stay_separate() {
        let toks = tokenize("1. e4 e5\n2. Nf3  Nc6 1-0");
        assert_eq!(
            toks,
            vec![
                Token::MoveNumber("1."),
                Token::Move("e4"),
                Token::Move("e5"),
                Token::MoveNumber("2."),
                Token::Move("Nf3"),
                Token::Move("Nc6"),
                Token::Move("1-0"),
            ]
        );
    }

    #[test]
    fn black_continuation_and_ep_annotation() {
        let toks = tokenize("12... exd3 e.p. 13. Qxd3");
        assert_eq!(toks[0], Token::MoveNumber("12..."));
        assert_eq!(toks[2], Token::Annotation("e.p."));
        let p = plies(&toks);
        assert_eq!(p.len(), 2);
        assert_eq!(p[1], Ply { index: 2, text: "Qxd3" });
    }

    #[test]
    fn ply_parity_gives_color() {
        let p = plies(&tokenize("1. d4 d5 2. c4"));
        let colors: Vec<Color> = p.iter().map(Ply::color).collect();
        assert_eq!(colors, vec![Color::White, Color::Black, Color::White]);
    }

    #[test]
    fn results_are_not_move_numbers() {
        for r in ["1-0", "0-1", "1/2-1/2", "*"] {
            assert_eq!(tokenize(r), vec![Token::Move(r)]);
        }
    }

    #[test]
    fn empty_movetext_has_no_tokens() {
        assert!(tokenize("  \n\t ").is_empty());
    }
}
