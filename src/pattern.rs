use rand::Rng;

use crate::board::{Board, Cell};

/// Known seed patterns. Anything that does not parse falls back to `Random`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Blinker,
    Toad,
    Beacon,
    Random,
}

impl Pattern {
    /// ASCII-case-insensitive name lookup.
    pub fn parse(name: &str) -> Option<Pattern> {
        if name.eq_ignore_ascii_case("blinker") {
            Some(Pattern::Blinker)
        } else if name.eq_ignore_ascii_case("toad") {
            Some(Pattern::Toad)
        } else if name.eq_ignore_ascii_case("beacon") {
            Some(Pattern::Beacon)
        } else if name.eq_ignore_ascii_case("random") {
            Some(Pattern::Random)
        } else {
            None
        }
    }

    /// Maps an optional user-supplied name to a pattern. Unknown and absent
    /// names both select `Random`.
    pub fn resolve(name: Option<&str>) -> Pattern {
        name.and_then(Pattern::parse).unwrap_or(Pattern::Random)
    }

    /// The name reported to the caller after seeding.
    pub fn label(self) -> &'static str {
        match self {
            Pattern::Blinker => "Blinker",
            Pattern::Toad => "Toad",
            Pattern::Beacon => "Beacon",
            Pattern::Random => "RANDOM",
        }
    }

    pub fn draw<R: Rng>(self, board: &mut Board, rng: &mut R) {
        match self {
            Pattern::Blinker => fill(board, &[(4, 3), (4, 4), (4, 5)]),
            Pattern::Toad => fill(board, &[(3, 3), (4, 3), (5, 3), (2, 4), (3, 4), (4, 4)]),
            Pattern::Beacon => {
                fill_block(board, 5, 1);
                fill_block(board, 3, 3);
            }
            Pattern::Random => {
                for y in 0..board.height() as i32 {
                    for x in 0..board.width() as i32 {
                        if rng.gen_bool(0.5) {
                            board.set(x, y, Cell::Filled);
                        }
                    }
                }
            }
        }
    }
}

fn fill(board: &mut Board, cells: &[(i32, i32)]) {
    for &(x, y) in cells {
        board.set(x, y, Cell::Filled);
    }
}

// 2x2 block with its top-left corner at (x, y)
fn fill_block(board: &mut Board, x: i32, y: i32) {
    fill(board, &[(x, y), (x + 1, y), (x, y + 1), (x + 1, y + 1)]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(pattern: Pattern) -> Board {
        let mut rng = StdRng::seed_from_u64(0);
        let mut board = Board::new(8, 8).unwrap();
        pattern.draw(&mut board, &mut rng);
        board
    }

    fn stepped(board: &Board) -> Board {
        let mut next = Board::new(board.width(), board.height()).unwrap();
        board.step_into(&mut next).unwrap();
        next
    }

    fn filled_cells(board: &Board) -> Vec<(i32, i32)> {
        let mut out = vec![];
        for y in 0..board.height() as i32 {
            for x in 0..board.width() as i32 {
                if board.get(x, y).is_alive() {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Pattern::parse("blinker"), Some(Pattern::Blinker));
        assert_eq!(Pattern::parse("BLINKER"), Some(Pattern::Blinker));
        assert_eq!(Pattern::parse("tOaD"), Some(Pattern::Toad));
        assert_eq!(Pattern::parse("Beacon"), Some(Pattern::Beacon));
        assert_eq!(Pattern::parse("glider"), None);
    }

    #[test]
    fn unknown_empty_and_absent_names_fall_back_to_random() {
        for resolved in [
            Pattern::resolve(Some("glider")),
            Pattern::resolve(Some("")),
            Pattern::resolve(None),
        ] {
            assert_eq!(resolved, Pattern::Random);
            assert_eq!(resolved.label(), "RANDOM");
        }
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let start = seeded(Pattern::Blinker);
        assert_eq!(filled_cells(&start), vec![(4, 3), (4, 4), (4, 5)]);

        let once = stepped(&start);
        assert_eq!(filled_cells(&once), vec![(3, 4), (4, 4), (5, 4)]);

        let twice = stepped(&once);
        assert_eq!(twice, start);
    }

    #[test]
    fn toad_oscillates_with_period_two() {
        let start = seeded(Pattern::Toad);
        let once = stepped(&start);
        assert_ne!(once, start);
        assert_eq!(stepped(&once), start);
    }

    #[test]
    fn beacon_returns_to_seed_state_after_two_steps() {
        let start = seeded(Pattern::Beacon);
        let once = stepped(&start);
        assert_ne!(once, start);
        assert_eq!(stepped(&once), start);
    }

    #[test]
    fn random_seeding_is_deterministic_for_a_fixed_seed() {
        let a = seeded(Pattern::Random);
        let b = seeded(Pattern::Random);
        assert_eq!(a, b);
        assert!(!filled_cells(&a).is_empty());
    }
}
