use crate::board::Board;

pub const EMPTY_GLYPH: char = '.';
pub const FILLED_GLYPH: char = '#';

/// Text form of a board: one line per row, then a blank separator line.
pub fn render(board: &Board) -> String {
    let mut out = String::with_capacity((board.width() + 1) * board.height() + 1);
    for y in 0..board.height() as i32 {
        for x in 0..board.width() as i32 {
            out.push(if board.get(x, y).is_alive() {
                FILLED_GLYPH
            } else {
                EMPTY_GLYPH
            });
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn empty_board_renders_as_empty_glyphs() {
        let board = Board::new(4, 4).unwrap();
        assert_eq!(render(&board), "....\n....\n....\n....\n\n");
    }

    #[test]
    fn filled_cells_render_in_row_major_position() {
        let mut board = Board::new(3, 2).unwrap();
        board.set(0, 0, Cell::Filled);
        board.set(2, 1, Cell::Filled);
        assert_eq!(render(&board), "#..\n..#\n\n");
    }
}
