pub use dissimilar::diff as __diff;
use crate::console_interface::{parse_board, render_board_to_string};
use crate::core::{flip_cells_around, has_won, Board, Coord};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

pub struct BoardTestState {
    pub board: Board,
}

impl BoardTestState {
    pub fn new(board: &str) -> Self {
        let board = parse_board(board).expect("test board should parse");
        Self { board }
    }

    pub fn board_to_string(&self) -> String {
        render_board_to_string(&self.board).trim_matches('\n').into()
    }

    pub fn won(&self) -> bool {
        has_won(&self.board)
    }

    pub fn assert_flip(&mut self, y: i32, x: i32) {
        let new_board = flip_cells_around(&self.board, Coord { y, x });
        assert_eq!(new_board.nrows(), self.board.nrows(), "flip changed the board height");
        assert_eq!(new_board.ncols(), self.board.ncols(), "flip changed the board width");
        self.board = new_board;
    }

    pub fn assert_flips(&mut self, coords: &[(i32, i32)]) {
        for &(y, x) in coords {
            self.assert_flip(y, x);
        }
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.board_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }
}
