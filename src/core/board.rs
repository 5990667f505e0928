use rand::Rng;
use crate::core::{Board, Coord, LightsOutError};

const CROSS: [Coord; 5] = [
    Coord { y: 0, x: 0 },
    Coord { y: 1, x: 0 },
    Coord { y: -1, x: 0 },
    Coord { y: 0, x: 1 },
    Coord { y: 0, x: -1 },
];

impl Board {
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Board, LightsOutError> {
        let ncols = rows.first().map(|row| row.len()).unwrap_or(0);
        if ncols == 0 {
            return Err(LightsOutError::EmptyBoard);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != ncols {
                return Err(LightsOutError::RaggedRow {
                    row,
                    expected: ncols,
                    found: cells.len(),
                });
            }
        }
        Ok(Board { cells: rows })
    }

    pub fn nrows(&self) -> usize {
        self.cells.len()
    }

    pub fn ncols(&self) -> usize {
        self.cells.first().map(|row| row.len()).unwrap_or(0)
    }

    pub fn contains(&self, pos: &Coord) -> bool {
        pos.y >= 0 && pos.x >= 0 && (pos.y as usize) < self.nrows() && (pos.x as usize) < self.ncols()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.iter().map(|row| row.as_slice())
    }

    /// All positions in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let ncols = self.ncols() as i32;
        let nrows = self.nrows() as i32;
        (0..nrows).flat_map(move |y| (0..ncols).map(move |x| Coord { y, x }))
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&lit| lit).count()
    }
}

impl std::ops::Index<Coord> for Board {
    type Output = bool;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.cells[index.y as usize][index.x as usize]
    }
}

impl std::ops::Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord {
            y: self.y + rhs.y,
            x: self.x + rhs.x,
        }
    }
}

/// Positions toggled by a press at `center`, clipped to the board.
pub(crate) fn cross_around(board: &Board, center: Coord) -> impl Iterator<Item = Coord> + '_ {
    CROSS
        .iter()
        .map(move |&offset| center + offset)
        .filter(|pos| board.contains(pos))
}

/// Create a board `nrows` high and `ncols` wide, each cell lit with probability `chance_light_starts_on`.
pub fn create_board<R: Rng + ?Sized>(
    nrows: usize,
    ncols: usize,
    chance_light_starts_on: f64,
    rng: &mut R,
) -> Board {
    let cells = (0..nrows)
        .map(|_| {
            (0..ncols)
                .map(|_| rng.gen_bool(chance_light_starts_on))
                .collect()
        })
        .collect();
    Board { cells }
}

pub fn has_won(board: &Board) -> bool {
    board.cells.iter().all(|row| row.iter().all(|&lit| !lit))
}

pub fn flip_cells_around(board: &Board, center: Coord) -> Board {
    let mut new_board = Board {
        cells: board.cells.iter().cloned().collect(),
    };
    for pos in cross_around(board, center) {
        let cell = &mut new_board.cells[pos.y as usize][pos.x as usize];
        *cell = !*cell;
    }
    new_board
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board_strategy() -> impl Strategy<Value = Board> {
        (1usize..7, 1usize..7).prop_flat_map(|(nrows, ncols)| {
            prop::collection::vec(prop::collection::vec(any::<bool>(), ncols), nrows)
                .prop_map(|cells| Board { cells })
        })
    }

    #[test]
    fn create_board_has_requested_dimensions() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = create_board(3, 4, 0.5, &mut rng);
        assert_eq!(board.nrows(), 3);
        assert_eq!(board.ncols(), 4);
        assert!(board.rows().all(|row| row.len() == 4));
    }

    #[test]
    fn create_board_honors_extreme_chances() {
        let mut rng = StdRng::seed_from_u64(1);
        let dark = create_board(4, 4, 0.0, &mut rng);
        let lit = create_board(4, 4, 1.0, &mut rng);
        assert_eq!(dark.lit_count(), 0);
        assert_eq!(lit.lit_count(), 16);
    }

    #[test]
    fn create_board_is_deterministic_for_a_seed() {
        let first = create_board(5, 5, 0.5, &mut StdRng::seed_from_u64(42));
        let second = create_board(5, 5, 0.5, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let result = Board::from_rows(vec![vec![true, false], vec![true]]);
        assert_eq!(
            result,
            Err(LightsOutError::RaggedRow { row: 1, expected: 2, found: 1 })
        );
        assert_eq!(Board::from_rows(vec![]), Err(LightsOutError::EmptyBoard));
    }

    #[test]
    fn has_won_is_false_on_all_lit_board() {
        let board = Board::from_rows(vec![vec![true]]).unwrap();
        assert!(!has_won(&board));
    }

    #[test]
    fn flip_leaves_input_untouched() {
        let board = Board::from_rows(vec![vec![false; 3]; 3]).unwrap();
        let flipped = flip_cells_around(&board, Coord { y: 1, x: 1 });
        assert_eq!(board.lit_count(), 0);
        assert_eq!(flipped.lit_count(), 5);
    }

    #[test]
    fn flip_outside_board_only_touches_in_bounds_neighbors() {
        let board = Board::from_rows(vec![vec![false; 3]; 3]).unwrap();
        let flipped = flip_cells_around(&board, Coord { y: -1, x: 1 });
        assert_eq!(flipped.coords().filter(|&pos| flipped[pos]).collect::<Vec<_>>(), vec![Coord { y: 0, x: 1 }]);
    }

    proptest! {
        #[test]
        fn create_board_has_requested_dimensions_for_any_size(nrows in 1usize..12, ncols in 1usize..12, seed in any::<u64>()) {
            let board = create_board(nrows, ncols, 0.5, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(board.nrows(), nrows);
            prop_assert!(board.rows().all(|row| row.len() == ncols));
        }

        #[test]
        fn flipping_twice_restores_board(board in board_strategy(), y in 0i32..7, x in 0i32..7) {
            let pos = Coord { y, x };
            let twice = flip_cells_around(&flip_cells_around(&board, pos), pos);
            prop_assert_eq!(twice, board);
        }

        #[test]
        fn has_won_matches_lit_count(board in board_strategy()) {
            prop_assert_eq!(has_won(&board), board.lit_count() == 0);
        }

        #[test]
        fn flip_keeps_dimensions(board in board_strategy(), y in -1i32..8, x in -1i32..8) {
            let flipped = flip_cells_around(&board, Coord { y, x });
            prop_assert_eq!(flipped.nrows(), board.nrows());
            prop_assert_eq!(flipped.ncols(), board.ncols());
        }
    }
}
