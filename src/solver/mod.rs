mod gf2;

use crate::core::{Board, Coord, has_won};
use crate::core::cross_around;
use gf2::LinearSystem;

/// Presses that turn every light off, in row-major order, each at most once.
///
/// A press at `p` toggles the cross around `p`, and the cross relation is
/// symmetric, so cell `c` ends up off iff the number of pressed cells in the
/// cross around `c` has the same parity as its current state. One equation
/// per cell, one variable per cell.
pub fn solve(board: &Board) -> Option<Vec<Coord>> {
    let coords: Vec<Coord> = board.coords().collect();
    let index_of = |pos: &Coord| pos.y as usize * board.ncols() + pos.x as usize;

    let mut system = LinearSystem::new(coords.len());
    for &pos in &coords {
        let presses = cross_around(board, pos).map(|p| index_of(&p));
        system.add_equation(presses, board[pos]);
    }

    let pressed = system.solve()?;
    Some(
        coords
            .into_iter()
            .zip(pressed)
            .filter_map(|(pos, press)| press.then_some(pos))
            .collect(),
    )
}

/// A single press that makes progress toward a solution.
pub fn hint(board: &Board) -> Option<Coord> {
    if has_won(board) {
        return None;
    }
    solve(board)?.into_iter().next()
}
