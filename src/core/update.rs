use crate::core::{flip_cells_around, has_won, Board, GameUpdate, UserAction};

pub fn step(board: &Board, action: UserAction) -> GameUpdate {
    // a won board is terminal
    if has_won(board) {
        return GameUpdate::NoChange;
    }

    match action {
        UserAction::Flip(pos) => {
            log::debug!("flip around ({}, {})", pos.y, pos.x);
            GameUpdate::NextState(flip_cells_around(board, pos))
        }
    }
}
