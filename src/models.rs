pub(crate) use crate::core::{Board, Coord};

pub struct GameRenderState {
    pub board: Board,
    pub won: bool,
    pub cursor: Coord,
    pub hint: Option<Coord>,
    pub message: Option<String>,
}
