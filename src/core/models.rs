use serde::Serialize;

/// A cell position, row first. Signed so neighbors of border cells can be
/// expressed and then rejected by the bounds check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Coord {
    pub y: i32,
    pub x: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Flip(Coord),
}

/// Lit/unlit grid. `true` is lit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    pub(super) cells: Vec<Vec<bool>>,
}

#[derive(Debug)]
pub enum GameUpdate {
    NextState(Board),
    NoChange,
}
