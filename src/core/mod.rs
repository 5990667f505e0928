mod board;
mod config;
mod consts;
mod error;
mod models;
mod update;

pub use board::{create_board, flip_cells_around, has_won};
pub(crate) use board::cross_around;
pub use config::GameConfig;
pub use consts::*;
pub use error::LightsOutError;
pub use models::{Board, Coord, Direction, GameUpdate, UserAction};
pub use update::step;
