// Lights Out in the terminal.
// Controls: arrows/WASD move the cursor, Space/Enter or a mouse click flips, H shows a hint, Q quits.
// Usage: lights_out [interactive|solve] [seed]

mod console_interface;
mod core;
mod models;
mod solver;
#[cfg(test)]
mod test;

use crate::console_interface::ConsoleInput::*;
use crate::console_interface::{
    cell_at, cleanup_terminal, handle_input, move_cursor, render_board_to_string, render_game,
    setup_terminal,
};
use crate::core::{create_board, has_won, step, Board, Coord, GameConfig, GameUpdate, UserAction};
use crate::models::GameRenderState;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use serde::Serialize;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let switch = std::env::args().nth(1).unwrap_or("interactive".to_string());
    let seed = match std::env::args().nth(2) {
        Some(arg) => Some(arg.parse::<u64>()?),
        None => None,
    };

    init_logging()?;

    let config = GameConfig::default().with_seed(seed);
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let board = create_board(
        config.nrows,
        config.ncols,
        config.chance_light_starts_on,
        &mut rng,
    );
    log::info!(
        "new {}x{} game, {} lit, seed {:?}",
        config.nrows,
        config.ncols,
        board.lit_count(),
        config.seed
    );

    match switch.as_str() {
        "solve" => {
            run_solve(&board)?;
        }
        "interactive" => {
            let mut terminal = setup_terminal()?;
            run_interactive(board, &mut terminal)?;
        }
        _ => {
            println!(
                "Unknown mode: {}. Use 'interactive' or 'solve'. defaulting to interactive",
                switch
            );
            let mut terminal = setup_terminal()?;
            run_interactive(board, &mut terminal)?;
        }
    }

    Ok(())
}

/// The terminal is in the alternate screen while playing, so logs go to a file.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("exports")?;
    let log_out = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open("exports/lights_out.log")?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_out)))
        .init();
    Ok(())
}

#[derive(Serialize)]
struct SolveExport<'a> {
    board: &'a Board,
    solution: Option<Vec<Coord>>,
}

fn run_solve(board: &Board) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", render_board_to_string(board));

    let solution = solver::solve(board);
    match &solution {
        Some(presses) => {
            let presses: Vec<String> = presses
                .iter()
                .map(|pos| format!("({}, {})", pos.y, pos.x))
                .collect();
            println!("Solved in {} presses: {}", presses.len(), presses.join(" "));
        }
        None => println!("No solution from this position"),
    }

    let export = SolveExport { board, solution };
    println!("{}", serde_json::to_string_pretty(&export)?);
    Ok(())
}

fn run_interactive(
    board: Board,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = play(board, terminal);
    cleanup_terminal()?;
    result
}

fn play(
    board: Board,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = GameRenderState {
        won: has_won(&board),
        board,
        cursor: Coord { y: 0, x: 0 },
        hint: None,
        message: None,
    };
    // Initial render
    let mut board_area = render_game(terminal, &state)?;

    while !state.won {
        let action = match handle_input()? {
            Quit => return Ok(()),
            MoveCursor(direction) => {
                state.cursor = move_cursor(state.cursor, direction, &state.board);
                None
            }
            FlipAtCursor => Some(UserAction::Flip(state.cursor)),
            Click { column, row } => board_area
                .and_then(|area| {
                    cell_at(area, column, row, state.board.nrows(), state.board.ncols())
                })
                .map(|pos| {
                    state.cursor = pos;
                    UserAction::Flip(pos)
                }),
            Hint => {
                state.hint = solver::hint(&state.board);
                log::info!("hint requested: {:?}", state.hint);
                state.message = match state.hint {
                    Some(_) => None,
                    None => Some("No solution from here".to_string()),
                };
                None
            }
            Resize => None,
            Timeout | Unknown => continue,
        };

        if let Some(action) = action {
            if let GameUpdate::NextState(new_board) = step(&state.board, action) {
                state.board = new_board;
                state.won = has_won(&state.board);
                state.hint = None;
                state.message = None;
            }
        }

        board_area = render_game(terminal, &state)?;
    }

    log::info!("game won");
    // Keep showing the win screen until a key is pressed
    loop {
        match handle_input()? {
            Timeout => {}
            Resize => {
                render_game(terminal, &state)?;
            }
            Click { .. } => {}
            _ => break,
        }
    }
    Ok(())
}
