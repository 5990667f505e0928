use crate::core::{has_won, Board, Coord, Direction, LightsOutError};
use crate::models::GameRenderState;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

const CELL_WIDTH: u16 = 4;
const CELL_HEIGHT: u16 = 2;
const CELL_GAP: u16 = 1;
const WIN_MESSAGE: &str = "You win!";

pub fn parse_board(s: &str) -> Result<Board, LightsOutError> {
    let mut rows = Vec::new();
    for line in s.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let row = rows.len();
        let cells = line
            .chars()
            .enumerate()
            .map(|(column, symbol)| match symbol {
                'O' => Ok(true),
                '.' => Ok(false),
                _ => Err(LightsOutError::UnknownCell { row, column, symbol }),
            })
            .collect::<Result<Vec<bool>, _>>()?;
        rows.push(cells);
    }
    Board::from_rows(rows)
}

pub fn render_board_to_string(board: &Board) -> String {
    if has_won(board) {
        return format!("{}\n", WIN_MESSAGE);
    }

    let mut result = String::new();
    for row in board.rows() {
        for &lit in row {
            result.push(if lit { 'O' } else { '.' });
        }
        result.push('\n');
    }
    result
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    Ok(())
}

/// Draws the game. Returns the screen area holding the cells, or `None` once
/// the win message has replaced them.
pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<Option<Rect>, Box<dyn std::error::Error>> {
    let mut board_area = None;
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        // Game area
        let block = Block::default().borders(Borders::ALL).title("Lights Out");
        let inner = block.inner(chunks[0]);
        f.render_widget(block, chunks[0]);

        if state.won {
            let message = Paragraph::new(WIN_MESSAGE)
                .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center);
            let middle = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, inner.height.min(1));
            f.render_widget(message, middle);
        } else {
            let area = board_rect(inner, state.board.nrows(), state.board.ncols());
            f.render_widget(Paragraph::new(board_lines(state)), area);
            board_area = Some(area);
        }

        // Instructions
        let instructions = if state.won {
            "You win! Press any key to quit."
        } else {
            "Arrows/WASD move, Space/Enter or click to flip, H for a hint, Q to quit"
        };

        let instructions = if let Some(message) = &state.message {
            format!("{} | {}", instructions, message)
        } else {
            instructions.to_string()
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(board_area)
}

fn board_lines(state: &GameRenderState) -> Vec<Line<'static>> {
    let lit_style = Style::default().bg(Color::Yellow).fg(Color::Black);
    let unlit_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let gap = " ".repeat(CELL_GAP as usize);

    let mut lines = Vec::new();
    for (y, row) in state.board.rows().enumerate() {
        for line_in_cell in 0..CELL_HEIGHT {
            let mut spans = Vec::new();
            for (x, &lit) in row.iter().enumerate() {
                let pos = Coord { y: y as i32, x: x as i32 };
                let label = if line_in_cell == 0 {
                    cell_label(pos == state.cursor, state.hint == Some(pos))
                } else {
                    "    "
                };
                let style = if lit { lit_style } else { unlit_style };
                spans.push(Span::styled(label, style));
                if x + 1 < row.len() {
                    spans.push(Span::raw(gap.clone()));
                }
            }
            lines.push(Line::from(spans));
        }
        if y + 1 < state.board.nrows() {
            for _ in 0..CELL_GAP {
                lines.push(Line::default());
            }
        }
    }
    lines
}

fn cell_label(is_cursor: bool, is_hint: bool) -> &'static str {
    match (is_cursor, is_hint) {
        (true, true) => "[**]",
        (true, false) => "[  ]",
        (false, true) => " ** ",
        (false, false) => "    ",
    }
}

fn span_length(cells: usize, cell_size: u16) -> u16 {
    let cells = cells as u16;
    cells * (cell_size + CELL_GAP) - CELL_GAP
}

/// The board centered inside `area`, clipped if the terminal is too small.
pub fn board_rect(area: Rect, nrows: usize, ncols: usize) -> Rect {
    let width = span_length(ncols, CELL_WIDTH).min(area.width);
    let height = span_length(nrows, CELL_HEIGHT).min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Maps a screen position inside `board_area` to the cell drawn there.
pub fn cell_at(board_area: Rect, column: u16, row: u16, nrows: usize, ncols: usize) -> Option<Coord> {
    if column < board_area.x
        || row < board_area.y
        || column >= board_area.x + board_area.width
        || row >= board_area.y + board_area.height
    {
        return None;
    }

    let rel_x = column - board_area.x;
    let rel_y = row - board_area.y;
    if rel_x % (CELL_WIDTH + CELL_GAP) >= CELL_WIDTH || rel_y % (CELL_HEIGHT + CELL_GAP) >= CELL_HEIGHT {
        return None;
    }

    let x = (rel_x / (CELL_WIDTH + CELL_GAP)) as usize;
    let y = (rel_y / (CELL_HEIGHT + CELL_GAP)) as usize;
    if x >= ncols || y >= nrows {
        return None;
    }
    Some(Coord { y: y as i32, x: x as i32 })
}

pub fn move_cursor(cursor: Coord, direction: Direction, board: &Board) -> Coord {
    let (dy, dx) = match direction {
        Direction::Up => (-1, 0),
        Direction::Down => (1, 0),
        Direction::Left => (0, -1),
        Direction::Right => (0, 1),
    };
    Coord {
        y: (cursor.y + dy).clamp(0, board.nrows() as i32 - 1),
        x: (cursor.x + dx).clamp(0, board.ncols() as i32 - 1),
    }
}

pub enum ConsoleInput {
    MoveCursor(Direction),
    FlipAtCursor,
    Click { column: u16, row: u16 },
    Hint,
    Resize,
    Quit,
    Timeout,
    /// A key press with no binding.
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        return Ok(input_from_event(event::read()?));
    }
    Ok(ConsoleInput::Timeout)
}

/// Only key presses, left clicks and resizes are meaningful; mouse motion,
/// button releases and focus changes read as `Timeout`.
fn input_from_event(event: Event) -> ConsoleInput {
    match event {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                ConsoleInput::MoveCursor(Direction::Up)
            }
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                ConsoleInput::MoveCursor(Direction::Down)
            }
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                ConsoleInput::MoveCursor(Direction::Left)
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                ConsoleInput::MoveCursor(Direction::Right)
            }
            KeyCode::Char(' ') | KeyCode::Enter => ConsoleInput::FlipAtCursor,
            KeyCode::Char('h') | KeyCode::Char('H') => ConsoleInput::Hint,
            _ => ConsoleInput::Unknown,
        },
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => ConsoleInput::Click { column, row },
        Event::Resize(_, _) => ConsoleInput::Resize,
        _ => ConsoleInput::Timeout,
    }
}
