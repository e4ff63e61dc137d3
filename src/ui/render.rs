//! Plain-text frames: title, help, status line and the grid.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::error::InputError;
use crate::game::{Board, Cell, Game, GameStatus, COLS, ROWS};

const TITLE: &str = "🔵🔵🔵🔵 Connect4 🔴🔴🔴🔴";
const TITLE_WIDTH: usize = 28;
const OBJECTIVE: &str = "💡 Objective: Be the first player to get four of your colored checkers in a row horizontally, vertically or diagonally.";
const RULES: &str = "📋 Rules: Try to build a row of four checkers while keeping your opponent from doing the same.";
const HELP: &str = "🚀 How to play: Type the column number '1..7' to play or 'e' to exit and press <enter>.";
const PLAYERS: &str = "😃 Players: 2-Player";
const ROUND: &str = "🥊 Round:";
const TURN: &str = "🤩 Turn:";
pub const PROMPT: &str = "✨ Enter your column: ";
const EMPTY_CELL: &str = "  ";
const DRAW: &str = "👍 The game ended in a draw, congratulations to all players.";
pub const FAREWELL: &str = "👋 Bye-Bye";

/// Keycap glyph for a 1-based number, e.g. 3️⃣
fn keycap(n: usize) -> String {
    format!("{n}\u{fe0f}\u{20e3}")
}

/// The whole screen for the current state, without the input prompt.
pub fn render_frame(game: &Game) -> String {
    let mut frame = String::new();
    let bar = "━".repeat(TITLE_WIDTH);

    frame.push_str(&format!("┏{bar}┓\n┃ {TITLE} ┃\n┗{bar}┛\n"));
    frame.push_str(&format!("\n{OBJECTIVE}\n{RULES}\n{PLAYERS}\n{HELP}\n"));

    let player = game.current_player();
    frame.push_str(&format!(
        "\n{ROUND} {}\n{TURN} {} {}\n",
        game.round(),
        player.avatar(),
        player.name()
    ));

    frame.push('\n');
    frame.push_str(&render_board(game));
    frame.push('\n');
    frame
}

/// Column header plus the grid, top row first so pieces sit at the bottom.
pub fn render_board(game: &Game) -> String {
    let board: &Board = game.board();
    let mut out = String::from("    ");
    for col in 0..COLS {
        out.push_str(&keycap(col + 1));
        out.push_str("    ");
    }
    out.push('\n');

    out.push_str(&format!("  ┏━━{}━━┓\n", "━━┳━━".repeat(COLS - 1)));
    for row in (0..ROWS).rev() {
        out.push_str(&keycap(row + 1));
        out.push(' ');
        for cell in board.row_cells(row) {
            let marker = match cell {
                Cell::Empty => EMPTY_CELL,
                Cell::Taken(id) => game.player(id).avatar(),
            };
            out.push_str(&format!("┃ {marker} "));
        }
        out.push_str("┃\n");
        if row > 0 {
            out.push_str(&format!("  ┣━━{}━━┫\n", "━━╋━━".repeat(COLS - 1)));
        }
    }
    out.push_str(&format!("  ┗━━{}━━┛\n", "━━┻━━".repeat(COLS - 1)));
    out
}

/// Clear the terminal and draw a fresh frame.
pub fn draw<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.write_all(render_frame(game).as_bytes())?;
    out.flush()
}

pub fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(PROMPT.as_bytes())?;
    out.flush()
}

/// Text shown for rejected input
pub fn error_message(err: InputError) -> String {
    format!("❗ {err}")
}

/// Win or draw line for a finished game; nothing while the game is still open.
pub fn end_message(game: &Game) -> Option<String> {
    match game.status() {
        GameStatus::Won(id) => {
            let winner = game.player(id);
            Some(format!(
                "🎉 Congratulations {} {}, you win the game!!!",
                winner.avatar(),
                winner.name()
            ))
        }
        GameStatus::Draw => Some(DRAW.to_string()),
        GameStatus::AwaitingMove(_) => None,
    }
}

/// End-of-game report followed by the farewell line.
pub fn end<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    if let Some(message) = end_message(game) {
        writeln!(out, "{message}")?;
    }
    writeln!(out, "{FAREWELL}")?;
    out.flush()
}
