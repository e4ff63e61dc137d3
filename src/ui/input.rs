//! Turning a line of player input into a move or a quit request.

use std::io::{self, BufRead};

use crate::error::InputError;
use crate::game::{Board, COLS};

/// First character that asks to leave the game (either case).
pub const QUIT_TOKEN: char = 'e';

/// Where player input comes from, one line at a time.
pub trait LineSource {
    /// Next line without its terminator, or `None` once the source is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: BufRead> LineSource for R {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        // Bytes that are not UTF-8 still make a line; parsing rejects it later
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// A validated request from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Drop a piece into this column (0-indexed)
    Move(usize),
    Quit,
}

/// Parse one line against the current board.
///
/// Integers must name a column `1..=7` that still has room. Anything else is
/// a quit request if it starts with the quit token, otherwise a bad character.
pub fn parse_command(line: &str, board: &Board) -> Result<Command, InputError> {
    let text = line.trim();

    if let Ok(choice) = text.parse::<i64>() {
        let col = usize::try_from(choice)
            .ok()
            .and_then(|c| c.checked_sub(1))
            .filter(|&c| c < COLS)
            .ok_or(InputError::InvalidColumn)?;
        if board.is_column_full(col) {
            return Err(InputError::InvalidColumn);
        }
        return Ok(Command::Move(col));
    }

    match text.chars().next() {
        Some(c) if c.eq_ignore_ascii_case(&QUIT_TOKEN) => Ok(Command::Quit),
        _ => Err(InputError::InvalidChar),
    }
}

/// Read and parse the next line. An exhausted source counts as quitting.
pub fn read_command<L: LineSource>(
    source: &mut L,
    board: &Board,
) -> io::Result<Result<Command, InputError>> {
    match LineSource::read_line(source)? {
        Some(line) => Ok(parse_command(&line, board)),
        None => Ok(Ok(Command::Quit)),
    }
}
