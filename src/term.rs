//! TerminalRenderer: draws the game as plain text on the alternate screen.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::Print,
    terminal, QueueableCommand,
};

use tui_2048::core::GameSnapshot;
use tui_2048::core::Grid;

const HELP: &str = "arrows/hjkl/wasd or drag: move   r: new game   q: quit";

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(EnableMouseCapture)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(DisableMouseCapture)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Full redraw of the current game
    pub fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        for line in render_lines(snapshot) {
            self.stdout.queue(Print(line))?;
            self.stdout.queue(Print("\r\n"))?;
        }
        self.stdout.flush()?;
        Ok(())
    }
}

/// Text lines for one frame: score, grid, status banner, key help.
pub fn render_lines(snapshot: &GameSnapshot) -> Vec<String> {
    let mut lines = vec![
        format!("Score: {}   Moves: {}", snapshot.score, snapshot.moves),
        String::new(),
    ];

    // Only hand-built snapshots can hold invalid tiles.
    let grid = Grid::from_rows(snapshot.grid).unwrap_or_default();
    lines.extend(grid.to_string().lines().map(str::to_string));

    lines.push(String::new());
    if let Some(message) = snapshot.message {
        lines.push(format!("{}  (press r to play again)", message));
    }
    lines.push(HELP.to_string());
    lines
}
