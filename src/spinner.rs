//! Terminal progress indicator shown while the timer runs.

use chrono::Duration;
use colored::*;
use crossterm::{cursor, execute, terminal};
use std::io::Write;

pub const FRAMES: [char; 8] = ['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];
pub const INTERVAL: std::time::Duration = std::time::Duration::from_millis(100);

const SUFFIX: &str = "Timer is running…";

pub struct Spinner<W: Write> {
    out: W,
    frame: usize,
}

impl<W: Write> Spinner<W> {
    pub fn new(out: W) -> Self {
        Self { out, frame: 0 }
    }

    /// Hides the cursor.
    pub fn start(&mut self) -> std::io::Result<()> {
        execute!(self.out, cursor::Hide)
    }

    /// Redraws the current line with the next frame.
    pub fn tick(&mut self, elapsed: Duration) -> std::io::Result<()> {
        let glyph = FRAMES[self.frame % FRAMES.len()];
        self.frame = self.frame.wrapping_add(1);
        write!(
            self.out,
            "\r{} {} {}",
            glyph.to_string().white().bold(),
            SUFFIX,
            clock(elapsed)
        )?;
        self.out.flush()
    }

    /// Clears the spinner line and shows the cursor again.
    pub fn stop(&mut self) -> std::io::Result<()> {
        execute!(
            self.out,
            cursor::MoveToColumn(0),
            terminal::Clear(terminal::ClearType::CurrentLine),
            cursor::Show
        )
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn clock(elapsed: Duration) -> String {
    let secs = elapsed.num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}
