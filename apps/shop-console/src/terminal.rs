//! # Display Driver
//!
//! The session never touches stdin/stdout directly; it talks to a
//! [`Terminal`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Session ──► Terminal::write / read_line / clear / pause                │
//! │                 │                                                       │
//! │                 ├── LineTerminal<StdinLock, Stdout>     (binary)        │
//! │                 └── LineTerminal<Cursor<&[u8]>, Vec<u8>> (tests)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::config::SessionConfig;

/// Cursor home + erase to end of screen.
const CLEAR_SEQUENCE: &str = "\x1B[H\x1B[0J";

const PAUSE_PROMPT: &str = "Press Enter to continue . . . ";

/// What the session loop needs from a screen and keyboard.
pub trait Terminal {
    /// Writes text as-is and makes it visible immediately.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Reads one line without its line ending; `None` once input is closed.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Clears the screen.
    fn clear(&mut self) -> io::Result<()>;

    /// Waits until the shopper is ready to continue.
    fn pause(&mut self) -> io::Result<()>;
}

/// A line-oriented terminal over any reader and writer.
#[derive(Debug)]
pub struct LineTerminal<R, W> {
    reader: R,
    writer: W,
    clear_screen: bool,
    pause_after_action: bool,
}

impl<R: BufRead, W: Write> LineTerminal<R, W> {
    /// Wraps a reader and writer, taking the screen effects from `config`.
    pub fn new(reader: R, writer: W, config: &SessionConfig) -> Self {
        LineTerminal {
            reader,
            writer,
            clear_screen: config.clear_screen,
            pause_after_action: config.pause_after_action,
        }
    }

    /// Gives back the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LineTerminal<StdinLock<'static>, Stdout> {
    /// The process's own stdin and stdout.
    pub fn stdio(config: &SessionConfig) -> Self {
        LineTerminal::new(io::stdin().lock(), io::stdout(), config)
    }
}

impl<R: BufRead, W: Write> Terminal for LineTerminal<R, W> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            self.write(CLEAR_SEQUENCE)?;
        }
        Ok(())
    }

    fn pause(&mut self) -> io::Result<()> {
        if self.pause_after_action {
            self.write(PAUSE_PROMPT)?;
            // End of input here is picked up by the next prompt.
            self.read_line()?;
        }
        Ok(())
    }
}
