//! # Prompts
//!
//! Validated reads on top of a [`Terminal`].
//!
//! ## Integer Prompt
//! ```text
//! "  Enter choice: "  ◄──────────────────────────────┐
//!      │                                             │
//!      ▼                                             │
//! read line ── blank? ── yes ──► read next line      │
//!      │                                             │
//!      ▼                                             │
//! parse i32 ── fails? ── "Invalid input. Input a number." ─┘
//!      │
//!      ▼
//!   Ok(n)
//! ```
//!
//! Blank lines are skipped by every prompt: the shopper has not answered
//! yet. End of input becomes [`ShopError::InputClosed`].

use crate::error::{ShopError, ShopResult};
use crate::terminal::Terminal;

/// Next line that has something other than whitespace on it.
fn next_answer<T: Terminal + ?Sized>(term: &mut T) -> ShopResult<String> {
    loop {
        let line = term.read_line()?.ok_or(ShopError::InputClosed)?;
        if !line.trim().is_empty() {
            return Ok(line);
        }
    }
}

/// Asks until the answer parses as an integer.
///
/// Malformed answers (letters, out-of-range numbers, trailing junk) print
/// an error and ask again; they never default to anything.
pub fn read_int<T: Terminal + ?Sized>(term: &mut T, prompt: &str) -> ShopResult<i32> {
    term.write(prompt)?;
    loop {
        let answer = next_answer(term)?;
        match answer.trim().parse::<i32>() {
            Ok(value) => return Ok(value),
            Err(_) => term.write(&format!("  Invalid input. Input a number. \n\n{prompt}"))?,
        }
    }
}

/// Asks for free text and returns the answer untouched.
pub fn read_text<T: Terminal + ?Sized>(term: &mut T, prompt: &str) -> ShopResult<String> {
    term.write(prompt)?;
    next_answer(term)
}

/// Asks a Y/N question. Only an answer starting with `Y` or `y` is a yes.
pub fn read_yes_no<T: Terminal + ?Sized>(term: &mut T, prompt: &str) -> ShopResult<bool> {
    term.write(prompt)?;
    let answer = next_answer(term)?;
    Ok(matches!(answer.trim_start().chars().next(), Some('Y' | 'y')))
}
