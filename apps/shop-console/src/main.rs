//! # Console Shop Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, stderr)
//! 2. Build the standard catalog and an empty session
//! 3. Run the menu loop on stdin/stdout
//! 4. Exit 0 on Exit or closed input, 1 on a terminal failure

use std::process::ExitCode;

fn main() -> ExitCode {
    shop_console::init_tracing();

    match shop_console::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "Session aborted");
            ExitCode::FAILURE
        }
    }
}
