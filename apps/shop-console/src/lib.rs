//! # Console Shop Library
//!
//! Terminal front end for the shop. `main.rs` only calls [`init_tracing`]
//! and [`run`].
//!
//! ## Module Organization
//! ```text
//! shop_console/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── session.rs      ◄─── Menu state machine, owns Cart + OrderHistory
//! ├── prompt.rs       ◄─── Integer / text / yes-no prompts
//! ├── render.rs       ◄─── Fixed-width tables and banners
//! ├── terminal.rs     ◄─── Display driver trait + line terminal
//! ├── config.rs       ◄─── Session configuration
//! └── error.rs        ◄─── ShopError
//! ```

pub mod config;
pub mod error;
pub mod prompt;
pub mod render;
pub mod session;
pub mod terminal;

use shop_core::Catalog;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::SessionConfig;
pub use error::{ShopError, ShopResult};
pub use session::Session;
pub use terminal::{LineTerminal, Terminal};

/// Runs one interactive session on stdin/stdout with the standard catalog.
///
/// Returns once the shopper picks Exit or input closes.
pub fn run() -> ShopResult<()> {
    let config = SessionConfig::default();
    info!(title = %config.title, "Starting console shop");

    let mut terminal = LineTerminal::stdio(&config);
    let mut session = Session::new(config, Catalog::standard());
    session.run(&mut terminal)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - Default: WARN, so the screen shows nothing but the shop itself
/// - `RUST_LOG=debug` - Show menu choices and cart additions
/// - `RUST_LOG=shop_console=info` - Show session start/end and orders
///
/// Logs go to stderr; stdout belongs to the shopper.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
