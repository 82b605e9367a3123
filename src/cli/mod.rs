//! Command-line front end
//!
//! Handlers in [`commands`] return the library `Result`; `main` maps errors to
//! the exit status.

pub mod commands;
pub mod progress;
pub mod ui;
pub mod util;

pub use progress::ConsoleRenderer;
pub use util::{CommandContext, OutputFormat};
