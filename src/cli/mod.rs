//! Menu-driven front end over the ledger.

pub mod io;
pub mod menu;
pub mod output;
pub mod session;
mod shell;
pub mod ui;

pub use session::Session;
pub use shell::{run_cli, CliMode, SCRIPT_ENV_VAR};
