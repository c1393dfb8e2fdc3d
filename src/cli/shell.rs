use std::io;

use crate::cli::{
    io::{EditorInput, ScriptInput},
    output::{self, OutputPreferences},
    session::Session,
    ui::banner::Banner,
};
use crate::config::ConfigManager;
use crate::errors::CliError;

pub const SCRIPT_ENV_VAR: &str = "EXPENSE_TRACKER_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    pub fn from_env() -> Self {
        if std::env::var_os(SCRIPT_ENV_VAR).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

/// Loads the configuration and runs the menu until the user exits.
pub fn run_cli() -> Result<(), CliError> {
    let mode = CliMode::from_env();
    let manager = ConfigManager::new();
    let config = manager.load()?;

    output::set_preferences(OutputPreferences {
        plain_mode: config.plain_output || mode == CliMode::Script,
    });
    tracing::debug!(?mode, config = %manager.path().display(), "starting expense tracker");

    let mut session = Session::new(config.build_ledger()?);

    if config.show_banner {
        Banner::render();
    }

    match mode {
        CliMode::Interactive => session.run(&mut EditorInput::new()?),
        CliMode::Script => session.run(&mut ScriptInput::new(io::stdin().lock())),
    }
}
