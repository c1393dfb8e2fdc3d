use thiserror::Error;

/// Reasons the ledger refuses a transaction or a query.
///
/// Every variant renders as the message shown to the user; none of them end
/// the session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("Invalid category `{0}`. Please select a valid category.")]
    InvalidCategory(String),
    #[error("Invalid date format `{0}`. Please use YYYY-MM-DD format.")]
    InvalidDateFormat(String),
    #[error(
        "Invalid date `{date}`. Month must be between 1 and 12, and day must be between 1 and 31."
    )]
    InvalidDateRange { date: String, month: u32, day: u32 },
    #[error("Invalid amount {0}. Amount must be a positive number.")]
    InvalidAmount(f64),
    #[error("Insufficient balance in `{account}`: requested {requested:.2}, available {available:.2}.")]
    InsufficientBalance {
        account: String,
        requested: f64,
        available: f64,
    },
    #[error("No transactions found for the account: {0}")]
    AccountNotFound(String),
    #[error("No transactions found for the category: {0}")]
    CategoryNotFound(String),
}

/// Failures while loading or validating the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors that abort the interactive session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}
