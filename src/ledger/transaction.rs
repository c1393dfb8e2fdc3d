use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

use super::date::{EntryDate, DISPLAY_FORMAT};

/// Whether money enters (credit) or leaves (debit) the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Credit,
    Debit,
}

impl Direction {
    /// Applies the direction to a positive amount.
    pub fn signed(self, amount: f64) -> f64 {
        match self {
            Direction::Credit => amount,
            Direction::Debit => -amount,
        }
    }

    pub fn is_debit(self) -> bool {
        matches!(self, Direction::Debit)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Credit => write!(f, "Credit"),
            Direction::Debit => write!(f, "Debit"),
        }
    }
}

/// Raw request to record a transaction, as collected by the caller.
#[derive(Debug, Clone)]
pub struct TransactionInput {
    pub account: String,
    pub amount: f64,
    pub category: String,
    pub direction: Direction,
    pub description: String,
    pub date: String,
}

impl TransactionInput {
    pub fn credit(
        account: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            amount,
            category: category.into(),
            direction: Direction::Credit,
            description: description.into(),
            date: date.into(),
        }
    }

    pub fn debit(
        account: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            direction: Direction::Debit,
            ..Self::credit(account, amount, category, description, date)
        }
    }
}

/// A recorded transaction. Never modified after it is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub account: String,
    pub category: String,
    /// Signed amount: negative for debits.
    pub amount: f64,
    pub description: String,
    pub date: EntryDate,
}

impl Transaction {
    pub(crate) fn new(
        account: String,
        category: String,
        amount: f64,
        description: String,
        date: EntryDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account,
            category,
            amount,
            description,
            date,
        }
    }
}

/// Display copy of a transaction with its date resolved for sorting.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedTransaction {
    pub id: Uuid,
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
}

impl SortedTransaction {
    pub(crate) fn from_transaction(transaction: &Transaction, date: NaiveDate) -> Self {
        Self {
            id: transaction.id,
            amount: transaction.amount,
            description: transaction.description.clone(),
            category: transaction.category.clone(),
            date,
        }
    }

    /// Canonical `YYYY-MM-DD` rendering of the resolved date.
    pub fn formatted_date(&self) -> String {
        self.date.format(DISPLAY_FORMAT).to_string()
    }
}
