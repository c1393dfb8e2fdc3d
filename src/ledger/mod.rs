//! Ledger domain: categories, dates, transactions and the ledger store.

pub mod category;
pub mod date;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use category::{CategorySet, PREDEFINED_CATEGORIES};
pub use date::EntryDate;
pub use ledger::{BalanceLookup, BalancePolicy, Ledger};
pub use transaction::{Direction, SortedTransaction, Transaction, TransactionInput};
