use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

use super::{
    category::CategorySet,
    date::EntryDate,
    transaction::{SortedTransaction, Transaction, TransactionInput},
};

/// How the ledger treats debits larger than the account balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalancePolicy {
    /// Debits need a recorded balance at least as large as the amount.
    #[default]
    RejectOverdraft,
    /// Debits are accepted regardless of the balance.
    AllowOverdraft,
}

/// Result of a balance query: whether the account has a balance, and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceLookup {
    pub account: String,
    pub value: Option<f64>,
}

impl BalanceLookup {
    pub fn exists(&self) -> bool {
        self.value.is_some()
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }
}

#[derive(Debug, Default)]
struct AccountBook {
    transactions: Vec<Transaction>,
    balance: f64,
}

/// Position of a transaction inside an account's book.
#[derive(Debug, Clone)]
struct EntryRef {
    account: String,
    index: usize,
}

/// In-memory ledger of accounts, balances and categorised transactions.
///
/// Each account owns its transactions in insertion order; categories keep an
/// index into those books instead of a copy.
#[derive(Debug)]
pub struct Ledger {
    categories: CategorySet,
    policy: BalancePolicy,
    accounts: HashMap<String, AccountBook>,
    category_index: HashMap<String, Vec<EntryRef>>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(CategorySet::default())
    }
}

impl Ledger {
    pub fn new(categories: CategorySet) -> Self {
        Self::with_policy(categories, BalancePolicy::default())
    }

    pub fn with_policy(categories: CategorySet, policy: BalancePolicy) -> Self {
        let category_index = categories
            .iter()
            .map(|name| (name.to_string(), Vec::new()))
            .collect();
        Self {
            categories,
            policy,
            accounts: HashMap::new(),
            category_index,
        }
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn policy(&self) -> BalancePolicy {
        self.policy
    }

    /// Validates and stores a transaction, returning its id.
    ///
    /// Nothing is written unless every check passes.
    pub fn record_transaction(&mut self, input: TransactionInput) -> Result<Uuid, LedgerError> {
        let date = match self.validate(&input) {
            Ok(date) => date,
            Err(err) => {
                tracing::debug!(
                    account = %input.account,
                    category = %input.category,
                    direction = %input.direction,
                    reason = %err,
                    "transaction rejected"
                );
                return Err(err);
            }
        };

        let TransactionInput {
            account,
            amount,
            category,
            direction,
            description,
            ..
        } = input;
        let signed = direction.signed(amount);
        let transaction = Transaction::new(
            account.clone(),
            category.clone(),
            signed,
            description,
            date,
        );
        let id = transaction.id;

        let book = self.accounts.entry(account.clone()).or_default();
        let index = book.transactions.len();
        book.transactions.push(transaction);
        book.balance += signed;
        let balance = book.balance;

        self.category_index
            .entry(category.clone())
            .or_default()
            .push(EntryRef {
                account: account.clone(),
                index,
            });

        tracing::debug!(%id, %account, %category, amount = signed, balance, "transaction recorded");
        Ok(id)
    }

    fn validate(&self, input: &TransactionInput) -> Result<EntryDate, LedgerError> {
        if !self.categories.contains(&input.category) {
            return Err(LedgerError::InvalidCategory(input.category.clone()));
        }
        let date = EntryDate::parse(&input.date)?;
        if !input.amount.is_finite() || input.amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(input.amount));
        }
        if input.direction.is_debit() {
            self.check_debit(&input.account, input.amount)?;
        }
        Ok(date)
    }

    /// Checks a prospective debit against the balance policy.
    pub fn check_debit(&self, account: &str, amount: f64) -> Result<(), LedgerError> {
        if self.policy == BalancePolicy::AllowOverdraft {
            return Ok(());
        }
        match self.balance(account).value() {
            Some(available) if available >= amount => Ok(()),
            available => Err(LedgerError::InsufficientBalance {
                account: account.to_string(),
                requested: amount,
                available: available.unwrap_or(0.0),
            }),
        }
    }

    /// Transactions of `account`, oldest first.
    pub fn transactions_for_account(
        &self,
        account: &str,
    ) -> Result<Vec<SortedTransaction>, LedgerError> {
        let book = self
            .accounts
            .get(account)
            .filter(|book| !book.transactions.is_empty())
            .ok_or_else(|| LedgerError::AccountNotFound(account.to_string()))?;
        Ok(sorted_by_date(book.transactions.iter()))
    }

    /// Transactions filed under `category`, oldest first.
    ///
    /// The name is not checked against the category set; unknown names are
    /// simply not found.
    pub fn transactions_for_category(
        &self,
        category: &str,
    ) -> Result<Vec<SortedTransaction>, LedgerError> {
        let refs = self
            .category_index
            .get(category)
            .filter(|refs| !refs.is_empty())
            .ok_or_else(|| LedgerError::CategoryNotFound(category.to_string()))?;
        let transactions = refs.iter().filter_map(|entry| {
            let found = self
                .accounts
                .get(&entry.account)
                .and_then(|book| book.transactions.get(entry.index));
            if found.is_none() {
                tracing::error!(
                    %category,
                    account = %entry.account,
                    index = entry.index,
                    "category index points past the account book; skipping"
                );
            }
            found
        });
        Ok(sorted_by_date(transactions))
    }

    pub fn balance(&self, account: &str) -> BalanceLookup {
        BalanceLookup {
            account: account.to_string(),
            value: self.accounts.get(account).map(|book| book.balance),
        }
    }

    /// Names of accounts with at least one transaction, sorted.
    pub fn accounts(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.accounts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn transaction_count(&self) -> usize {
        self.accounts
            .values()
            .map(|book| book.transactions.len())
            .sum()
    }
}

fn sorted_by_date<'a>(
    transactions: impl Iterator<Item = &'a Transaction>,
) -> Vec<SortedTransaction> {
    let mut sorted: Vec<SortedTransaction> = transactions
        .filter_map(|txn| match txn.date.to_calendar() {
            Some(date) => Some(SortedTransaction::from_transaction(txn, date)),
            None => {
                tracing::error!(id = %txn.id, date = %txn.date, "stored date is not a calendar date; skipping");
                None
            }
        })
        .collect();
    // `sort_by_key` is stable, so same-day entries keep insertion order.
    sorted.sort_by_key(|txn| txn.date);
    sorted
}
