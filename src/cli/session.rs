//! The menu-driven session around a single ledger.

use crate::{
    cli::{
        io::LineSource,
        menu::{self, MenuChoice},
        output,
    },
    errors::CliError,
    ledger::{Direction, Ledger, SortedTransaction, TransactionInput},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Ways a single menu step can end early.
#[derive(Debug)]
enum StepError {
    /// A number was expected and something else was typed.
    InvalidNumber,
    EndOfInput,
    Cli(CliError),
}

impl From<CliError> for StepError {
    fn from(err: CliError) -> Self {
        StepError::Cli(err)
    }
}

type StepResult<T> = Result<T, StepError>;

const INVALID_INPUT: &str = "Invalid input. Please enter a valid menu option (1-8).";

/// Interactive state: the ledger plus the account currently logged in.
pub struct Session {
    ledger: Ledger,
    current_account: Option<String>,
}

impl Session {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger,
            current_account: None,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn current_account(&self) -> Option<&str> {
        self.current_account.as_deref()
    }

    /// Runs the menu until the user exits or input runs out.
    pub fn run<S: LineSource>(&mut self, input: &mut S) -> Result<(), CliError> {
        loop {
            menu::render(self.current_account());
            match self.step(input) {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Exit) => break,
                Err(StepError::InvalidNumber) => {
                    output::error(INVALID_INPUT);
                    output::blank_line();
                }
                Err(StepError::EndOfInput) => {
                    tracing::debug!("input exhausted; leaving menu");
                    break;
                }
                Err(StepError::Cli(err)) => return Err(err),
            }
        }
        Ok(())
    }

    fn step<S: LineSource>(&mut self, input: &mut S) -> StepResult<LoopControl> {
        let number = read_number::<i64, _>(input, "Select an option: ")?;
        let Some(choice) = MenuChoice::from_number(number) else {
            output::warning("Invalid option. Please try again.");
            return Ok(LoopControl::Continue);
        };

        if choice == MenuChoice::Exit {
            output::info("Exiting Expense Tracker.");
            return Ok(LoopControl::Exit);
        }

        let account = self.current_account.clone();
        self.dispatch(choice, account.as_deref(), input)?;
        output::blank_line();
        Ok(LoopControl::Continue)
    }

    fn dispatch<S: LineSource>(
        &mut self,
        choice: MenuChoice,
        account: Option<&str>,
        input: &mut S,
    ) -> StepResult<()> {
        match (choice, account) {
            (MenuChoice::Login, _) => self.login(input),
            (MenuChoice::Logout, _) => {
                self.current_account = None;
                output::info("Logged out from the current account.");
                Ok(())
            }
            (MenuChoice::Exit, _) => Ok(()),
            (_, None) => {
                output::error("Please log in to an account first.");
                Ok(())
            }
            (MenuChoice::Credit, Some(account)) => {
                self.record(input, account.to_string(), Direction::Credit)
            }
            (MenuChoice::Debit, Some(account)) => {
                self.record(input, account.to_string(), Direction::Debit)
            }
            (MenuChoice::ViewTransactions, Some(account)) => {
                self.show_account(account);
                Ok(())
            }
            (MenuChoice::ViewByCategory, Some(_)) => {
                let category = read_text(input, "Enter Category: ")?;
                self.show_category(&category);
                Ok(())
            }
            (MenuChoice::Balance, Some(account)) => {
                self.show_balance(account);
                Ok(())
            }
        }
    }

    fn record<S: LineSource>(
        &mut self,
        input: &mut S,
        account: String,
        direction: Direction,
    ) -> StepResult<()> {
        let amount = read_number::<f64, _>(input, "Enter Amount: ")?;

        if direction.is_debit() {
            if let Err(err) = self.ledger.check_debit(&account, amount) {
                output::error(format!("Debit Transaction failed: {err}"));
                return Ok(());
            }
        }

        let description = read_text(input, "Enter a description: ")?;

        output::info("Select a category:");
        for (idx, name) in self.ledger.categories().iter().enumerate() {
            output::info(format!("{}. {}", idx + 1, name));
        }
        let number = read_number::<i64, _>(input, "Enter category number: ")?;
        let date = read_text(input, "Enter Date (YYYY-MM-DD): ")?;

        let category = usize::try_from(number)
            .ok()
            .and_then(|n| self.ledger.categories().by_number(n))
            .map(str::to_string);
        let Some(category) = category else {
            output::error("Invalid category selection.");
            return Ok(());
        };

        let request = TransactionInput {
            account,
            amount,
            category,
            direction,
            description,
            date,
        };
        match self.ledger.record_transaction(request) {
            Ok(_) => output::success(format!("{direction} Transaction added successfully.")),
            Err(err) => {
                output::error(&err);
                output::error(format!("{direction} Transaction failed to add."));
            }
        }
        Ok(())
    }

    fn login<S: LineSource>(&mut self, input: &mut S) -> StepResult<()> {
        let known = self.ledger.accounts();
        if !known.is_empty() {
            output::info(format!("Accounts with transactions: {}", known.join(", ")));
        }
        let name = read_text(input, "Enter Account Name: ")?;
        if name.trim().is_empty() {
            output::warning("Account name cannot be empty.");
            return Ok(());
        }
        output::info(format!("Logged in to the account: {name}"));
        self.current_account = Some(name);
        Ok(())
    }

    fn show_account(&self, account: &str) {
        match self.ledger.transactions_for_account(account) {
            Ok(transactions) => {
                output::section(format!("Transactions for account: {account}"));
                print_transactions(&transactions);
            }
            Err(err) => output::warning(err),
        }
    }

    fn show_category(&self, category: &str) {
        match self.ledger.transactions_for_category(category) {
            Ok(transactions) => {
                output::section(format!("Transactions for category: {category}"));
                print_transactions(&transactions);
            }
            Err(err) => {
                output::warning(err);
                if !self.ledger.categories().contains(category) {
                    if let Some(suggestion) = self.ledger.categories().suggest(category) {
                        output::info(format!("Did you mean `{suggestion}`?"));
                    }
                }
            }
        }
    }

    fn show_balance(&self, account: &str) {
        let lookup = self.ledger.balance(account);
        if !lookup.exists() {
            output::warning("No account balance found for the account.");
        }
        let value = lookup
            .value()
            .map_or_else(|| "none".to_string(), |value| format!("{value:.2}"));
        output::info(format!("Account Balance for {}: {}", lookup.account, value));
    }
}

fn print_transactions(transactions: &[SortedTransaction]) {
    for txn in transactions {
        output::info(format!("Amount: {:.2}", txn.amount));
        output::info(format!("Description: {}", txn.description));
        output::info(format!("Category: {}", txn.category));
        output::info(format!("Date: {}", txn.formatted_date()));
        output::separator();
    }
}

fn read_text<S: LineSource>(input: &mut S, prompt: &str) -> StepResult<String> {
    input.read_line(prompt)?.ok_or(StepError::EndOfInput)
}

fn read_number<T, S>(input: &mut S, prompt: &str) -> StepResult<T>
where
    T: std::str::FromStr,
    S: LineSource,
{
    read_text(input, prompt)?
        .trim()
        .parse::<T>()
        .map_err(|_| StepError::InvalidNumber)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::io::ScriptInput;
    use crate::ledger::{BalancePolicy, CategorySet};
    use std::io::Cursor;

    fn run_script(session: &mut Session, script: &str) {
        let mut input = ScriptInput::new(Cursor::new(script.to_string()));
        session.run(&mut input).unwrap();
    }

    #[test]
    fn options_need_login() {
        let mut session = Session::new(Ledger::default());
        run_script(&mut session, "1\n5\n8\n");
        assert_eq!(session.ledger().transaction_count(), 0);
        assert_eq!(session.current_account(), None);
    }

    #[test]
    fn credit_then_debit_updates_balance() {
        let mut session = Session::new(Ledger::default());
        run_script(
            &mut session,
            "6\nAlice\n1\n100\nPaycheck\n4\n2024-01-01\n2\n30\nGroceries\n1\n2024-01-02\n8\n",
        );
        assert_eq!(session.current_account(), Some("Alice"));
        assert_eq!(session.ledger().balance("Alice").value(), Some(70.0));

        let view = session.ledger().transactions_for_account("Alice").unwrap();
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].amount, 100.0);
        assert_eq!(view[0].category, "salary");
        assert_eq!(view[1].amount, -30.0);
        assert_eq!(view[1].category, "food");
    }

    #[test]
    fn debit_precheck_stops_before_remaining_prompts() {
        let mut session = Session::new(Ledger::default());
        // The debit is refused right after the amount, so "8" is read as the next menu choice.
        run_script(&mut session, "6\nBob\n2\n10\n8\n");
        assert_eq!(session.ledger().transaction_count(), 0);
    }

    #[test]
    fn overdraft_policy_lets_debit_through() {
        let ledger = Ledger::with_policy(CategorySet::default(), BalancePolicy::AllowOverdraft);
        let mut session = Session::new(ledger);
        run_script(&mut session, "6\nBob\n2\n10\nBus\n2\n2024-05-05\n8\n");
        assert_eq!(session.ledger().balance("Bob").value(), Some(-10.0));
    }

    #[test]
    fn invalid_numbers_do_not_end_the_session() {
        let mut session = Session::new(Ledger::default());
        run_script(&mut session, "abc\n42\n6\nCarol\n1\nlots\n1\n50\nGift\n9\n2024-01-01\n8\n");
        assert_eq!(session.current_account(), Some("Carol"));
        // Category 9 does not exist, so nothing was recorded.
        assert_eq!(session.ledger().transaction_count(), 0);
    }

    #[test]
    fn invalid_date_is_rejected_by_ledger() {
        let mut session = Session::new(Ledger::default());
        run_script(&mut session, "6\nDan\n1\n10\nTip\n1\n2024-13-01\n8\n");
        assert!(!session.ledger().balance("Dan").exists());
    }

    #[test]
    fn logout_clears_account_and_input_end_exits() {
        let mut session = Session::new(Ledger::default());
        run_script(&mut session, "6\nEve\n7\n");
        assert_eq!(session.current_account(), None);
    }

    #[test]
    fn login_and_logout_need_no_current_account() {
        let mut session = Session::new(Ledger::default());
        run_script(&mut session, "7\n6\nAlice\n6\nBob\n8\n");
        assert_eq!(session.current_account(), Some("Bob"));

        run_script(&mut session, "7\n3\n8\n");
        assert_eq!(session.current_account(), None);
    }

    #[test]
    fn blank_account_name_is_ignored() {
        let mut session = Session::new(Ledger::default());
        run_script(&mut session, "6\n   \n8\n");
        assert_eq!(session.current_account(), None);
    }
}
