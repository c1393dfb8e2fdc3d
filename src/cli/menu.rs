use colored::Colorize;

use crate::cli::output::{self, current_preferences};

/// Entries of the main menu, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Credit,
    Debit,
    ViewTransactions,
    ViewByCategory,
    Balance,
    Login,
    Logout,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::Credit,
        MenuChoice::Debit,
        MenuChoice::ViewTransactions,
        MenuChoice::ViewByCategory,
        MenuChoice::Balance,
        MenuChoice::Login,
        MenuChoice::Logout,
        MenuChoice::Exit,
    ];

    pub fn from_number(number: i64) -> Option<Self> {
        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|choice| *choice == self)
            .map_or(0, |index| index + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Credit => "Credit Transaction",
            MenuChoice::Debit => "Debit Transaction",
            MenuChoice::ViewTransactions => "View Transactions",
            MenuChoice::ViewByCategory => "View Transactions by Category",
            MenuChoice::Balance => "Print Account Balance",
            MenuChoice::Login => "Create or Log in to an Account",
            MenuChoice::Logout => "Log Out",
            MenuChoice::Exit => "Exit",
        }
    }
}

const RULE: &str = "=======================================";

pub fn render(current_account: Option<&str>) {
    let plain = current_preferences().plain_mode;
    let heading = format!("{RULE}\n        Expense Tracker Menu           \n{RULE}");
    if plain {
        println!("{heading}");
    } else {
        println!("{}", heading.cyan());
    }
    if let Some(account) = current_account {
        output::info(format!("Logged in as: {account}"));
    }

    for choice in MenuChoice::ALL {
        let line = format!("{}. {}", choice.number(), choice.label());
        if plain {
            println!("{line}");
        } else {
            println!("{}", line.yellow());
        }
        if matches!(choice, MenuChoice::Balance | MenuChoice::Logout) {
            output::separator();
        }
    }

    if plain {
        println!("{RULE}");
    } else {
        println!("{}", RULE.cyan());
    }
}
