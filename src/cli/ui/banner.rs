use colored::Colorize;

use crate::cli::output::current_preferences;

const ART: [&str; 5] = [
    " ___                              _____             _",
    "| __|_ ___ __  ___ _ _  ___ ___  |_   _| _ __ _ __| |_____ _ _",
    "| _|\\ \\ / '_ \\/ -_) ' \\(_-</ -_)   | || '_/ _` / _| / / -_) '_|",
    "|___/_\\_\\ .__/\\___|_||_/__/\\___|   |_||_| \\__,_\\__|_\\_\\___|_|",
    "        |_|",
];

pub struct Banner;

impl Banner {
    pub fn render() {
        let plain = current_preferences().plain_mode;
        for (idx, line) in ART.iter().enumerate() {
            if plain {
                println!("{line}");
            } else if idx % 2 == 0 {
                println!("{}", line.bold().white());
            } else {
                println!("{}", line.bold().cyan());
            }
        }
        println!("{}", Self::version_line());
        println!();
    }

    pub fn version_line() -> String {
        format!(
            "v{} ({}, {} build {})",
            env!("CARGO_PKG_VERSION"),
            env!("EXPENSE_TRACKER_BUILD_HASH"),
            env!("EXPENSE_TRACKER_BUILD_PROFILE"),
            env!("EXPENSE_TRACKER_BUILD_TIMESTAMP"),
        )
    }
}
