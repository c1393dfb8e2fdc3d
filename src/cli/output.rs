use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
    Separator,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    /// Disables colors and icons.
    pub plain_mode: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn build_label(kind: MessageKind) -> (&'static str, &'static str) {
    match kind {
        MessageKind::Info => ("", ""),
        MessageKind::Success => ("OK:", "✔"),
        MessageKind::Warning => ("WARNING:", "⚠"),
        MessageKind::Error => ("ERROR:", "✖"),
        MessageKind::Section | MessageKind::Separator => ("", ""),
    }
}

pub(crate) fn apply_style(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> String {
    let text = message.to_string();

    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Separator => String::from("---------------------------------------"),
        MessageKind::Info => text,
        _ => {
            let (label, icon) = build_label(kind);
            if prefs.plain_mode {
                format!("{label} {text}")
            } else {
                format!("{icon} {text}")
            }
        }
    };

    if prefs.plain_mode {
        return base;
    }

    match kind {
        MessageKind::Success => base.green().to_string(),
        MessageKind::Warning => base.yellow().to_string(),
        MessageKind::Error => base.red().to_string(),
        MessageKind::Section => base.bold().cyan().to_string(),
        MessageKind::Separator | MessageKind::Info => base,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message, &current_preferences());
    println!("{}", formatted);
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

pub fn separator() {
    print(MessageKind::Separator, "");
}

pub fn blank_line() {
    println!();
}
