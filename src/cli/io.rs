//! Line input for the menu, from a terminal editor or a script on stdin.

use std::io::{self, BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Confirm};
use rustyline::{error::ReadlineError, DefaultEditor};

use crate::errors::CliError;

/// Source of user answers. `Ok(None)` means input is exhausted.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;
}

/// Reads answers line by line from any buffered reader, echoing prompts.
pub struct ScriptInput<R> {
    reader: R,
}

impl<R: BufRead> ScriptInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptInput<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).to_string();
        println!();
        Ok(Some(trimmed))
    }
}

/// Interactive terminal input with line editing and history.
pub struct EditorInput {
    editor: DefaultEditor,
    theme: ColorfulTheme,
}

impl EditorInput {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            theme: ColorfulTheme::default(),
        })
    }

    fn confirm_exit(&self) -> Result<bool, CliError> {
        Confirm::with_theme(&self.theme)
            .with_prompt("Exit Expense Tracker?")
            .default(false)
            .interact()
            .map_err(CliError::from)
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(line.as_str()).ok();
                    }
                    return Ok(Some(line));
                }
                Err(ReadlineError::Interrupted) => {
                    if self.confirm_exit()? {
                        return Ok(None);
                    }
                }
                Err(ReadlineError::Eof) => return Ok(None),
                Err(err) => return Err(err.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn script_input_strips_line_endings() {
        let mut input = ScriptInput::new(Cursor::new("first\r\nsecond\n"));
        assert_eq!(input.read_line("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(input.read_line("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(input.read_line("> ").unwrap(), None);
    }

    #[test]
    fn script_input_keeps_blank_lines() {
        let mut input = ScriptInput::new(Cursor::new("\nlast"));
        assert_eq!(input.read_line("").unwrap().as_deref(), Some(""));
        assert_eq!(input.read_line("").unwrap().as_deref(), Some("last"));
    }
}
