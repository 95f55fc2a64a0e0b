use crate::command::formatter::{format_snapshot, format_units, HELP};
use crate::command::parser::{Command, ParseError};
use crate::config::Config;
use crate::convert::error::ConversionError;
use crate::form::state::ConverterForm;
use crate::form::view::FormView;

#[derive(Debug)]
pub enum CommandError {
    Conversion(ConversionError),
    ParseError(ParseError),
    Serialize(String),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Conversion(e) => write!(f, "{}", e),
            CommandError::ParseError(e) => write!(f, "{}", e),
            CommandError::Serialize(msg) => write!(f, "Failed to serialize: {}", msg),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<ConversionError> for CommandError {
    fn from(e: ConversionError) -> Self {
        CommandError::Conversion(e)
    }
}

impl From<ParseError> for CommandError {
    fn from(e: ParseError) -> Self {
        CommandError::ParseError(e)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    // Text to show the user
    Output(String),
    Quit,
}

/// Applies commands to a form and produces what the user sees next
pub struct CommandExecutor<'a> {
    form: &'a mut ConverterForm,
    config: &'a Config,
}

impl<'a> CommandExecutor<'a> {
    pub fn new(form: &'a mut ConverterForm, config: &'a Config) -> Self {
        Self { form, config }
    }

    pub fn form(&self) -> &ConverterForm {
        &*self.form
    }

    pub fn execute(&mut self, command: &Command) -> Result<Outcome, CommandError> {
        match command {
            Command::Commit { unit, text } => {
                let changed = self.form.commit_text(*unit, text)?;
                // Re-render the group whose values changed
                let view = FormView::new(self.form, self.config);
                Ok(Outcome::Output(view.render_section(changed)))
            }
            Command::Show(section) => {
                let view = FormView::new(self.form, self.config);
                let text = match section {
                    Some(kind) => view.render_section(*kind),
                    None => view.render(),
                };
                Ok(Outcome::Output(text))
            }
            Command::Reset(section) => {
                match section {
                    Some(kind) => self.form.reset_section(*kind),
                    None => self.form.reset(),
                }
                let view = FormView::new(self.form, self.config);
                let text = match section {
                    Some(kind) => view.render_section(*kind),
                    None => view.render(),
                };
                Ok(Outcome::Output(text))
            }
            Command::Json => {
                let snapshot = self.form.snapshot(self.config);
                let json = format_snapshot(&snapshot)
                    .map_err(|e| CommandError::Serialize(e.to_string()))?;
                Ok(Outcome::Output(format!("{}\n", json)))
            }
            Command::Units => Ok(Outcome::Output(format_units())),
            Command::Help => Ok(Outcome::Output(HELP.to_string())),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    /// Parse and execute one line; blank lines and comments produce no output
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Outcome>, CommandError> {
        match crate::command::parser::parse_command(line)? {
            Some(command) => self.execute(&command).map(Some),
            None => Ok(None),
        }
    }
}
