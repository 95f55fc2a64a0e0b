use crate::convert::detector::looks_like_quantity;
use crate::convert::parser::split_quantity;
use crate::convert::types::{Unit, UnitKind};

/// One line of interactive or script input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // Field commit: "inches = 12", "inches 12", "12 in"
    Commit { unit: Unit, text: String },
    // Render the form or one section: "show", "show liquid"
    Show(Option<UnitKind>),
    // Zero the form or one section: "reset", "reset temperature"
    Reset(Option<UnitKind>),
    Json,
    Units,
    Help,
    Quit,
}

impl Command {
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Commit { .. } => "commit",
            Command::Show(_) => "show",
            Command::Reset(_) => "reset",
            Command::Json => "json",
            Command::Units => "units",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    UnknownCommand(String),
    UnknownUnit(String),
    UnknownSection(String),
    MissingValue(String),
    UnexpectedArgument(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnknownCommand(s) => write!(f, "Unknown command: '{}'", s),
            ParseError::UnknownUnit(s) => write!(f, "Unknown unit: '{}'", s),
            ParseError::UnknownSection(s) => write!(f, "Unknown section: '{}'", s),
            ParseError::MissingValue(unit) => write!(f, "Missing value for {}", unit),
            ParseError::UnexpectedArgument(s) => write!(f, "Unexpected argument: '{}'", s),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let keyword = match head.to_lowercase().as_str() {
        "show" => Some(Command::Show(parse_section(rest)?)),
        "reset" => Some(Command::Reset(parse_section(rest)?)),
        "json" => Some(no_argument(Command::Json, rest)?),
        "units" => Some(no_argument(Command::Units, rest)?),
        "help" | "?" => Some(no_argument(Command::Help, rest)?),
        "quit" | "exit" => Some(no_argument(Command::Quit, rest)?),
        _ => None,
    };
    if let Some(command) = keyword {
        return Ok(Some(command));
    }

    parse_commit(line).map(Some)
}

fn parse_commit(line: &str) -> Result<Command, ParseError> {
    // "<unit> = <value>"
    if let Some((unit_text, value_text)) = line.split_once('=') {
        let unit = parse_unit(unit_text)?;
        let text = value_text.trim();
        if text.is_empty() {
            return Err(ParseError::MissingValue(unit.label().to_string()));
        }
        return Ok(Command::Commit {
            unit,
            text: text.to_string(),
        });
    }

    // "<value> <unit>"
    if looks_like_quantity(line) {
        if let Some((value_text, unit_text)) = split_quantity(line) {
            let unit = parse_unit(unit_text)?;
            return Ok(Command::Commit {
                unit,
                text: value_text.to_string(),
            });
        }
    }

    // "<unit> <value>", where the unit may contain spaces ("fl oz 3")
    if let Some((unit_text, value_text)) = line.rsplit_once(char::is_whitespace) {
        if let Ok(unit) = unit_text.trim().parse::<Unit>() {
            return Ok(Command::Commit {
                unit,
                text: value_text.to_string(),
            });
        }
    }

    match line.parse::<Unit>() {
        Ok(unit) => Err(ParseError::MissingValue(unit.label().to_string())),
        Err(_) => {
            let head = line.split_whitespace().next().unwrap_or(line);
            Err(ParseError::UnknownCommand(head.to_string()))
        }
    }
}

fn parse_unit(text: &str) -> Result<Unit, ParseError> {
    text.trim()
        .parse::<Unit>()
        .map_err(|_| ParseError::UnknownUnit(text.trim().to_string()))
}

fn parse_section(rest: &str) -> Result<Option<UnitKind>, ParseError> {
    if rest.is_empty() {
        return Ok(None);
    }
    rest.parse::<UnitKind>()
        .map(Some)
        .map_err(|_| ParseError::UnknownSection(rest.to_string()))
}

fn no_argument(command: Command, rest: &str) -> Result<Command, ParseError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(ParseError::UnexpectedArgument(rest.to_string()))
    }
}
