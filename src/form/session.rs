use crate::command::parser::{parse_command, Command};
use crate::form::state::ConverterForm;
use crate::form::validation::ValidationResult;
use std::fs;
use std::path::Path;

/// Apply a commit script from a file to `form`
pub fn apply_script_from_file<P: AsRef<Path>>(
    form: &mut ConverterForm,
    path: P,
) -> Result<ValidationResult, Box<dyn std::error::Error>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(format!("Script does not exist: {}", path.display()).into());
    }

    if !path.is_file() {
        return Err(format!("Script is not a file: {}", path.display()).into());
    }

    let content = fs::read_to_string(path)?;
    log::debug!("Applying script {}", path.display());
    Ok(apply_script(form, &content))
}

/// Apply every commit in `content`, one command per line.
/// Bad lines are recorded and skipped; later lines still apply.
pub fn apply_script(form: &mut ConverterForm, content: &str) -> ValidationResult {
    let mut validation = ValidationResult::new();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;

        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                validation.add_error(e.to_string(), Some(line_number));
                continue;
            }
        };

        match command {
            Command::Commit { unit, text } => match form.commit_text(unit, &text) {
                Ok(_) => validation.applied += 1,
                Err(e) => validation.add_error(e.to_string(), Some(line_number)),
            },
            Command::Reset(Some(kind)) => {
                form.reset_section(kind);
                validation.applied += 1;
            }
            Command::Reset(None) => {
                form.reset();
                validation.applied += 1;
            }
            other => {
                log::warn!("Skipping non-commit command on line {}", line_number);
                validation.add_warning(
                    format!("'{}' has no effect in a script", other.keyword()),
                    Some(line_number),
                );
            }
        }
    }

    validation
}
