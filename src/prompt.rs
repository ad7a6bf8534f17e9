use std::io;

use console::{style, Key, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use thiserror::Error;

use crate::catalog::COMMIT_TYPES;
use crate::fuzzy;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("cancelled by user")]
    Cancelled,

    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

/// Field values after merging flags and prompt answers.
/// `push_confirmed` is Some only when the push prompt was shown.
pub struct Resolved {
    pub commit_type: String,
    pub scope: String,
    pub desc: String,
    pub push_confirmed: Option<bool>,
}

/// The push prompt only appears on a fully interactive run: supplying any
/// of the three text flags suppresses it, and --nopush disables pushing
/// outright.
pub fn should_confirm_push(any_text_flag: bool, nopush: bool) -> bool {
    !any_text_flag && !nopush
}

/// Prompt, in order, for each field not already supplied via flags.
/// Fields supplied via flags are never re-prompted.
pub fn resolve(
    commit_type: Option<String>,
    scope: Option<String>,
    desc: Option<String>,
    nopush: bool,
) -> Result<Resolved, PromptError> {
    let any_text_flag = commit_type.is_some() || scope.is_some() || desc.is_some();
    let term = Term::stderr();

    let commit_type = match commit_type {
        Some(value) => value,
        None => prompt_commit_type(&term)?,
    };

    let scope = match scope {
        Some(value) => value,
        None => prompt_line("Commit scope")?,
    };

    let desc = match desc {
        Some(value) => value,
        None => prompt_line("Commit description")?,
    };

    let push_confirmed = if should_confirm_push(any_text_flag, nopush) {
        Some(prompt_push_confirmation()?)
    } else {
        None
    };

    Ok(Resolved {
        commit_type,
        scope,
        desc,
        push_confirmed,
    })
}

/// Autocomplete prompt for the commit type. Every keystroke re-ranks the
/// catalog and redraws the list; Enter accepts the highlighted entry,
/// which is "feat" when nothing has been typed. Esc or Ctrl-C cancels.
fn prompt_commit_type(term: &Term) -> Result<String, PromptError> {
    let mut query = String::new();
    let mut selected = 0usize;
    let mut drawn = 0usize;

    term.hide_cursor()?;
    let result = loop {
        let matches = fuzzy::rank(&query, COMMIT_TYPES);
        if !matches.is_empty() && selected >= matches.len() {
            selected = matches.len() - 1;
        }

        term.clear_last_lines(drawn)?;
        term.write_line(&format!(
            "{} {} {}",
            style("?").green().bold(),
            style("Commit type:").bold(),
            query
        ))?;
        for (i, candidate) in matches.iter().enumerate() {
            if i == selected {
                term.write_line(&format!("{} {}", style(">").cyan(), style(candidate).cyan()))?;
            } else {
                term.write_line(&format!("  {}", candidate))?;
            }
        }
        drawn = 1 + matches.len();

        match term.read_key() {
            Ok(Key::Char(c)) if !c.is_control() => {
                query.push(c);
                selected = 0;
            }
            Ok(Key::Backspace) => {
                query.pop();
                selected = 0;
            }
            Ok(Key::ArrowDown) if !matches.is_empty() => {
                selected = (selected + 1) % matches.len();
            }
            Ok(Key::ArrowUp) if !matches.is_empty() => {
                selected = selected.checked_sub(1).unwrap_or(matches.len() - 1);
            }
            Ok(Key::Enter) => {
                // Enter with zero matches is ignored
                if let Some(choice) = matches.get(selected) {
                    break Ok((*choice).to_string());
                }
            }
            Ok(Key::Escape) => break Err(PromptError::Cancelled),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => break Err(PromptError::Cancelled),
            Err(e) => break Err(PromptError::Io(e)),
        }
    };

    term.clear_last_lines(drawn)?;
    term.show_cursor()?;

    if let Ok(choice) = &result {
        term.write_line(&format!(
            "{} {} {}",
            style("✔").green(),
            style("Commit type:").bold(),
            style(choice).cyan()
        ))?;
    }

    result
}

fn prompt_line(prompt: &str) -> Result<String, PromptError> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(interaction_error)
}

fn prompt_push_confirmation() -> Result<bool, PromptError> {
    let answer = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Do you want to push your changes?")
        .default(true)
        .interact_opt()
        .map_err(interaction_error)?;

    // Esc on the confirmation aborts like Esc anywhere else
    answer.ok_or(PromptError::Cancelled)
}

fn interaction_error(err: dialoguer::Error) -> PromptError {
    match err {
        dialoguer::Error::IO(io_err) if io_err.kind() == io::ErrorKind::Interrupted => {
            PromptError::Cancelled
        }
        dialoguer::Error::IO(io_err) => PromptError::Io(io_err),
    }
}
