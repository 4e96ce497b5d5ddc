//! Where session lines and confirmation answers come from.
//!
//! A terminal gets a line editor with history and command completion, and
//! confirmation prompts become `dialoguer` dialogs. Piped input is read line
//! by line; a confirmation then consumes the next line as its answer.

use std::borrow::Cow;
use std::io::{BufRead, Lines};

use anyhow::{Context as _, Result};
use dialoguer::{theme::ColorfulTheme, Confirm as ConfirmDialog};
use log::warn;
use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Context, Editor, Helper,
};

use super::command::COMMANDS;
use crate::renderer::TerminalRenderer;

pub enum SessionInput<R> {
    Interactive(Box<Editor<CommandHelper, DefaultHistory>>),
    Script(Lines<R>),
}

impl<R: BufRead> SessionInput<R> {
    pub fn interactive() -> Result<Self> {
        let mut editor = Editor::<CommandHelper, DefaultHistory>::new()
            .context("Failed to start the line editor")?;
        editor.set_helper(Some(CommandHelper));
        Ok(SessionInput::Interactive(Box::new(editor)))
    }

    pub fn script(input: R) -> Self {
        SessionInput::Script(input.lines())
    }

    /// Reads the next input line, or `None` once input is exhausted.
    ///
    /// Ctrl-C discards the line being edited; Ctrl-D ends the session.
    pub fn next_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self {
            SessionInput::Interactive(editor) => match editor.readline(prompt) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        editor.add_history_entry(trimmed).ok();
                    }
                    Ok(Some(line))
                }
                Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
                Err(ReadlineError::Eof) => Ok(None),
                Err(e) => Err(e).context("Failed to read session input"),
            },
            SessionInput::Script(lines) => lines
                .next()
                .transpose()
                .context("Failed to read session input"),
        }
    }

    /// Asks a yes/no question; anything but a clear yes declines.
    pub fn confirm(&mut self, renderer: &TerminalRenderer, prompt: &str) -> bool {
        match self {
            SessionInput::Interactive(_) => ConfirmDialog::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .default(false)
                .interact()
                .unwrap_or_else(|e| {
                    warn!("Failed to read confirmation: {e}");
                    false
                }),
            SessionInput::Script(lines) => {
                if let Err(e) = renderer.render(&format!("{prompt} [y/N]\n")) {
                    warn!("Failed to show prompt: {e}");
                }
                match lines.next() {
                    Some(Ok(answer)) => {
                        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
                    }
                    Some(Err(e)) => {
                        warn!("Failed to read confirmation: {e}");
                        false
                    }
                    None => false,
                }
            }
        }
    }
}

/// Completes command words at the start of a line.
pub struct CommandHelper;

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix.len() - prefix.trim_start().len();
        let word = &prefix[start..];
        if word.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }

        let needle = word.to_ascii_lowercase();
        let candidates = completions(&needle)
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

fn completions(prefix: &str) -> impl Iterator<Item = &'static str> + '_ {
    COMMANDS
        .iter()
        .copied()
        .filter(move |name| name.starts_with(prefix))
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {}
