//! Confirmation collaborator for destructive wizard actions.

/// Prompt shown before a session is reset.
pub const CANCEL_PROMPT: &str = "Are you sure you want to cancel? All progress will be lost.";

/// Prompt shown before drift settings are reset to their defaults.
pub const RESTORE_DEFAULTS_PROMPT: &str =
    "Are you sure you want to restore default settings? This will overwrite your current configuration.";

/// Asks the user a yes/no question.
///
/// Any `FnMut(&str) -> bool` closure is a `Confirm`, which keeps tests and
/// scripted front ends short:
///
/// ```rust
/// use planwright_core::confirm::Confirm;
///
/// let mut always_yes = |_prompt: &str| true;
/// assert!(always_yes.confirm("Proceed?"));
/// ```
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}
