//! Yes/no gate in front of destructive operations.

use dialoguer::Confirm;

/// Blocking confirmation capability. Injected so destructive flows can be
/// driven non-interactively and scripted in tests; declining is a no-op
/// for the caller, never an error.
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Interactive terminal prompt, defaulting to "no".
#[derive(Clone, Copy, Debug, Default)]
pub struct TermConfirm;

impl Confirmation for TermConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        // Prompt I/O failure (e.g. no TTY) counts as a decline.
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// Auto-approval for `--yes` runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct AssumeYes;

impl Confirmation for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
