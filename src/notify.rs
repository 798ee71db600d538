//! User-visible outcome reporting.
//!
//! Load and mutation outcomes surface through a [`Notifier`] rather than
//! ad-hoc printing, so controllers stay renderer-agnostic and tests can
//! capture exactly what was reported.

use colored::Colorize;

/// Transient, non-blocking outcome channel.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Prints colored status lines; successes to stdout, failures to stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn success(&self, message: &str) {
        println!("{} {message}", "✓".green().bold());
    }

    fn error(&self, message: &str) {
        eprintln!("{} {message}", "✗".red().bold());
    }
}
