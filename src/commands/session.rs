//! `session` subcommands.

use tracing::info;

use crate::cli::SessionCommand;
use crate::notify::{Notifier, TermNotifier};
use crate::session::SessionStore;

pub fn run(command: SessionCommand) -> bool {
    let mut store = SessionStore::new();
    if let Err(err) = store.load() {
        TermNotifier.error(&format!("Could not read session: {err}"));
        return false;
    }

    match command {
        SessionCommand::Login { user_id } => match store.login(user_id.clone()) {
            Ok(()) => {
                info!(user_id = %user_id, "session stored");
                println!("Logged in as {user_id}");
                true
            }
            Err(err) => {
                TermNotifier.error(&format!("Could not store session: {err}"));
                false
            }
        },
        SessionCommand::Logout => match store.logout() {
            Ok(()) => {
                println!("Logged out.");
                true
            }
            Err(err) => {
                TermNotifier.error(&format!("Could not clear session: {err}"));
                false
            }
        },
        SessionCommand::Whoami => {
            match store.current_user() {
                Some(user) => {
                    println!("{user}");
                    if let Some(at) = store.logged_in_at() {
                        println!("logged in {}", super::render::relative(at));
                    }
                }
                None => println!("anonymous"),
            }
            true
        }
    }
}
