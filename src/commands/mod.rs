//! Command runners wiring the CLI surface to the controllers.
//!
//! Each runner returns `true` on success; `main` turns `false` into a
//! nonzero exit code.

pub mod notifications;
pub mod plans;
pub mod progress;
mod render;
pub mod session;

use std::io::Read;

use tracing::warn;

use crate::api::{ApiClient, ApiConfig};
use crate::cli::GlobalArgs;
use crate::confirm::{AssumeYes, Confirmation, TermConfirm};
use crate::session::SessionStore;

pub(crate) fn api_client(args: &GlobalArgs) -> ApiClient {
    let mut config = ApiConfig::new(args.api_url.clone());
    if let Some(token) = &args.token {
        config = config.with_token(token.clone());
    }
    ApiClient::new(config)
}

/// Identity handed to the controllers: `--user` wins, then the stored
/// session, else anonymous.
pub(crate) fn current_user(args: &GlobalArgs) -> Option<String> {
    if let Some(user) = &args.user {
        return Some(user.clone());
    }
    let mut store = SessionStore::new();
    match store.load() {
        Ok(()) => store.current_user().map(str::to_string),
        Err(err) => {
            warn!("failed to read session: {err}");
            None
        }
    }
}

pub(crate) fn confirmer(args: &GlobalArgs) -> Box<dyn Confirmation> {
    if args.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(TermConfirm)
    }
}

/// Read a JSON draft from a file path, or stdin when the path is "-".
pub(crate) fn read_draft<T: serde::de::DeserializeOwned>(
    path: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    let contents = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&contents)?)
}

/// Print the draft schema for a resource type.
pub(crate) fn print_schema<T: schemars::JsonSchema>() -> bool {
    let schema = schemars::schema_for!(T);
    match serde_json::to_string_pretty(&schema) {
        Ok(json) => {
            println!("{json}");
            true
        }
        Err(err) => {
            warn!("failed to render schema: {err}");
            false
        }
    }
}
