//! Persisted session identity.
//!
//! The platform issues a user id at login; this store keeps it in
//! `~/.learnloop/session.json` between invocations. A missing file or id
//! means the client runs anonymously: reads work, mutation affordances
//! stay hidden.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionData {
    pub user_id: Option<String>,
    pub logged_in_at: Option<DateTime<Utc>>,
}

pub struct SessionStore {
    session_path: PathBuf,
    data: SessionData,
}

impl SessionStore {
    pub fn new() -> Self {
        let home = dirs::home_dir().expect("couldn't find home dir");
        let session_path = home.join(".learnloop").join("session.json");
        Self {
            session_path,
            data: SessionData::default(),
        }
    }

    /// Store rooted at an explicit path (tests, alternate profiles).
    pub fn at_path(session_path: PathBuf) -> Self {
        Self {
            session_path,
            data: SessionData::default(),
        }
    }

    /// Read the persisted session if one exists.
    pub fn load(&mut self) -> Result<(), SessionError> {
        if self.session_path.exists() {
            let mut file = File::open(&self.session_path)?;
            let mut contents = String::new();
            file.read_to_string(&mut contents)?;
            self.data = serde_json::from_str(&contents)?;
        }
        Ok(())
    }

    pub fn current_user(&self) -> Option<&str> {
        self.data.user_id.as_deref()
    }

    pub fn logged_in_at(&self) -> Option<DateTime<Utc>> {
        self.data.logged_in_at
    }

    pub fn login(&mut self, user_id: String) -> Result<(), SessionError> {
        self.data.user_id = Some(user_id);
        self.data.logged_in_at = Some(Utc::now());
        self.save()
    }

    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.data = SessionData::default();
        self.save()
    }

    /// Persist with a temporary file and an atomic rename to avoid partial
    /// writes.
    fn save(&self) -> Result<(), SessionError> {
        if let Some(parent) = self.session_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp = self.session_path.with_extension("tmp");
        let mut f = File::create(&temp)?;
        let content = serde_json::to_string_pretty(&self.data)?;
        f.write_all(content.as_bytes())?;
        f.sync_all()?;
        fs::rename(temp, &self.session_path)?;
        Ok(())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_persists_across_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = SessionStore::at_path(path.clone());
        store.load().unwrap();
        assert_eq!(store.current_user(), None);

        store.login("u42".to_string()).unwrap();

        let mut reopened = SessionStore::at_path(path);
        reopened.load().unwrap();
        assert_eq!(reopened.current_user(), Some("u42"));
        assert!(reopened.logged_in_at().is_some());
    }

    #[test]
    fn logout_clears_the_identity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = SessionStore::at_path(path.clone());
        store.login("u42".to_string()).unwrap();
        store.logout().unwrap();

        let mut reopened = SessionStore::at_path(path);
        reopened.load().unwrap();
        assert_eq!(reopened.current_user(), None);
    }

    #[test]
    fn missing_file_reads_as_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::at_path(dir.path().join("absent.json"));
        store.load().unwrap();
        assert_eq!(store.current_user(), None);
    }

    #[test]
    fn corrupt_file_surfaces_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = SessionStore::at_path(path);
        assert!(matches!(store.load(), Err(SessionError::Json(_))));
    }
}
