//! Session Store
//!
//! Owns the single persisted session record. Screens and the API client get
//! an injected handle to this store rather than reaching into storage
//! themselves, so tests can substitute an in-memory database.

use innkeep_storage::Database;

use crate::session::Session;
use crate::Result;

/// Fixed storage key for the session record.
const SESSION_KEY: &str = "user_info";

#[derive(Debug)]
pub struct SessionStore {
    db: Database,
}

impl SessionStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Persist a session, replacing any existing one.
    pub fn save(&self, session: &Session) -> Result<()> {
        let json = serde_json::to_string(session)?;
        self.db.set_setting(SESSION_KEY, &json)?;

        tracing::info!(email = %session.email, "Saved session");

        Ok(())
    }

    /// Load the persisted session, if any.
    ///
    /// Called at startup to pick the initial screen and by every
    /// authenticated call-site to obtain the bearer token.
    pub fn load(&self) -> Result<Option<Session>> {
        match self.db.get_setting(SESSION_KEY)? {
            Some(json) => {
                let session = serde_json::from_str(&json)?;
                Ok(Some(session))
            }
            None => Ok(None),
        }
    }

    /// Remove the persisted session (logout). Idempotent.
    pub fn clear(&self) -> Result<()> {
        self.db.delete_setting(SESSION_KEY)?;

        tracing::info!("Cleared session");

        Ok(())
    }

    /// The stored bearer token, if a session exists.
    pub fn token(&self) -> Result<Option<String>> {
        Ok(self.load()?.map(|s| s.token))
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
