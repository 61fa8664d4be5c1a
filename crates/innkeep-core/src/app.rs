//! Main app state container
//!
//! Owns the database, the session store, the API client, and the booking
//! ledger. Screens hold a handle to this and nothing else.

use innkeep_api::{ApiClient, Credentials, Registration};
use innkeep_bookings::BookingLedger;
use innkeep_session::{Session, SessionStore};
use innkeep_storage::Database;

use crate::config::Config;
use crate::Result;

/// Which flow the app opens into after startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialRoute {
    /// No persisted session: authentication flow
    Login,
    /// Persisted session found: authenticated landing screen
    Home,
}

pub struct App {
    config: Config,
    sessions: SessionStore,
    api: ApiClient,
    bookings: BookingLedger,
}

impl App {
    /// Initialize the app against the on-disk database.
    pub fn new(config: Config) -> Result<Self> {
        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        Self::with_database(config, db)
    }

    /// Wire the app around an already-open database. Tests hand in
    /// `Database::open_in_memory()` here.
    pub fn with_database(config: Config, db: Database) -> Result<Self> {
        let sessions = SessionStore::new(db);
        let api = ApiClient::new(&config.api_base_url, sessions.clone())?;
        let bookings = BookingLedger::with_sample_data();

        Ok(Self {
            config,
            sessions,
            api,
            bookings,
        })
    }

    /// Decide the first screen from the persisted session.
    pub fn initial_route(&self) -> Result<InitialRoute> {
        let route = match self.sessions.load()? {
            Some(session) => {
                tracing::info!(email = %session.email, "Restoring signed-in session");
                InitialRoute::Home
            }
            None => InitialRoute::Login,
        };

        Ok(route)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        Ok(self.api.login(credentials).await?)
    }

    pub async fn register(&self, registration: Registration) -> Result<Session> {
        Ok(self.api.register(registration).await?)
    }

    /// Drop the persisted session. Safe to call when already signed out.
    pub fn logout(&self) -> Result<()> {
        self.sessions.clear()?;

        tracing::info!("Logged out");

        Ok(())
    }

    pub fn current_session(&self) -> Result<Option<Session>> {
        Ok(self.sessions.load()?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn bookings(&self) -> &BookingLedger {
        &self.bookings
    }
}
