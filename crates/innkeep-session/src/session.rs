//! Session data structure

use serde::{Deserialize, Serialize};

/// The persisted record of a signed-in user.
///
/// Serialized shape matches the record the app has always stored:
/// `{"token": ..., "userId": ..., "email": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Opaque bearer token returned by the backend
    pub token: String,
    /// Backend user id (numeric server-side, kept as text here)
    pub user_id: String,
    /// Email the user signed in with
    pub email: String,
}

impl Session {
    pub fn new(token: String, user_id: String, email: String) -> Self {
        Self {
            token,
            user_id,
            email,
        }
    }
}
