//! Wire shapes the backend returns

use serde::{Deserialize, Serialize};

/// A room as the server reports it. Server-owned; the client holds
/// ephemeral copies fetched per screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub price: f64,
    #[serde(default = "default_status")]
    pub status: String,
    /// Bare file name; see [`Room::image_url`] for the display URL.
    #[serde(default)]
    pub image: Option<String>,
}

fn default_status() -> String {
    "available".to_string()
}

impl Room {
    /// Full URL of the room photo, served from the backend's public storage.
    pub fn image_url(&self, base_url: &str) -> Option<String> {
        self.image.as_ref().map(|image| {
            format!(
                "{}/storage/images/rooms/{}",
                base_url.trim_end_matches('/'),
                image
            )
        })
    }
}

/// Identity block inside login/registration responses.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub user_id: i64,
    pub email: String,
}

/// Login/registration response. Both fields must be present for the
/// response to count as a successful sign-in.
#[derive(Debug, Deserialize)]
pub(crate) struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RoomsResponse {
    #[serde(default)]
    pub rooms: Option<Vec<Room>>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error (and generic success) body: `{"message": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}
