//! API client
//!
//! One `reqwest::Client` against one base URL, with the session store
//! injected so authenticated calls can pick up the bearer token themselves.
//! A call with no stored token fails locally before any socket is opened.

use reqwest::{Response, StatusCode};
use url::Url;

use innkeep_session::{Session, SessionStore};

use crate::error::ApiError;
use crate::models::{ApiMessage, AuthResponse, Room, RoomsResponse};
use crate::request::{Credentials, NewRoom, Registration, RoomUpdate};
use crate::Result;

#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    sessions: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: &str, sessions: SessionStore) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base.as_str().trim_end_matches('/').to_string(),
            sessions,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// The stored bearer token, or an authentication error without any
    /// network contact.
    fn bearer(&self) -> Result<String> {
        self.sessions.token()?.ok_or(ApiError::NotAuthenticated)
    }

    /// POST /login with JSON credentials. On success the session is
    /// persisted through the injected store before it is returned; on any
    /// failure nothing is written.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let response = self
            .http
            .post(self.endpoint("login"))
            .json(credentials)
            .send()
            .await
            .map_err(transport)?;

        let session = self.accept_auth(response).await?;

        tracing::info!(email = %session.email, "Logged in");

        Ok(session)
    }

    /// POST /register with a multipart form. Persists the returned session
    /// exactly like login.
    pub async fn register(&self, registration: Registration) -> Result<Session> {
        registration.validate()?;

        let response = self
            .http
            .post(self.endpoint("register"))
            .multipart(registration.into_form())
            .send()
            .await
            .map_err(transport)?;

        let session = self.accept_auth(response).await?;

        tracing::info!(email = %session.email, "Registered new account");

        Ok(session)
    }

    /// GET /listRooms.
    pub async fn list_rooms(&self) -> Result<Vec<Room>> {
        let token = self.bearer()?;

        let response = self
            .http
            .get(self.endpoint("listRooms"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(failure(status, response).await);
        }

        let body: RoomsResponse = response.json().await.map_err(decode)?;
        match body.rooms {
            Some(rooms) => Ok(rooms),
            // 200 without a rooms array is still a failed fetch
            None => Err(ApiError::Server {
                status: status.as_u16(),
                message: body
                    .message
                    .unwrap_or_else(|| "Could not fetch room data.".to_string()),
            }),
        }
    }

    /// POST /addRooms with a multipart form. Name, price, and image are
    /// checked locally first.
    pub async fn create_room(&self, room: NewRoom) -> Result<()> {
        room.validate()?;
        let token = self.bearer()?;

        let response = self
            .http
            .post(self.endpoint("addRooms"))
            .bearer_auth(token)
            .multipart(room.into_form()?)
            .send()
            .await
            .map_err(transport)?;

        expect_success(response).await?;

        tracing::info!("Added room");

        Ok(())
    }

    /// PUT /updateRoom/{id}. The image part is only attached when a new one
    /// was picked.
    pub async fn update_room(&self, room_id: i64, update: RoomUpdate) -> Result<()> {
        update.validate()?;
        let token = self.bearer()?;

        let response = self
            .http
            .put(self.endpoint(&format!("updateRoom/{room_id}")))
            .bearer_auth(token)
            .multipart(update.into_form()?)
            .send()
            .await
            .map_err(transport)?;

        expect_success(response).await?;

        tracing::info!(room_id = room_id, "Updated room");

        Ok(())
    }

    /// DELETE /deleteRoom/{id}.
    pub async fn delete_room(&self, room_id: i64) -> Result<()> {
        let token = self.bearer()?;

        let response = self
            .http
            .delete(self.endpoint(&format!("deleteRoom/{room_id}")))
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;

        expect_success(response).await?;

        tracing::info!(room_id = room_id, "Deleted room");

        Ok(())
    }

    /// Shared tail of login/register: require 2xx, require token + user in
    /// the body, persist the session.
    async fn accept_auth(&self, response: Response) -> Result<Session> {
        let status = response.status();
        if !status.is_success() {
            return Err(failure(status, response).await);
        }

        let body: AuthResponse = response.json().await.map_err(decode)?;
        let session = match (body.token, body.user) {
            (Some(token), Some(user)) if !token.is_empty() => {
                Session::new(token, user.user_id.to_string(), user.email)
            }
            _ => {
                return Err(ApiError::UnexpectedResponse(
                    "response did not include a token".to_string(),
                ))
            }
        };

        self.sessions.save(&session)?;
        Ok(session)
    }
}

impl Clone for ApiClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            sessions: self.sessions.clone(),
        }
    }
}

/// Map a non-2xx response to a failure carrying the server's `message`
/// verbatim when it sent one.
async fn failure(status: StatusCode, response: Response) -> ApiError {
    let message = response
        .json::<ApiMessage>()
        .await
        .ok()
        .and_then(|m| m.message)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));

    ApiError::Server {
        status: status.as_u16(),
        message,
    }
}

async fn expect_success(response: Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(failure(status, response).await)
    }
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn decode(e: reqwest::Error) -> ApiError {
    ApiError::UnexpectedResponse(e.to_string())
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use axum::extract::Path;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{delete, get, post, put};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use innkeep_session::SessionStore;
    use innkeep_storage::Database;

    use crate::error::ApiError;
    use crate::request::{Credentials, ImageAttachment, NewRoom, Registration, RoomUpdate};

    use super::ApiClient;

    fn test_sessions() -> SessionStore {
        SessionStore::new(Database::open_in_memory().unwrap())
    }

    fn signed_in_sessions() -> SessionStore {
        let sessions = test_sessions();
        sessions
            .save(&innkeep_session::Session::new(
                "tok-1".into(),
                "42".into(),
                "guest@example.com".into(),
            ))
            .unwrap();
        sessions
    }

    /// Serve a router on an ephemeral loopback port; returns the base URL.
    async fn serve(router: Router) -> Result<String> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        Ok(format!("http://{addr}"))
    }

    fn bearer_of(headers: &HeaderMap) -> Option<&str> {
        headers
            .get("authorization")?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")
    }

    #[tokio::test]
    async fn login_persists_session() -> Result<()> {
        let base = serve(Router::new().route(
            "/login",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["email"], "guest@example.com");
                Json(json!({
                    "token": "tok-9",
                    "user": {"user_id": 42, "email": "guest@example.com"}
                }))
            }),
        ))
        .await?;

        let sessions = test_sessions();
        let client = ApiClient::new(&base, sessions.clone()).unwrap();

        let session = client
            .login(&Credentials {
                email: "guest@example.com".into(),
                password: "secret".into(),
            })
            .await
            .unwrap();

        assert_eq!(session.token, "tok-9");
        assert_eq!(session.user_id, "42");
        assert_eq!(sessions.load().unwrap(), Some(session));
        Ok(())
    }

    #[tokio::test]
    async fn rejected_login_writes_nothing() -> Result<()> {
        let base = serve(Router::new().route(
            "/login",
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"message": "Invalid credentials"})),
                )
            }),
        ))
        .await?;

        let sessions = test_sessions();
        let client = ApiClient::new(&base, sessions.clone()).unwrap();

        let err = client
            .login(&Credentials {
                email: "guest@example.com".into(),
                password: "wrong".into(),
            })
            .await
            .unwrap_err();

        match err {
            ApiError::Server { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid credentials");
            }
            other => panic!("expected server error, got {other:?}"),
        }
        assert!(sessions.load().unwrap().is_none());
        Ok(())
    }

    #[tokio::test]
    async fn login_response_without_token_is_a_failure() -> Result<()> {
        let base = serve(Router::new().route(
            "/login",
            post(|| async { Json(json!({"user": {"user_id": 1, "email": "a@b.test"}})) }),
        ))
        .await?;

        let sessions = test_sessions();
        let client = ApiClient::new(&base, sessions.clone()).unwrap();

        let err = client
            .login(&Credentials {
                email: "a@b.test".into(),
                password: "pw".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::UnexpectedResponse(_)));
        assert!(sessions.load().unwrap().is_none());
        Ok(())
    }

    #[tokio::test]
    async fn register_persists_session() -> Result<()> {
        let base = serve(Router::new().route(
            "/register",
            post(|| async {
                Json(json!({
                    "token": "tok-new",
                    "user": {"user_id": 7, "email": "new@example.com"}
                }))
            }),
        ))
        .await?;

        let sessions = test_sessions();
        let client = ApiClient::new(&base, sessions.clone()).unwrap();

        let session = client
            .register(Registration {
                username: "newguest".into(),
                email: "new@example.com".into(),
                password: "secret".into(),
            })
            .await
            .unwrap();

        assert_eq!(session.user_id, "7");
        assert!(sessions.load().unwrap().is_some());
        Ok(())
    }

    #[tokio::test]
    async fn list_rooms_sends_bearer_token() -> Result<()> {
        let base = serve(Router::new().route(
            "/listRooms",
            get(|headers: HeaderMap| async move {
                assert_eq!(bearer_of(&headers), Some("tok-1"));
                Json(json!({
                    "rooms": [
                        {"id": 1, "name": "Single", "price": 80.0},
                        {"id": 2, "name": "Sea View", "type": "suite", "price": 250.0}
                    ]
                }))
            }),
        ))
        .await?;

        let client = ApiClient::new(&base, signed_in_sessions()).unwrap();
        let rooms = client.list_rooms().await.unwrap();

        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[1].name, "Sea View");
        Ok(())
    }

    #[tokio::test]
    async fn missing_token_short_circuits_locally() {
        // Port 9 is the discard service; nothing is listening. The call must
        // fail on the missing token before a connection is ever attempted.
        let client = ApiClient::new("http://127.0.0.1:9", test_sessions()).unwrap();

        let err = client.list_rooms().await.unwrap_err();
        assert!(matches!(err, ApiError::NotAuthenticated));
    }

    #[tokio::test]
    async fn create_room_validates_before_network() {
        let client = ApiClient::new("http://127.0.0.1:9", signed_in_sessions()).unwrap();

        let err = client
            .create_room(NewRoom {
                name: "Garden Twin".into(),
                price: Some(120.0),
                // no image
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let err = client
            .create_room(NewRoom {
                name: "Garden Twin".into(),
                image: Some(ImageAttachment::jpeg(vec![0xFF, 0xD8])),
                // no price
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn create_and_update_room() -> Result<()> {
        let base = serve(
            Router::new()
                .route(
                    "/addRooms",
                    post(|headers: HeaderMap| async move {
                        assert_eq!(bearer_of(&headers), Some("tok-1"));
                        Json(json!({"message": "Room added"}))
                    }),
                )
                .route(
                    "/updateRoom/{id}",
                    put(|Path(id): Path<i64>| async move {
                        assert_eq!(id, 5);
                        Json(json!({"message": "Room updated"}))
                    }),
                ),
        )
        .await?;

        let client = ApiClient::new(&base, signed_in_sessions()).unwrap();

        client
            .create_room(NewRoom {
                name: "Garden Twin".into(),
                room_type: Some("twin".into()),
                capacity: Some(2),
                price: Some(120.0),
                image: Some(ImageAttachment::jpeg(vec![0xFF, 0xD8, 0xFF])),
                ..Default::default()
            })
            .await
            .unwrap();

        client
            .update_room(
                5,
                RoomUpdate {
                    name: "Garden Twin".into(),
                    price: Some(135.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        Ok(())
    }

    #[tokio::test]
    async fn server_message_surfaces_verbatim() -> Result<()> {
        let base = serve(Router::new().route(
            "/deleteRoom/{id}",
            delete(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({"message": "Room has active bookings"})),
                )
            }),
        ))
        .await?;

        let client = ApiClient::new(&base, signed_in_sessions()).unwrap();
        let err = client.delete_room(3).await.unwrap_err();

        assert_eq!(err.to_string(), "Room has active bookings");
        Ok(())
    }

    #[tokio::test]
    async fn bodyless_failure_gets_generic_message() -> Result<()> {
        let base = serve(Router::new().route(
            "/deleteRoom/{id}",
            delete(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        ))
        .await?;

        let client = ApiClient::new(&base, signed_in_sessions()).unwrap();
        let err = client.delete_room(3).await.unwrap_err();

        assert_eq!(err.to_string(), "Request failed with status 500");
        Ok(())
    }

    #[tokio::test]
    async fn transport_failure_is_normalized() -> Result<()> {
        // Grab an ephemeral port, then close the listener so connections
        // are refused.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let base = format!("http://{}", listener.local_addr()?);
        drop(listener);

        let client = ApiClient::new(&base, signed_in_sessions()).unwrap();
        let err = client.list_rooms().await.unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
        Ok(())
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = ApiClient::new("not a url", test_sessions()).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
    }
}
