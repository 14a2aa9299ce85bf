use crate::error::{ClientError, ClientResult};
use crate::session::Session;
use pmt_domain::config::ClientConfig;
use pmt_domain::user::{LoginRequest, User};
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client for the PMT REST API.
///
/// One method per API operation; see the resource sections in this crate.
/// The login session is shared between clones.
#[derive(Debug, Clone)]
pub struct PmtClient {
    /// API root, e.g. `http://localhost:8080/api`.
    base_url: String,
    /// Underlying HTTP client.
    http_client: Client,
    /// Logged-in user, if any.
    session: Session,
}

impl PmtClient {
    /// Builds a client from connection settings.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidConfig`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("pmt-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::InvalidConfig(format!("Failed to build HTTP client: {e}")))?;

        // Normalize base URL: strip trailing slash.
        let base_url = config.base_url.trim_end_matches('/').to_owned();

        Ok(Self { base_url, http_client, session: Session::default() })
    }

    /// Creates a client with a pre-built `reqwest::Client` (for testing).
    #[must_use]
    pub fn with_http_client(base_url: impl Into<String>, http_client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, http_client, session: Session::default() }
    }

    /// The API root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Authentication ────────────────────────────────────────────────

    /// Authenticates via `POST /users/login` and stores the returned user as
    /// the current session.
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<User> {
        let user: User = self.send_json(Method::POST, "/users/login", Some(request)).await?;
        self.session.set(Some(user.clone()));
        debug!(user_id = ?user.id, "logged in");
        Ok(user)
    }

    /// Clears the current session. No server round-trip is involved.
    pub fn logout(&self) {
        self.session.set(None);
    }

    /// The user stored by the last successful [`PmtClient::login`].
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.session.get()
    }

    /// `true` while a session user is present.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.get().is_some()
    }

    /// Registers a new account via `POST /users`.
    pub async fn register(&self, user: &User) -> ClientResult<User> {
        self.send_json(Method::POST, "/users", Some(user)).await
    }

    // ── Users ─────────────────────────────────────────────────────────

    /// `GET /users`
    pub async fn users(&self) -> ClientResult<Vec<User>> {
        self.get_json("/users").await
    }

    /// `GET /users/{id}`
    pub async fn user(&self, id: i64) -> ClientResult<User> {
        self.get_json(&format!("/users/{id}")).await
    }

    // ── Plumbing ──────────────────────────────────────────────────────

    /// Id of the session user, for operations the API scopes to the caller.
    pub(crate) fn session_user_id(&self) -> ClientResult<i64> {
        self.session.get().and_then(|u| u.id).ok_or(ClientError::NotLoggedIn)
    }

    pub(crate) async fn get_json<T>(&self, path: &str) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        self.send_json::<T, ()>(Method::GET, path, None).await
    }

    pub(crate) async fn send_json<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(method, path, body).await?;
        Self::decode_response(response).await
    }

    /// Variant for endpoints that answer with an empty body.
    pub(crate) async fn send_no_content<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        let response = self.send(method, path, body).await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "API call failed");
            Err(ClientError::Api { status, body })
        }
    }

    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> ClientResult<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{path}", self.base_url);
        debug!(%method, %url, "sending API request");

        let mut builder = self.http_client.request(method, &url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        Ok(builder.send().await?)
    }

    async fn decode_response<T>(response: Response) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "API call failed");
            Err(ClientError::Api { status, body })
        }
    }
}
