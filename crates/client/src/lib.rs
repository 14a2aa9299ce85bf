//! Typed async client for the PMT REST API.
//!
//! [`PmtClient`] wraps `reqwest::Client` with one method per API operation:
//! authentication and users, projects and their members, roles, tasks with
//! their change history, and the notification inbox. Responses deserialize
//! into the `pmt_domain` types; failures surface as [`ClientError`].
//!
//! Cloning the client is cheap, and clones share the login session.
//!
//! ```rust,no_run
//! use pmt_client::PmtClient;
//! use pmt_domain::config::ClientConfig;
//! use pmt_domain::user::LoginRequest;
//!
//! # async fn run() -> Result<(), pmt_client::ClientError> {
//! let client = PmtClient::new(&ClientConfig::default())?;
//! let user = client
//!     .login(&LoginRequest { email: "ada@example.com".into(), password: "secret".into() })
//!     .await?;
//! let projects = client.projects().await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod notifications;
mod projects;
mod session;
mod tasks;

pub use client::PmtClient;
pub use error::{ClientError, ClientResult};
