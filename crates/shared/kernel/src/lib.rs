//! Kernel utilities shared across the workspace.
//! Keep this crate lightweight; it hosts the display formatters, the form
//! validation predicates, and config loading used by the client and the apps.
//!
//! ## Formatting
//! ```rust
//! use pmt_kernel::format;
//!
//! assert_eq!(format::format_username("jAsoN"), "Jason");
//! assert_eq!(format::format_duration(90.0), "1h 30m");
//! ```
//!
//! ## Validation
//! ```rust
//! use pmt_kernel::validate;
//!
//! assert!(validate::is_valid_email("user@example.com"));
//! assert!(!validate::is_valid_username("ab"));
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use pmt_domain::config::ClientConfig;
//! use pmt_kernel::config::load_config;
//!
//! let cfg: ClientConfig = load_config(Some("pmt")).unwrap();
//! ```

pub mod config;
pub mod format;
pub mod prelude;
pub mod validate;

pub use pmt_domain as domain;
