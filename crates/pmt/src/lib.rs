//! Facade crate for PMT shared modules.
//! Re-exports domain/kernel primitives and the API client.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `pmt` as a dependency and pull what you need from [`domain`],
//!   [`kernel`], or [`client`].
//! - Or `use pmt::prelude::*` for the common surface (formatters, validators,
//!   code enums, and the client types).

pub use pmt_client as client;
pub use pmt_domain as domain;
pub use pmt_kernel as kernel;

/// Common surface for applications.
pub mod prelude {
    pub use pmt_client::{ClientError, ClientResult, PmtClient};
    pub use pmt_domain::config::ClientConfig;
    pub use pmt_kernel::prelude::*;
}
