//! Client side of the booking backend's REST API.
//!
//! Only the authentication endpoints are modelled: they are the source of the
//! [`Identity`](authz::types::Identity) values the session store remembers.

pub mod client;
pub mod error;
pub mod models;

pub use client::{BackendClient, ClientConfig};
pub use error::{ApiError, ApiResult};
pub use models::Credentials;
