//! # API crate: REST client for the society backend
//!
//! Every screen talks to the backend through [`ApiClient`]. The client is
//! configured with a base URL (from `society.toml`) and sends the session
//! cookie with each request.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `reqwest` wrapper: URL joining, credentials, envelope decoding, multipart bodies |
//! | [`endpoints`] | The one table of backend paths |
//! | [`error`] | [`ApiError`]: status classification and backend message extraction |
//! | [`auth`] | Identity, login, logout and resident registration; [`store::SessionBackend`] for [`ApiClient`] |
//! | [`notices`] | Notice list/detail and multipart create/update, delete |
//! | [`visitors`] | Pre-approval CRUD, paginated listings, gate check-in and check-out |
//!
//! ## Wire contract
//!
//! - Single resources may come wrapped in `{success, message, data}`; the
//!   wrapper is optional and stripped by [`client::decode_resource`].
//! - Paginated listings are bare `{data, total}` ([`store::Page`]).
//! - Error bodies carry `error` and/or `message`; [`ApiError::user_message`]
//!   surfaces it, falling back to a caller-provided string.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod notices;
pub mod visitors;

pub use client::ApiClient;
pub use error::ApiError;

pub use store::{Arrival, Notice, Page, PreApproval, Role, User};
