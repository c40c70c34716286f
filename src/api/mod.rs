//! HTTP API layer built on axum.
//!
//! Exposes the rule repository and editing workflows over a small REST
//! surface. The handlers hold no state of their own; everything lives in
//! the shared [`Workspace`] behind [`AppState`].

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::RulePayload;
pub use response::{ApiError, ApiErrorResponse, RuleListResponse};
pub use state::{AppState, Workspace};
