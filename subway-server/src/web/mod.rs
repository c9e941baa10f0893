//! Web layer for the subway route service.
//!
//! Provides HTTP endpoints for browsing enumerated routes and finding paths.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
