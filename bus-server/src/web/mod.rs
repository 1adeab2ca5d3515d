//! Web layer for the bus timetable server.
//!
//! Provides the HTTP endpoint for next-arrival queries.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
