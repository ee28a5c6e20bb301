//! HTTP API module for the personnel record store.
//!
//! This module exposes the read-only query surface as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceQuery, LateHoursQuery};
pub use response::{ApiError, ApiErrorResponse, LateHoursResponse};
pub use state::AppState;
