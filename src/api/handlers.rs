//! HTTP request handlers for the personnel records API.
//!
//! Every endpoint is a read-only view over the loaded [`Dataset`](crate::store::Dataset).
//! Credentials are not exposed.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::Record;
use crate::store::LoadReport;

use super::request::{AttendanceQuery, LateHoursQuery};
use super::response::{ApiErrorResponse, LateHoursResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status_handler))
        .route("/employees", get(list_employees_handler))
        .route("/employees/:id", get(employee_handler))
        .route("/employees/:id/attendance", get(employee_attendance_handler))
        .route("/employees/:id/late-hours", get(late_hours_handler))
        .route("/employees/:id/leave-requests", get(employee_leave_handler))
        .route("/attendance", get(list_attendance_handler))
        .route("/leave-requests", get(list_leave_handler))
        .with_state(state)
}

fn error_response(correlation_id: Uuid, error: StoreError) -> Response {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    ApiErrorResponse::from(error).into_response()
}

fn rejection_message(rejection: QueryRejection) -> StoreError {
    StoreError::InvalidQuery {
        message: rejection.body_text(),
    }
}

/// Handler for GET /status: the load report of every kind.
async fn status_handler(State(state): State<AppState>) -> Json<Vec<LoadReport>> {
    Json(state.dataset().reports().to_vec())
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Json<Vec<Record>> {
    Json(state.dataset().all_employees())
}

/// Handler for GET /attendance.
async fn list_attendance_handler(State(state): State<AppState>) -> Json<Vec<Record>> {
    Json(state.dataset().all_attendance())
}

/// Handler for GET /leave-requests.
async fn list_leave_handler(State(state): State<AppState>) -> Json<Vec<Record>> {
    Json(state.dataset().all_leave_requests())
}

/// Handler for GET /employees/{id}.
async fn employee_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.dataset().employee_by_id(&id) {
        Some(employee) => {
            info!(correlation_id = %correlation_id, employee_id = %id, "Employee found");
            (StatusCode::OK, Json(employee)).into_response()
        }
        None => error_response(correlation_id, StoreError::EmployeeNotFound { id }),
    }
}

/// Handler for GET /employees/{id}/attendance, optionally filtered by
/// `start` and `end` (inclusive).
async fn employee_attendance_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<AttendanceQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let range = match query.map_err(rejection_message).and_then(|Query(q)| q.range()) {
        Ok(range) => range,
        Err(err) => return error_response(correlation_id, err),
    };

    let dataset = state.dataset();
    let rows = match range {
        Some((start, end)) => dataset.attendance_by_id_and_range(&id, start, end),
        None => dataset.attendance_by_id(&id),
    };
    info!(
        correlation_id = %correlation_id,
        employee_id = %id,
        rows = rows.len(),
        "Attendance query completed"
    );
    (StatusCode::OK, Json(rows)).into_response()
}

/// Handler for GET /employees/{id}/late-hours?month=YYYY-MM.
async fn late_hours_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<LateHoursQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let month = match query.map_err(rejection_message).and_then(|Query(q)| q.month()) {
        Ok(month) => month,
        Err(err) => return error_response(correlation_id, err),
    };

    let late_hours = state.dataset().total_late_hours(&id, month);
    info!(
        correlation_id = %correlation_id,
        employee_id = %id,
        month = %month,
        late_hours = %late_hours,
        "Late hours computed"
    );
    (
        StatusCode::OK,
        Json(LateHoursResponse {
            employee_id: id,
            month: month.to_string(),
            late_hours,
        }),
    )
        .into_response()
}

/// Handler for GET /employees/{id}/leave-requests.
async fn employee_leave_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Vec<Record>> {
    Json(state.dataset().leave_requests_by_id(&id))
}
