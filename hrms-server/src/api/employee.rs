//! Employee API Handlers
//!
//! One storage call per request (create also reads the new document back).

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use shared::error::{AppError, ErrorCode};
use shared::models::{Employee, EmployeeInput};

use super::extract::JsonBody;
use crate::db::{RepoError, parse_object_id};
use crate::state::AppState;

type ApiResult<T> = Result<T, AppError>;

/// Plain confirmation returned by a successful delete
pub const DELETED_MESSAGE: &str = "Record Deleted";

/// GET /employee: every employee, `[]` when the collection is empty
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    let employees = state.employees.find_all().await?;
    Ok(Json(employees))
}

/// POST /employee: insert, then return the stored record
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<EmployeeInput>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let id = state.employees.insert(&payload).await?;

    let created = state
        .employees
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::internal(format!("Employee {id} not found after insert")))?;

    tracing::info!(id = %created.id, "Employee created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /employee/{id}: overwrite name, salary and age
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<EmployeeInput>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let object_id = parse_object_id(&id)?;

    let updated = state
        .employees
        .update(object_id, &payload)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::EmployeeNoMatch,
                format!("no employee matched id {id}"),
            )
            .with_detail("id", id.clone())
        })?;

    tracing::info!(id = %updated.id, "Employee updated");
    Ok((StatusCode::CREATED, Json(updated)))
}

/// DELETE /employee/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<&'static str>> {
    let object_id = parse_object_id(&id)?;

    let deleted = state.employees.delete(object_id).await?;
    if deleted < 1 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")).into());
    }

    tracing::info!(id = %id, "Employee deleted");
    Ok(Json(DELETED_MESSAGE))
}
