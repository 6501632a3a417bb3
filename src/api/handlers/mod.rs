use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::AppState;
use crate::error::StoreError;
use crate::models::*;

type ApiResult<T> = Result<T, (StatusCode, String)>;

// ============================================================
// Error Handling
// ============================================================

/// Map a store failure onto an HTTP response.
///
/// Constraint violations are the client's doing and are reported verbatim.
/// Everything else is logged in full and answered with a generic message.
fn store_error(e: StoreError) -> (StatusCode, String) {
    match e {
        StoreError::ConstraintViolation(msg) => {
            tracing::warn!("Rejected write: {}", msg);
            (StatusCode::CONFLICT, msg)
        }
        StoreError::Unavailable(err) => {
            tracing::error!("Store unavailable: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "Store unavailable".to_string(),
            )
        }
        StoreError::Sqlite(err) => {
            tracing::error!("Internal error: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

fn department_not_found(id: i64) -> (StatusCode, String) {
    (
        StatusCode::NOT_FOUND,
        format!("Department not found with id: {}", id),
    )
}

fn employee_not_found(id: i64) -> (StatusCode, String) {
    (
        StatusCode::NOT_FOUND,
        format!("Employee not found with id: {}", id),
    )
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Departments
// ============================================================

pub async fn list_departments(State(state): State<AppState>) -> ApiResult<Json<Vec<Department>>> {
    state.departments.get_all().map(Json).map_err(store_error)
}

pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Department>> {
    state
        .departments
        .get_by_id(id)
        .map_err(store_error)?
        .map(Json)
        .ok_or_else(|| department_not_found(id))
}

pub async fn create_department(
    State(state): State<AppState>,
    Json(input): Json<Department>,
) -> ApiResult<(StatusCode, Json<Department>)> {
    state
        .departments
        .add(input)
        .map(|d| (StatusCode::CREATED, Json(d)))
        .map_err(store_error)
}

pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<Department>,
) -> ApiResult<Json<Department>> {
    state
        .departments
        .update(id, input)
        .map_err(store_error)?
        .map(Json)
        .ok_or_else(|| department_not_found(id))
}

/// Always 204: deleting an unknown department is not an error.
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.departments.delete(id).map_err(store_error)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_department_employees(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Vec<Employee>>> {
    state
        .departments
        .get_by_id(id)
        .map_err(store_error)?
        .ok_or_else(|| department_not_found(id))?;

    state
        .employees
        .get_by_department(id)
        .map(Json)
        .map_err(store_error)
}

// ============================================================
// Employees
// ============================================================

pub async fn list_employees(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<EmployeeWithDepartment>>> {
    state
        .employees
        .get_all_with_department()
        .map(Json)
        .map_err(store_error)
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<EmployeeWithDepartment>> {
    state
        .employees
        .get_by_id_with_department(id)
        .map_err(store_error)?
        .map(Json)
        .ok_or_else(|| employee_not_found(id))
}

pub async fn create_employee(
    State(state): State<AppState>,
    Json(input): Json<Employee>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    state
        .employees
        .add(input)
        .map(|e| (StatusCode::CREATED, Json(e)))
        .map_err(store_error)
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<Employee>,
) -> ApiResult<Json<Employee>> {
    state
        .employees
        .update(id, input)
        .map_err(store_error)?
        .map(Json)
        .ok_or_else(|| employee_not_found(id))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.employees.delete(id).map_err(store_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Query parameters for the salary range filter. Both bounds are inclusive.
#[derive(Debug, Deserialize)]
pub struct SalaryRangeQuery {
    pub min: f64,
    pub max: f64,
}

pub async fn list_employees_by_salary(
    State(state): State<AppState>,
    Query(query): Query<SalaryRangeQuery>,
) -> ApiResult<Json<Vec<Employee>>> {
    state
        .employees
        .get_by_salary_range(query.min, query.max)
        .map(Json)
        .map_err(store_error)
}
