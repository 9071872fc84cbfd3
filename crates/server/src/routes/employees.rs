use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::employee::Employee;
use service::Lookup;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/api/employee", tag = "employee",
    responses(
        (status = 200, description = "All employees", body = [crate::openapi::EmployeeDoc]),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Employee>>, JsonApiError> {
    Ok(Json(state.employees.list().await?))
}

#[utoipa::path(
    post, path = "/api/employee", tag = "employee",
    request_body = crate::openapi::EmployeeDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::EmployeeDoc),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(employee): Json<Employee>,
) -> Result<Json<Employee>, JsonApiError> {
    let created = state.employees.create(employee).await?;
    info!(id = created.id, "employee created");
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/api/employee/{id}", tag = "employee",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Employee>, JsonApiError> {
    match state.employees.get(id).await? {
        Lookup::Found(employee) => Ok(Json(employee)),
        Lookup::NotFound => Err(JsonApiError::not_found("employee", id)),
    }
}

/// The path id wins over any id in the body.
#[utoipa::path(
    put, path = "/api/employee/{id}", tag = "employee",
    params(("id" = i32, Path, description = "Employee id")),
    request_body = crate::openapi::EmployeeDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(mut employee): Json<Employee>,
) -> Result<Json<Employee>, JsonApiError> {
    employee.id = id;
    match state.employees.update(employee).await? {
        Lookup::Found(updated) => Ok(Json(updated)),
        Lookup::NotFound => Err(JsonApiError::not_found("employee", id)),
    }
}

#[utoipa::path(
    delete, path = "/api/employee/{id}", tag = "employee",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, JsonApiError> {
    if state.employees.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("employee", id))
    }
}
