use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::student::Student;
use service::Lookup;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/api/student", tag = "student",
    responses(
        (status = 200, description = "All students", body = [crate::openapi::StudentDoc]),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Student>>, JsonApiError> {
    Ok(Json(state.students.list().await?))
}

#[utoipa::path(
    post, path = "/api/student", tag = "student",
    request_body = crate::openapi::StudentDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::StudentDoc),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(student): Json<Student>,
) -> Result<Json<Student>, JsonApiError> {
    let created = state.students.create(student).await?;
    info!(id = created.id, "student created");
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/api/student/{id}", tag = "student",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::StudentDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Student>, JsonApiError> {
    match state.students.get(id).await? {
        Lookup::Found(student) => Ok(Json(student)),
        Lookup::NotFound => Err(JsonApiError::not_found("student", id)),
    }
}

/// The path id wins over any id in the body.
#[utoipa::path(
    put, path = "/api/student/{id}", tag = "student",
    params(("id" = i32, Path, description = "Student id")),
    request_body = crate::openapi::StudentDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::StudentDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(mut student): Json<Student>,
) -> Result<Json<Student>, JsonApiError> {
    student.id = id;
    match state.students.update(student).await? {
        Lookup::Found(updated) => Ok(Json(updated)),
        Lookup::NotFound => Err(JsonApiError::not_found("student", id)),
    }
}

#[utoipa::path(
    delete, path = "/api/student/{id}", tag = "student",
    params(("id" = i32, Path, description = "Student id")),
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
    if state.students.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("student", id))
    }
}
