use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod employees;
pub mod students;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, OpenAPI document and the
/// student and employee resources.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let records = Router::new()
        .route("/api/student", get(students::list).post(students::create))
        .route(
            "/api/student/:id",
            get(students::get).put(students::update).delete(students::delete),
        )
        .route("/api/employee", get(employees::list).post(employees::create))
        .route(
            "/api/employee/:id",
            get(employees::get).put(employees::update).delete(employees::delete),
        );

    public
        .merge(records)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use models::{employee::EmployeeData, student::StudentData};
    use service::employee::EmployeeService;
    use service::record::repository::mock::InMemoryRepository;
    use service::student::StudentService;
    use tower::ServiceExt;

    use super::*;
    use crate::startup::build_cors;

    fn app() -> Router {
        let state = ServerState::new(
            StudentService::new(Arc::new(InMemoryRepository::<StudentData>::new())),
            EmployeeService::new(Arc::new(InMemoryRepository::<EmployeeData>::new())),
        );
        build_router(state, build_cors())
    }

    #[tokio::test]
    async fn health_ok() {
        let res = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn preflight_allows_any_origin() {
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/student")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
            .body(Body::empty())
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn delete_of_missing_employee_is_404() {
        let req = Request::delete("/api/employee/5").body(Body::empty()).unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
