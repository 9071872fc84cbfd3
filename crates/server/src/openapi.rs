use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Wire shape of a student. Timestamps are `yyyy-MM-dd HH:mm:ss` at +08:00
/// and ignored on input.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDoc {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub student_number: String,
    pub email: String,
    pub department: String,
    #[schema(example = "2024-03-01 09:30:00")]
    pub created: Option<String>,
    #[schema(example = "2024-03-01 09:30:00")]
    pub last_updated: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDoc {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    #[schema(example = "2024-03-01 09:30:00")]
    pub created: Option<String>,
    #[schema(example = "2024-03-01 09:30:00")]
    pub last_updated: Option<String>,
}

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::students::list,
        crate::routes::students::create,
        crate::routes::students::get,
        crate::routes::students::update,
        crate::routes::students::delete,
        crate::routes::employees::list,
        crate::routes::employees::create,
        crate::routes::employees::get,
        crate::routes::employees::update,
        crate::routes::employees::delete,
    ),
    components(
        schemas(
            HealthResponse,
            StudentDoc,
            EmployeeDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "student"),
        (name = "employee")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_both_resources() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = json["paths"].as_object().unwrap();
        for p in ["/health", "/api/student", "/api/student/{id}", "/api/employee", "/api/employee/{id}"] {
            assert!(paths.contains_key(p), "missing {p}");
        }
        assert!(json["components"]["schemas"]["StudentDoc"]["properties"]["studentNumber"].is_object());
        for doc in ["StudentDoc", "EmployeeDoc"] {
            let props = &json["components"]["schemas"][doc]["properties"];
            assert_eq!(props["created"]["example"], "2024-03-01 09:30:00", "{doc}");
            assert_eq!(props["lastUpdated"]["example"], "2024-03-01 09:30:00", "{doc}");
        }
    }
}
