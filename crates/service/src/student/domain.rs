use models::record::Timestamp;
use serde::{Deserialize, Serialize};

/// Student as exchanged with API callers.
///
/// `id <= 0` marks a student that has not been stored yet. `created` and
/// `last_updated` are owned by the store; values sent by callers are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Student {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub student_number: String,
    pub email: String,
    pub department: String,
    #[serde(with = "crate::format::display_time")]
    pub created: Option<Timestamp>,
    #[serde(with = "crate::format::display_time")]
    pub last_updated: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_camel_case_and_defaults() {
        let s: Student = serde_json::from_str(
            r#"{"firstName":"Ann","lastName":"Lee","studentNumber":"S100","email":"a@x.com","department":"CS"}"#,
        )
        .unwrap();
        assert_eq!(s.id, 0);
        assert_eq!(s.student_number, "S100");
        assert_eq!(s.created, None);

        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["firstName"], "Ann");
        assert_eq!(v["lastUpdated"], serde_json::Value::Null);
    }
}
