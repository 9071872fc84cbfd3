use models::record::Timestamp;
use serde::{Deserialize, Serialize};

/// Employee as exchanged with API callers; same id and timestamp rules as
/// [`crate::student::Student`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Employee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    #[serde(with = "crate::format::display_time")]
    pub created: Option<Timestamp>,
    #[serde(with = "crate::format::display_time")]
    pub last_updated: Option<Timestamp>,
}
