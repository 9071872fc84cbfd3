//! Students: API model, transform and SeaORM gateway.

pub mod domain;
pub mod repo;
pub mod transform;

pub use domain::Student;
pub use transform::StudentTransform;

pub type StudentService = crate::record::RecordService<StudentTransform>;
