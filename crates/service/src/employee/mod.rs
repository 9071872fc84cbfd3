//! Employees: API model, transform and SeaORM gateway.

pub mod domain;
pub mod repo;
pub mod transform;

pub use domain::Employee;
pub use transform::EmployeeTransform;

pub type EmployeeService = crate::record::RecordService<EmployeeTransform>;
