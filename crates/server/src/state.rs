use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::employee::{repo::seaorm::SeaOrmEmployeeRepository, EmployeeService};
use service::student::{repo::seaorm::SeaOrmStudentRepository, StudentService};

/// Services shared by every handler.
#[derive(Clone)]
pub struct ServerState {
    pub students: StudentService,
    pub employees: EmployeeService,
}

impl ServerState {
    pub fn new(students: StudentService, employees: EmployeeService) -> Self {
        Self { students, employees }
    }

    /// Both services backed by the same connection pool.
    pub fn with_database(db: DatabaseConnection) -> Self {
        let students = StudentService::new(Arc::new(SeaOrmStudentRepository { db: db.clone() }));
        let employees = EmployeeService::new(Arc::new(SeaOrmEmployeeRepository { db }));
        Self::new(students, employees)
    }
}
