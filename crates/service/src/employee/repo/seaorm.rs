use async_trait::async_trait;
use models::employee::{self, EmployeeData};
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::lookup::Lookup;
use crate::record::RecordRepository;

/// SeaORM-backed employee gateway.
pub struct SeaOrmEmployeeRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl RecordRepository<EmployeeData> for SeaOrmEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<EmployeeData>, ServiceError> {
        Ok(employee::find_all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Lookup<EmployeeData>, ServiceError> {
        Ok(employee::find_by_id(&self.db, id).await?.into())
    }

    async fn save(&self, entity: EmployeeData) -> Result<EmployeeData, ServiceError> {
        Ok(employee::save(&self.db, entity).await?)
    }

    async fn delete(&self, entity: EmployeeData) -> Result<(), ServiceError> {
        Ok(employee::delete(&self.db, &entity).await?)
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(employee::exists_by_id(&self.db, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::employee::{Employee, EmployeeService};
    use crate::test_support::get_db;

    #[tokio::test]
    async fn employee_crud_service() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let svc = EmployeeService::new(Arc::new(SeaOrmEmployeeRepository { db }));

        let e = svc
            .create(Employee { first_name: "Bo".into(), department: "Ops".into(), ..Default::default() })
            .await?;
        let found = svc.get(e.id).await?.into_option().expect("created employee");
        assert_eq!(found.department, "Ops");

        let moved = svc
            .update(Employee { department: "Finance".into(), ..found })
            .await?
            .into_option()
            .expect("existing employee");
        assert_eq!(moved.department, "Finance");
        assert_eq!(moved.created, e.created);

        assert!(svc.list().await?.iter().any(|x| x.id == e.id));
        assert!(svc.delete(e.id).await?);
        Ok(())
    }
}
