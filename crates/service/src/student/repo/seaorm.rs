use async_trait::async_trait;
use models::student::{self, StudentData};
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::lookup::Lookup;
use crate::record::RecordRepository;

/// SeaORM-backed student gateway.
pub struct SeaOrmStudentRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl RecordRepository<StudentData> for SeaOrmStudentRepository {
    async fn find_all(&self) -> Result<Vec<StudentData>, ServiceError> {
        Ok(student::find_all(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Lookup<StudentData>, ServiceError> {
        Ok(student::find_by_id(&self.db, id).await?.into())
    }

    async fn save(&self, entity: StudentData) -> Result<StudentData, ServiceError> {
        Ok(student::save(&self.db, entity).await?)
    }

    async fn delete(&self, entity: StudentData) -> Result<(), ServiceError> {
        Ok(student::delete(&self.db, &entity).await?)
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(student::exists_by_id(&self.db, id).await?)
    }
}
