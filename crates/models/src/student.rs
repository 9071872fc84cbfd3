use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, NotSet, PaginatorTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ModelError;
use crate::record::{now, Record, Timestamp};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub student_number: String,
    pub email: String,
    pub department: String,
    pub created: DateTimeWithTimeZone,
    pub last_updated: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Student as handed to and returned by the persistence gateway.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentData {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub student_number: String,
    pub email: String,
    pub department: String,
    pub created: Option<Timestamp>,
    pub last_updated: Option<Timestamp>,
}

impl From<Model> for StudentData {
    fn from(m: Model) -> Self {
        Self {
            id: Some(m.id),
            first_name: m.first_name,
            last_name: m.last_name,
            student_number: m.student_number,
            email: m.email,
            department: m.department,
            created: Some(m.created),
            last_updated: Some(m.last_updated),
        }
    }
}

impl Record for StudentData {
    fn id(&self) -> Option<i32> { self.id }
    fn created(&self) -> Option<Timestamp> { self.created }

    fn stamp(&mut self, id: i32, created: Timestamp, last_updated: Timestamp) {
        self.id = Some(id);
        self.created = Some(created);
        self.last_updated = Some(last_updated);
    }
}

/// All students ordered by id.
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<StudentData>, ModelError> {
    let rows = Entity::find().order_by_asc(Column::Id).all(db).await.map_err(ModelError::db)?;
    Ok(rows.into_iter().map(StudentData::from).collect())
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<StudentData>, ModelError> {
    let found = Entity::find_by_id(id).one(db).await.map_err(ModelError::db)?;
    Ok(found.map(StudentData::from))
}

pub async fn exists_by_id(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let n = Entity::find_by_id(id).count(db).await.map_err(ModelError::db)?;
    Ok(n > 0)
}

/// Upsert. A record whose id matches a row updates that row in place,
/// keeping `created`; anything else is inserted under a fresh id.
/// `last_updated` is refreshed either way.
pub async fn save(db: &DatabaseConnection, data: StudentData) -> Result<StudentData, ModelError> {
    let now = now();
    let existing = match data.id {
        Some(id) => Entity::find_by_id(id).one(db).await.map_err(ModelError::db)?,
        None => None,
    };
    let saved = match existing {
        Some(row) => {
            debug!(id = row.id, "updating student row");
            let mut am: ActiveModel = row.into();
            am.first_name = Set(data.first_name);
            am.last_name = Set(data.last_name);
            am.student_number = Set(data.student_number);
            am.email = Set(data.email);
            am.department = Set(data.department);
            am.last_updated = Set(now);
            am.update(db).await
        }
        None => {
            let am = ActiveModel {
                id: NotSet,
                first_name: Set(data.first_name),
                last_name: Set(data.last_name),
                student_number: Set(data.student_number),
                email: Set(data.email),
                department: Set(data.department),
                created: Set(now),
                last_updated: Set(now),
            };
            am.insert(db).await
        }
    }
    .map_err(ModelError::db)?;
    Ok(saved.into())
}

pub async fn delete(db: &DatabaseConnection, data: &StudentData) -> Result<(), ModelError> {
    let Some(id) = data.id else {
        return Err(ModelError::Validation("cannot delete a student that was never saved".into()));
    };
    Entity::delete_by_id(id).exec(db).await.map_err(ModelError::db)?;
    Ok(())
}
