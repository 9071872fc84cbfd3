//! Create `student` table.
//!
//! `created` is written once on insert; `last_updated` on every save.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string(Student::FirstName))
                    .col(string(Student::LastName))
                    .col(string(Student::StudentNumber))
                    .col(string(Student::Email))
                    .col(string(Student::Department))
                    .col(timestamp_with_time_zone(Student::Created).not_null())
                    .col(timestamp_with_time_zone(Student::LastUpdated).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Student::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Student { Table, Id, FirstName, LastName, StudentNumber, Email, Department, Created, LastUpdated }
