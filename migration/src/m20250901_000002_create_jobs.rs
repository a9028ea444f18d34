use sea_orm_migration::{prelude::*, schema::*};

use super::m20250901_000001_create_profiles::Profile;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(uuid(Job::Id).primary_key())
                    .col(uuid(Job::ClientId).not_null())
                    .col(string_len(Job::Title, 200).not_null())
                    .col(string_len(Job::Category, 50).not_null())
                    .col(text_null(Job::Description))
                    .col(string_len(Job::Location, 255).not_null())
                    .col(string_len_null(Job::BudgetRange, 50))
                    .col(
                        string_len(Job::Status, 20)
                            .not_null()
                            .default("open"),
                    )
                    .col(double(Job::Latitude).not_null())
                    .col(double(Job::Longitude).not_null())
                    .col(
                        timestamp_with_time_zone(Job::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_client")
                            .from(Job::Table, Job::ClientId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Browse and matching both read open jobs newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_job_status_created_at")
                    .table(Job::Table)
                    .col(Job::Status)
                    .col(Job::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Job::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Job {
    Table,
    Id,
    ClientId,
    Title,
    Category,
    Description,
    Location,
    BudgetRange,
    Status,
    Latitude,
    Longitude,
    CreatedAt,
}
