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
                    .table(ServiceArea::Table)
                    .if_not_exists()
                    .col(uuid(ServiceArea::Id).primary_key())
                    .col(uuid(ServiceArea::FundiId).not_null())
                    .col(string_len(ServiceArea::AreaName, 100).not_null())
                    .col(double(ServiceArea::Latitude).not_null())
                    .col(double(ServiceArea::Longitude).not_null())
                    .col(
                        timestamp_with_time_zone(ServiceArea::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_area_fundi")
                            .from(ServiceArea::Table, ServiceArea::FundiId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_service_area_fundi_name")
                    .table(ServiceArea::Table)
                    .col(ServiceArea::FundiId)
                    .col(ServiceArea::AreaName)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceArea::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServiceArea {
    Table,
    Id,
    FundiId,
    AreaName,
    Latitude,
    Longitude,
    CreatedAt,
}
