//! Create `bus_locations` table.
//!
//! One row per bus holding its latest reported position.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusLocations::Table)
                    .if_not_exists()
                    .col(string(BusLocations::BusId).primary_key())
                    .col(double(BusLocations::Latitude).not_null())
                    .col(double(BusLocations::Longitude).not_null())
                    .col(
                        timestamp_with_time_zone(BusLocations::Timestamp)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BusLocations::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BusLocations { Table, BusId, Latitude, Longitude, Timestamp }
