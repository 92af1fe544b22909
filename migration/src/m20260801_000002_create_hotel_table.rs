use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hotel::Table)
                    .if_not_exists()
                    .col(string(Hotel::Id).primary_key())
                    .col(string(Hotel::OwnerId))
                    .col(string(Hotel::Name))
                    .col(text_null(Hotel::Description))
                    .col(string(Hotel::City))
                    .col(string(Hotel::Country))
                    .col(json_null(Hotel::Amenities))
                    .col(double(Hotel::Rating).default(0.0))
                    .col(integer(Hotel::TotalReviews).default(0))
                    .col(
                        timestamp(Hotel::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_owner_id")
                            .from(Hotel::Table, Hotel::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hotel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hotel {
    Table,
    Id,
    OwnerId,
    Name,
    Description,
    City,
    Country,
    Amenities,
    Rating,
    TotalReviews,
    CreatedAt,
}
