use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000002_create_hotel_table::Hotel;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(string(Room::Id).primary_key())
                    .col(string(Room::HotelId))
                    .col(string(Room::RoomNumber))
                    .col(string(Room::RoomType))
                    .col(double(Room::PricePerNight))
                    .col(integer(Room::MaxOccupancy))
                    .col(
                        timestamp(Room::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_hotel_id")
                            .from(Room::Table, Room::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Room numbers are unique within a hotel, not globally.
        manager
            .create_index(
                Index::create()
                    .name("idx_room_hotel_id_room_number")
                    .table(Room::Table)
                    .col(Room::HotelId)
                    .col(Room::RoomNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    HotelId,
    RoomNumber,
    RoomType,
    PricePerNight,
    MaxOccupancy,
    CreatedAt,
}
