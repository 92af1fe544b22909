use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User, m20260801_000002_create_hotel_table::Hotel,
    m20260801_000003_create_room_table::Room,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(string(Booking::Id).primary_key())
                    .col(string(Booking::RoomId))
                    .col(string(Booking::HotelId))
                    .col(string(Booking::UserId))
                    .col(date(Booking::CheckInDate))
                    .col(date(Booking::CheckOutDate))
                    .col(integer(Booking::Guests))
                    .col(double(Booking::TotalPrice))
                    .col(string(Booking::Status))
                    .col(
                        timestamp(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Booking::CancelledAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_room_id")
                            .from(Booking::Table, Booking::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_hotel_id")
                            .from(Booking::Table, Booking::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The availability check filters on room + date range for every
        // booking attempt.
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_room_id_check_in_date")
                    .table(Booking::Table)
                    .col(Booking::RoomId)
                    .col(Booking::CheckInDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    RoomId,
    HotelId,
    UserId,
    CheckInDate,
    CheckOutDate,
    Guests,
    TotalPrice,
    Status,
    CreatedAt,
    CancelledAt,
}
