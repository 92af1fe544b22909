//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a hotel with its owner and one room.
///
/// This is a convenience method that creates:
/// 1. User with the `owner` role
/// 2. Hotel owned by that user
/// 3. Room belonging to the hotel
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, hotel, room))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_catalog(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::hotel::Model,
        entity::room::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_owner(db).await?;
    let hotel = crate::factory::hotel::create_hotel(db, &owner.id).await?;
    let room = crate::factory::room::create_room(db, &hotel.id).await?;

    Ok((owner, hotel, room))
}

/// Creates a confirmed booking with all its dependencies.
///
/// This creates the catalog (owner, hotel, room) plus a customer user and a
/// confirmed booking for that customer. The booking uses the factory's
/// default dates one week in the future.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((guest, hotel, room, booking))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::hotel::Model,
        entity::room::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let (_owner, hotel, room) = create_catalog(db).await?;
    let guest = crate::factory::user::create_user(db).await?;
    let booking = crate::factory::booking::create_booking(db, &room, &guest).await?;

    Ok((guest, hotel, room, booking))
}
