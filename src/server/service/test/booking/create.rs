use super::*;

/// Tests price derivation: nights × nightly rate.
///
/// Three nights at 5000 per night must price at exactly 15000, computed from
/// the calendar-day difference.
///
/// Expected: Ok(Booking) with total_price 15000
#[tokio::test]
async fn derives_price_from_calendar_nights() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let hotel = factory::create_hotel(db, &owner.id).await?;
    let room = factory::room::RoomFactory::new(db, &hotel.id)
        .price_per_night(5000.0)
        .build()
        .await?;
    let guest = factory::create_user(db).await?;

    let today = Utc::now().date_naive();
    let service = BookingService::new(db);
    let booking = service
        .create(
            &guest.id,
            BookingRequest {
                room_id: room.id.clone(),
                check_in_date: today + Duration::days(10),
                check_out_date: today + Duration::days(13),
                guests: 2,
            },
        )
        .await?;

    assert_eq!(booking.total_price, 15000.0);
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.hotel_id, hotel.id);

    Ok(())
}

/// Tests rejection of an inverted or empty date range.
///
/// Check-out on or before check-in is a malformed request, checked before
/// the room is even looked up.
///
/// Expected: Err(ValidationError::InvalidDateOrder) for both cases
#[tokio::test]
async fn rejects_non_positive_date_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _hotel, room) = factory::helpers::create_catalog(db).await?;
    let guest = factory::create_user(db).await?;

    let today = Utc::now().date_naive();
    let service = BookingService::new(db);

    let inverted = service
        .create(
            &guest.id,
            BookingRequest {
                room_id: room.id.clone(),
                check_in_date: today + Duration::days(10),
                check_out_date: today + Duration::days(8),
                guests: 2,
            },
        )
        .await;
    assert!(matches!(
        inverted,
        Err(AppError::ValidationErr(ValidationError::InvalidDateOrder))
    ));

    let empty = service
        .create(
            &guest.id,
            BookingRequest {
                room_id: room.id.clone(),
                check_in_date: today + Duration::days(10),
                check_out_date: today + Duration::days(10),
                guests: 2,
            },
        )
        .await;
    assert!(matches!(
        empty,
        Err(AppError::ValidationErr(ValidationError::InvalidDateOrder))
    ));

    Ok(())
}

/// Tests rejection of an unknown room id.
///
/// Expected: Err(CatalogError::RoomNotFound)
#[tokio::test]
async fn rejects_unknown_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_user(db).await?;

    let today = Utc::now().date_naive();
    let service = BookingService::new(db);
    let result = service
        .create(
            &guest.id,
            BookingRequest {
                room_id: "missing-room-id".to_string(),
                check_in_date: today + Duration::days(10),
                check_out_date: today + Duration::days(12),
                guests: 2,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::CatalogErr(CatalogError::RoomNotFound(_)))
    ));

    Ok(())
}

/// Tests the occupancy limit.
///
/// Ten guests on a room with max occupancy two must be rejected.
///
/// Expected: Err(ValidationError::CapacityExceeded)
#[tokio::test]
async fn rejects_party_exceeding_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let hotel = factory::create_hotel(db, &owner.id).await?;
    let room = factory::room::RoomFactory::new(db, &hotel.id)
        .max_occupancy(2)
        .build()
        .await?;
    let guest = factory::create_user(db).await?;

    let today = Utc::now().date_naive();
    let service = BookingService::new(db);
    let result = service
        .create(
            &guest.id,
            BookingRequest {
                room_id: room.id.clone(),
                check_in_date: today + Duration::days(10),
                check_out_date: today + Duration::days(12),
                guests: 10,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::CapacityExceeded {
            guests: 10,
            capacity: 2
        }))
    ));

    Ok(())
}

/// Tests rejection of dates in the past.
///
/// Expected: Err(ValidationError::DatesInPast)
#[tokio::test]
async fn rejects_past_dates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _hotel, room) = factory::helpers::create_catalog(db).await?;
    let guest = factory::create_user(db).await?;

    let today = Utc::now().date_naive();
    let service = BookingService::new(db);
    let result = service
        .create(
            &guest.id,
            BookingRequest {
                room_id: room.id.clone(),
                check_in_date: today - Duration::days(3),
                check_out_date: today + Duration::days(1),
                guests: 2,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::DatesInPast))
    ));

    Ok(())
}

/// Tests overlap rejection and the adjacent-range exception together.
///
/// With days 10..13 booked: days 11..14 overlap and must be refused, while
/// days 13..15 share only the boundary and must succeed.
///
/// Expected: RoomNotAvailable for the overlap, Ok for the adjacent range
#[tokio::test]
async fn rejects_overlap_but_allows_adjacent_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _hotel, room) = factory::helpers::create_catalog(db).await?;
    let guest = factory::create_user(db).await?;
    let other_guest = factory::create_user(db).await?;

    let today = Utc::now().date_naive();
    let service = BookingService::new(db);

    service
        .create(
            &guest.id,
            BookingRequest {
                room_id: room.id.clone(),
                check_in_date: today + Duration::days(10),
                check_out_date: today + Duration::days(13),
                guests: 2,
            },
        )
        .await?;

    let overlapping = service
        .create(
            &other_guest.id,
            BookingRequest {
                room_id: room.id.clone(),
                check_in_date: today + Duration::days(11),
                check_out_date: today + Duration::days(14),
                guests: 2,
            },
        )
        .await;
    assert!(matches!(
        overlapping,
        Err(AppError::BookingErr(BookingError::RoomNotAvailable))
    ));

    let adjacent = service
        .create(
            &other_guest.id,
            BookingRequest {
                room_id: room.id.clone(),
                check_in_date: today + Duration::days(13),
                check_out_date: today + Duration::days(15),
                guests: 2,
            },
        )
        .await?;
    assert_eq!(adjacent.check_in_date, today + Duration::days(13));

    Ok(())
}

/// Tests that cancelling frees the range for a different caller.
///
/// Book, cancel, then rebook the same range as another user; the round trip
/// must succeed.
///
/// Expected: Ok(Booking) on the rebooking
#[tokio::test]
async fn rebooks_range_after_cancellation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _hotel, room) = factory::helpers::create_catalog(db).await?;
    let guest = factory::create_user(db).await?;
    let other_guest = factory::create_user(db).await?;

    let today = Utc::now().date_naive();
    let service = BookingService::new(db);

    let booking = service
        .create(
            &guest.id,
            BookingRequest {
                room_id: room.id.clone(),
                check_in_date: today + Duration::days(10),
                check_out_date: today + Duration::days(13),
                guests: 2,
            },
        )
        .await?;

    service.cancel(&guest.id, &booking.id).await?;

    let rebooked = service
        .create(
            &other_guest.id,
            BookingRequest {
                room_id: room.id.clone(),
                check_in_date: today + Duration::days(10),
                check_out_date: today + Duration::days(13),
                guests: 2,
            },
        )
        .await?;

    assert_eq!(rebooked.user_id, other_guest.id);
    assert_eq!(rebooked.status, BookingStatus::Confirmed);

    Ok(())
}

/// Tests rejection of a guest count below one.
///
/// Expected: Err(ValidationError::InvalidGuestCount)
#[tokio::test]
async fn rejects_empty_party() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _hotel, room) = factory::helpers::create_catalog(db).await?;
    let guest = factory::create_user(db).await?;

    let today = Utc::now().date_naive();
    let service = BookingService::new(db);
    let result = service
        .create(
            &guest.id,
            BookingRequest {
                room_id: room.id.clone(),
                check_in_date: today + Duration::days(10),
                check_out_date: today + Duration::days(12),
                guests: 0,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::InvalidGuestCount))
    ));

    Ok(())
}
