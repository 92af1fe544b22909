use super::*;

/// Tests creating a booking on a room with no prior bookings.
///
/// Verifies that the repository persists a confirmed booking with no
/// cancellation timestamp when the date range is free.
///
/// Expected: Ok(Some(Booking)) with status confirmed
#[tokio::test]
async fn creates_booking_when_range_free() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, hotel, room) = factory::helpers::create_catalog(db).await?;
    let guest = factory::create_user(db).await?;

    let today = Utc::now().date_naive();
    let repo = BookingRepository::new(db);
    let result = repo
        .create_if_available(CreateBookingParams {
            room_id: room.id.clone(),
            hotel_id: hotel.id.clone(),
            user_id: guest.id.clone(),
            check_in_date: today + Duration::days(7),
            check_out_date: today + Duration::days(10),
            guests: 2,
            total_price: 300.0,
        })
        .await?;

    let booking = result.expect("range should be free");
    assert_eq!(booking.room_id, room.id);
    assert_eq!(booking.user_id, guest.id);
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert!(booking.cancelled_at.is_none());

    Ok(())
}

/// Tests the exclusivity invariant against a confirmed booking.
///
/// An existing confirmed booking on days 7..10 must block a new booking on
/// days 8..11 of the same room.
///
/// Expected: Ok(None)
#[tokio::test]
async fn rejects_overlapping_confirmed_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guest, hotel, room, _booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let today = Utc::now().date_naive();
    let repo = BookingRepository::new(db);
    let result = repo
        .create_if_available(CreateBookingParams {
            room_id: room.id.clone(),
            hotel_id: hotel.id.clone(),
            user_id: guest.id.clone(),
            check_in_date: today + Duration::days(8),
            check_out_date: today + Duration::days(11),
            guests: 2,
            total_price: 300.0,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests half-open range semantics at the shared boundary.
///
/// A booking starting exactly on another booking's check-out day is not an
/// overlap: day 10..12 is free when days 7..10 are taken.
///
/// Expected: Ok(Some(Booking))
#[tokio::test]
async fn allows_booking_starting_on_checkout_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guest, hotel, room, _booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let today = Utc::now().date_naive();
    let repo = BookingRepository::new(db);
    let result = repo
        .create_if_available(CreateBookingParams {
            room_id: room.id.clone(),
            hotel_id: hotel.id.clone(),
            user_id: guest.id.clone(),
            check_in_date: today + Duration::days(10),
            check_out_date: today + Duration::days(12),
            guests: 2,
            total_price: 200.0,
        })
        .await?;

    assert!(result.is_some());

    Ok(())
}

/// Tests that cancelled bookings release their date range.
///
/// A cancelled booking over the requested range must not block a new one.
///
/// Expected: Ok(Some(Booking))
#[tokio::test]
async fn ignores_cancelled_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, hotel, room) = factory::helpers::create_catalog(db).await?;
    let guest = factory::create_user(db).await?;

    let today = Utc::now().date_naive();
    factory::booking::BookingFactory::new(db, &room, &guest)
        .dates(today + Duration::days(7), today + Duration::days(10))
        .cancelled()
        .build()
        .await?;

    let other_guest = factory::create_user(db).await?;
    let repo = BookingRepository::new(db);
    let result = repo
        .create_if_available(CreateBookingParams {
            room_id: room.id.clone(),
            hotel_id: hotel.id.clone(),
            user_id: other_guest.id.clone(),
            check_in_date: today + Duration::days(7),
            check_out_date: today + Duration::days(10),
            guests: 2,
            total_price: 300.0,
        })
        .await?;

    assert!(result.is_some());

    Ok(())
}

/// Tests that every overlapping row is considered, not just the first match.
///
/// With a cancelled booking and a confirmed booking both overlapping the
/// requested range, the confirmed one must still block the insert regardless
/// of row order.
///
/// Expected: Ok(None)
#[tokio::test]
async fn confirmed_overlap_blocks_despite_cancelled_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, hotel, room) = factory::helpers::create_catalog(db).await?;
    let guest = factory::create_user(db).await?;

    let today = Utc::now().date_naive();
    factory::booking::BookingFactory::new(db, &room, &guest)
        .dates(today + Duration::days(7), today + Duration::days(10))
        .cancelled()
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, &room, &guest)
        .dates(today + Duration::days(8), today + Duration::days(11))
        .build()
        .await?;

    let other_guest = factory::create_user(db).await?;
    let repo = BookingRepository::new(db);
    let result = repo
        .create_if_available(CreateBookingParams {
            room_id: room.id.clone(),
            hotel_id: hotel.id.clone(),
            user_id: other_guest.id.clone(),
            check_in_date: today + Duration::days(7),
            check_out_date: today + Duration::days(10),
            guests: 2,
            total_price: 300.0,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that bookings on other rooms never conflict.
///
/// The same date range on a different room of the same hotel is free.
///
/// Expected: Ok(Some(Booking))
#[tokio::test]
async fn ignores_bookings_on_other_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guest, hotel, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let other_room = factory::create_room(db, &hotel.id).await?;

    let repo = BookingRepository::new(db);
    let result = repo
        .create_if_available(CreateBookingParams {
            room_id: other_room.id.clone(),
            hotel_id: hotel.id.clone(),
            user_id: guest.id.clone(),
            check_in_date: booking.check_in_date,
            check_out_date: booking.check_out_date,
            guests: 2,
            total_price: 300.0,
        })
        .await?;

    assert!(result.is_some());

    Ok(())
}
