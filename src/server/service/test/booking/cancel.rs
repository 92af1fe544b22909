use super::*;

/// Tests cancelling a booking well before the deadline.
///
/// A check-in ten days out leaves far more than 24 hours; the cancellation
/// must succeed and stamp the cancellation time.
///
/// Expected: Ok(Booking) with status cancelled and timestamp set
#[tokio::test]
async fn cancels_booking_before_deadline() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _hotel, room) = factory::helpers::create_catalog(db).await?;
    let guest = factory::create_user(db).await?;

    let today = Utc::now().date_naive();
    let booking = factory::booking::BookingFactory::new(db, &room, &guest)
        .dates(today + Duration::days(10), today + Duration::days(12))
        .build()
        .await?;

    let service = BookingService::new(db);
    let cancelled = service.cancel(&guest.id, &booking.id).await?;

    assert_eq!(cancelled.status, BookingStatus::Cancelled);
    assert!(cancelled.cancelled_at.is_some());

    Ok(())
}

/// Tests the 24-hour cancellation deadline.
///
/// A booking whose check-in midnight has already passed leaves zero hours of
/// margin and can no longer be cancelled.
///
/// Expected: Err(BookingError::DeadlinePassed)
#[tokio::test]
async fn rejects_cancellation_within_deadline() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _hotel, room) = factory::helpers::create_catalog(db).await?;
    let guest = factory::create_user(db).await?;

    let today = Utc::now().date_naive();
    let booking = factory::booking::BookingFactory::new(db, &room, &guest)
        .dates(today, today + Duration::days(3))
        .build()
        .await?;

    let service = BookingService::new(db);
    let result = service.cancel(&guest.id, &booking.id).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::DeadlinePassed))
    ));

    Ok(())
}

/// Tests that a booking cannot be cancelled twice.
///
/// Expected: Err(BookingError::AlreadyCancelled) on the second attempt
#[tokio::test]
async fn rejects_double_cancellation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _hotel, room) = factory::helpers::create_catalog(db).await?;
    let guest = factory::create_user(db).await?;

    let today = Utc::now().date_naive();
    let booking = factory::booking::BookingFactory::new(db, &room, &guest)
        .dates(today + Duration::days(10), today + Duration::days(12))
        .build()
        .await?;

    let service = BookingService::new(db);
    service.cancel(&guest.id, &booking.id).await?;

    let second = service.cancel(&guest.id, &booking.id).await;
    assert!(matches!(
        second,
        Err(AppError::BookingErr(BookingError::AlreadyCancelled(_)))
    ));

    Ok(())
}

/// Tests that only the owning user may cancel.
///
/// Expected: Err(AuthError::AccessDenied) and the booking stays confirmed
#[tokio::test]
async fn rejects_foreign_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guest, _hotel, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let stranger = factory::create_user(db).await?;

    let service = BookingService::new(db);
    let result = service.cancel(&stranger.id, &booking.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));

    let still_confirmed = service.list(&guest.id, Some(BookingStatus::Confirmed)).await?;
    assert_eq!(still_confirmed.len(), 1);

    Ok(())
}

/// Tests cancelling an unknown booking id.
///
/// Expected: Err(BookingError::NotFound)
#[tokio::test]
async fn rejects_unknown_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_user(db).await?;

    let service = BookingService::new(db);
    let result = service.cancel(&guest.id, "missing-booking-id").await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::NotFound(_)))
    ));

    Ok(())
}
