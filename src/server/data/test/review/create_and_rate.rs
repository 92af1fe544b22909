use super::*;

/// Tests the first review against an empty aggregate.
///
/// A hotel with no reviews receives a rating of 4; the aggregate must become
/// exactly 4.0 with a count of one, alongside the persisted review.
///
/// Expected: review saved, hotel rating 4.0, total_reviews 1
#[tokio::test]
async fn seeds_empty_aggregate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guest, hotel, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create_and_rate(CreateReviewParams {
            booking_id: booking.id.clone(),
            hotel_id: hotel.id.clone(),
            user_id: guest.id.clone(),
            rating: 4,
            comment: Some("Quiet and clean".to_string()),
        })
        .await?;

    assert_eq!(review.booking_id, booking.id);
    assert_eq!(review.rating, 4);

    let updated = entity::prelude::Hotel::find_by_id(&hotel.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(updated.rating, 4.0);
    assert_eq!(updated.total_reviews, 1);

    Ok(())
}

/// Tests the incremental mean formula against an existing aggregate.
///
/// A hotel at rating 4.0 over 2 reviews receives a rating of 1; the new
/// aggregate must be (4*2 + 1) / 3 = 3.0 with a count of three.
///
/// Expected: hotel rating 3.0, total_reviews 3
#[tokio::test]
async fn folds_rating_into_existing_aggregate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let hotel = factory::hotel::HotelFactory::new(db, &owner.id)
        .rating(4.0, 2)
        .build()
        .await?;
    let room = factory::create_room(db, &hotel.id).await?;
    let guest = factory::create_user(db).await?;
    let booking = factory::create_booking(db, &room, &guest).await?;

    let repo = ReviewRepository::new(db);
    repo.create_and_rate(CreateReviewParams {
        booking_id: booking.id.clone(),
        hotel_id: hotel.id.clone(),
        user_id: guest.id.clone(),
        rating: 1,
        comment: None,
    })
    .await?;

    let updated = entity::prelude::Hotel::find_by_id(&hotel.id)
        .one(db)
        .await?
        .unwrap();
    assert!((updated.rating - 3.0).abs() < 1e-9);
    assert_eq!(updated.total_reviews, 3);

    Ok(())
}

/// Tests that the unique booking constraint rejects a second review.
///
/// The review table enforces at most one review per booking at the store
/// level; a second insert for the same booking must fail and must leave the
/// aggregate untouched.
///
/// Expected: Err(DbErr), aggregate unchanged after the failure
#[tokio::test]
async fn rejects_second_review_for_same_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guest, hotel, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = ReviewRepository::new(db);
    repo.create_and_rate(CreateReviewParams {
        booking_id: booking.id.clone(),
        hotel_id: hotel.id.clone(),
        user_id: guest.id.clone(),
        rating: 5,
        comment: None,
    })
    .await?;

    let result = repo
        .create_and_rate(CreateReviewParams {
            booking_id: booking.id.clone(),
            hotel_id: hotel.id.clone(),
            user_id: guest.id.clone(),
            rating: 1,
            comment: None,
        })
        .await;

    assert!(result.is_err());

    let updated = entity::prelude::Hotel::find_by_id(&hotel.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(updated.rating, 5.0);
    assert_eq!(updated.total_reviews, 1);

    Ok(())
}
