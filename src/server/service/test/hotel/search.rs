use super::*;

/// Tests the minimum-price computation against the price window.
///
/// A hotel with rooms at 80 and 120 searched with minPrice=100 must report
/// a minimum nightly price of 120 (the cheapest room inside the window, not
/// the cheapest overall).
///
/// Expected: one summary with min_price_per_night 120
#[tokio::test]
async fn computes_min_price_within_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let hotel = factory::create_hotel(db, &owner.id).await?;
    factory::room::RoomFactory::new(db, &hotel.id)
        .price_per_night(80.0)
        .build()
        .await?;
    factory::room::RoomFactory::new(db, &hotel.id)
        .price_per_night(120.0)
        .build()
        .await?;

    let service = HotelService::new(db);
    let summaries = service
        .search(SearchHotelsParams {
            min_price: Some(100.0),
            ..Default::default()
        })
        .await?;

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].hotel.id, hotel.id);
    assert_eq!(summaries[0].min_price_per_night, 120.0);

    Ok(())
}

/// Tests that hotels without a room in the price window are excluded.
///
/// Expected: empty result set
#[tokio::test]
async fn excludes_hotels_outside_price_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let hotel = factory::create_hotel(db, &owner.id).await?;
    factory::room::RoomFactory::new(db, &hotel.id)
        .price_per_night(80.0)
        .build()
        .await?;

    let service = HotelService::new(db);
    let summaries = service
        .search(SearchHotelsParams {
            min_price: Some(100.0),
            max_price: Some(200.0),
            ..Default::default()
        })
        .await?;

    assert!(summaries.is_empty());

    Ok(())
}

/// Tests that a hotel with no rooms at all never appears in search results.
///
/// Expected: empty result set
#[tokio::test]
async fn excludes_hotels_without_rooms() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    factory::create_hotel(db, &owner.id).await?;

    let service = HotelService::new(db);
    let summaries = service.search(SearchHotelsParams::default()).await?;

    assert!(summaries.is_empty());

    Ok(())
}

/// Tests the unconstrained search: every hotel with at least one room is
/// returned with its cheapest nightly price.
///
/// Expected: one summary with the overall minimum price
#[tokio::test]
async fn reports_cheapest_room_without_filters() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let hotel = factory::create_hotel(db, &owner.id).await?;
    factory::room::RoomFactory::new(db, &hotel.id)
        .price_per_night(80.0)
        .build()
        .await?;
    factory::room::RoomFactory::new(db, &hotel.id)
        .price_per_night(120.0)
        .build()
        .await?;

    let service = HotelService::new(db);
    let summaries = service.search(SearchHotelsParams::default()).await?;

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].min_price_per_night, 80.0);

    Ok(())
}
