use super::*;

/// Tests case-insensitive substring matching on the city filter.
///
/// A hotel in "Lisbon" must match the query "lis" while a hotel in another
/// city does not.
///
/// Expected: exactly the Lisbon hotel
#[tokio::test]
async fn filters_by_city_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let lisbon = factory::hotel::HotelFactory::new(db, &owner.id)
        .city("Lisbon")
        .build()
        .await?;
    factory::hotel::HotelFactory::new(db, &owner.id)
        .city("Madrid")
        .build()
        .await?;

    let repo = HotelRepository::new(db);
    let hotels = repo
        .search(&SearchHotelsParams {
            city: Some("lis".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].id, lisbon.id);

    Ok(())
}

/// Tests the minimum-rating filter.
///
/// Only hotels whose aggregate rating is at least the bound are returned.
///
/// Expected: exactly the higher-rated hotel
#[tokio::test]
async fn filters_by_min_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let highly_rated = factory::hotel::HotelFactory::new(db, &owner.id)
        .rating(4.5, 10)
        .build()
        .await?;
    factory::hotel::HotelFactory::new(db, &owner.id)
        .rating(3.0, 4)
        .build()
        .await?;

    let repo = HotelRepository::new(db);
    let hotels = repo
        .search(&SearchHotelsParams {
            min_rating: Some(4.0),
            ..Default::default()
        })
        .await?;

    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].id, highly_rated.id);

    Ok(())
}

/// Tests that an unfiltered search returns every hotel.
///
/// Expected: both hotels
#[tokio::test]
async fn returns_all_without_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    factory::create_hotel(db, &owner.id).await?;
    factory::create_hotel(db, &owner.id).await?;

    let repo = HotelRepository::new(db);
    let hotels = repo.search(&SearchHotelsParams::default()).await?;

    assert_eq!(hotels.len(), 2);

    Ok(())
}
