use super::*;

/// Tests creating a hotel with amenities.
///
/// Verifies the amenity list survives the JSON round trip and that the
/// review aggregate starts empty.
///
/// Expected: Ok(Hotel) with amenities intact, rating 0.0, zero reviews
#[tokio::test]
async fn creates_hotel_with_amenities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;

    let repo = HotelRepository::new(db);
    let hotel = repo
        .create(CreateHotelParams {
            owner_id: owner.id.clone(),
            name: "Harbour View".to_string(),
            description: Some("Waterfront rooms".to_string()),
            city: "Lisbon".to_string(),
            country: "Portugal".to_string(),
            amenities: vec!["wifi".to_string(), "pool".to_string()],
        })
        .await?;

    assert_eq!(hotel.owner_id, owner.id);
    assert_eq!(hotel.amenities, vec!["wifi", "pool"]);
    assert_eq!(hotel.rating, 0.0);
    assert_eq!(hotel.total_reviews, 0);

    let found = repo.find_by_id(&hotel.id).await?.unwrap();
    assert_eq!(found, hotel);

    Ok(())
}

/// Tests that an empty amenity list converts to an empty list, not an error.
///
/// Expected: Ok(Hotel) with no amenities
#[tokio::test]
async fn creates_hotel_without_amenities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;

    let repo = HotelRepository::new(db);
    let hotel = repo
        .create(CreateHotelParams {
            owner_id: owner.id.clone(),
            name: "Transit Inn".to_string(),
            description: None,
            city: "Porto".to_string(),
            country: "Portugal".to_string(),
            amenities: Vec::new(),
        })
        .await?;

    assert!(hotel.amenities.is_empty());
    assert!(hotel.description.is_none());

    Ok(())
}
