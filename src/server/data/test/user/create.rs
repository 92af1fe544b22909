use super::*;

/// Tests creating a customer account.
///
/// Expected: Ok(User) with the stored fields and customer role
#[tokio::test]
async fn creates_customer_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "salt$digest".to_string(),
            role: Role::Customer,
            phone: Some("555-0101".to_string()),
        })
        .await?;

    assert!(!user.id.is_empty());
    assert_eq!(user.email, "ana@example.com");
    assert_eq!(user.role, Role::Customer);
    assert_eq!(user.phone, Some("555-0101".to_string()));

    let found = repo.find_by_id(&user.id).await?.unwrap();
    assert_eq!(found, user);

    Ok(())
}

/// Tests the unique email constraint.
///
/// Expected: Err(DbErr) on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParams {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        password_hash: "salt$digest".to_string(),
        role: Role::Customer,
        phone: None,
    })
    .await?;

    let result = repo
        .create(CreateUserParams {
            name: "Another Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "salt$digest".to_string(),
            role: Role::Owner,
            phone: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
