use super::*;

/// Tests that signup defaults to the customer role and never stores the
/// plaintext password.
///
/// Expected: Ok(User) with role customer and a digest differing from the input
#[tokio::test]
async fn creates_customer_by_default() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let user = service.signup(signup_params("ana@example.com")).await?;

    assert_eq!(user.role, Role::Customer);
    assert_ne!(user.password_hash, "correct horse battery staple");
    assert!(user.password_hash.contains('$'));

    Ok(())
}

/// Tests signup with an explicit owner role.
///
/// Expected: Ok(User) with role owner
#[tokio::test]
async fn accepts_owner_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let mut params = signup_params("host@example.com");
    params.role = Some("owner".to_string());

    let user = service.signup(params).await?;
    assert_eq!(user.role, Role::Owner);

    Ok(())
}

/// Tests rejection of an unrecognized role value.
///
/// Expected: Err(ValidationError::MalformedPayload)
#[tokio::test]
async fn rejects_unknown_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let mut params = signup_params("ana@example.com");
    params.role = Some("admin".to_string());

    let result = service.signup(params).await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::MalformedPayload))
    ));

    Ok(())
}

/// Tests the duplicate-email check.
///
/// Expected: Err(AuthError::EmailAlreadyExists) on the second signup
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service.signup(signup_params("ana@example.com")).await?;

    let result = service.signup(signup_params("ana@example.com")).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::EmailAlreadyExists))
    ));

    Ok(())
}
