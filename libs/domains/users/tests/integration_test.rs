//! Integration tests for the Users domain
//!
//! These run the SQLite repository and service against an in-memory
//! database with the real migrations applied.

use domain_users::*;
use test_utils::{TEST_PASSWORD_HASH, TestDataBuilder, TestDatabase, assertions::*};

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: TEST_PASSWORD_HASH.to_string(),
    }
}

#[tokio::test]
async fn test_create_and_find_by_email() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_find");
    let email = builder.email("ana");

    let created = repo.create(new_user("Ana", &email)).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.password_hash, TEST_PASSWORD_HASH);

    let found = repo.find_by_email(&email).await.unwrap();
    let found = assert_some(found, "user should exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "Ana");

    assert!(repo.exists_by_email(&email).await.unwrap());
    assert!(!repo.exists_by_email("other@example.com").await.unwrap());
}

#[tokio::test]
async fn test_unique_email_constraint_maps_to_domain_error() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("unique_email");
    let email = builder.email("ana");

    repo.create(new_user("Ana", &email)).await.unwrap();
    let result = repo.create(new_user("Ana again", &email)).await;

    assert!(
        matches!(result, Err(UserError::EmailAlreadyRegistered)),
        "expected EmailAlreadyRegistered, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_email_lookup_is_case_sensitive() {
    let db = TestDatabase::new().await;
    let repo = SqliteUserRepository::new(db.connection());

    repo.create(new_user("Ana", "Ana@Example.com")).await.unwrap();

    assert!(repo.find_by_email("ana@example.com").await.unwrap().is_none());
    assert!(repo.create(new_user("Ana", "ana@example.com")).await.is_ok());
}

#[tokio::test]
async fn test_service_stores_hash_not_plaintext() {
    let db = TestDatabase::new().await;
    let service = UserService::new(SqliteUserRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("stores_hash");

    let user = service
        .register(RegisterRequest {
            name: "Ana".to_string(),
            email: builder.email("ana"),
            password: "secret123".to_string(),
        })
        .await
        .unwrap();

    assert_ne!(user.password_hash, "secret123");
    assert!(verify_password("secret123", &user.password_hash));

    let verified = service
        .verify_credentials(&user.email, "secret123")
        .await
        .unwrap();
    assert_eq!(verified.id, user.id);
}

#[tokio::test]
async fn test_seeded_hash_rejects_any_test_password() {
    let db = TestDatabase::new().await;
    let service = UserService::new(SqliteUserRepository::new(db.connection()));
    db.create_test_user("Bo", "bo@example.com").await;

    let result = service.verify_credentials("bo@example.com", "secret123").await;
    assert!(matches!(result, Err(UserError::InvalidCredentials)));
}
