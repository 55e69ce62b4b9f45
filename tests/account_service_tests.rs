//! Integration tests for the account service

use learn_rest_api::prelude::*;
use std::sync::Arc;

fn service() -> AccountService {
    AccountService::new(Arc::new(InMemoryAccountStore::new()))
}

#[tokio::test]
async fn test_find_by_username() {
    let service = service();
    let username = "keesun@email.com";
    let password = "keesun";
    service
        .save_account(Account::new(
            username,
            password,
            [AccountRole::Admin, AccountRole::User],
        ))
        .await
        .unwrap();

    let user = service.load_user_by_username(username).await.unwrap();

    assert_eq!(user.username, username);
    assert!(service.password_matches(password, &user.password_hash).unwrap());
    assert_eq!(
        user.authorities.iter().cloned().collect::<Vec<_>>(),
        vec!["ROLE_ADMIN", "ROLE_USER"]
    );
}

#[tokio::test]
async fn test_find_by_username_fail() {
    let username = "random@email.com";

    let err = service().load_user_by_username(username).await.unwrap_err();

    assert!(err.to_string().contains(username));
    assert!(matches!(err, AccountError::UsernameNotFound(_)));
}

#[tokio::test]
async fn test_saving_again_replaces_account() {
    let service = service();
    service
        .save_account(Account::new("a@email.com", "first", [AccountRole::User]))
        .await
        .unwrap();
    service
        .save_account(Account::new("a@email.com", "second", [AccountRole::Admin]))
        .await
        .unwrap();

    let user = service.load_user_by_username("a@email.com").await.unwrap();
    assert!(service.password_matches("second", &user.password_hash).unwrap());
    assert!(!service.password_matches("first", &user.password_hash).unwrap());
    assert!(user.authorities.contains("ROLE_ADMIN"));
    assert!(!user.authorities.contains("ROLE_USER"));
}
