use std::sync::Arc;

mod common;

use crate::common::fixtures::{test_auth_config, test_user};
use crate::common::mocks::MockUserRepo;
use actix_rt::test;
use motorcare_backend::api::dtos::{LoginRequest, RegisterRequest};
use motorcare_backend::application::AuthService;
use motorcare_backend::error::AppError;
use motorcare_backend::utils::hash::hash_password;
use motorcare_backend::utils::jwt::validate_token;

fn register_request(username: &str, email: &str) -> RegisterRequest {
    serde_json::from_value(serde_json::json!({
        "username": username,
        "password": "a-long-password",
        "email": email,
        "fullName": "Amira Ben Salah",
        "phoneNumber": "+216 20 000 000"
    }))
    .expect("should deserialize")
}

#[test]
async fn register_creates_customer_and_issues_token() {
    let user_repo = Arc::new(MockUserRepo::default());
    let config = test_auth_config();
    let service = AuthService::new(user_repo.clone(), config.clone());

    let response = service
        .register(register_request("amira", "amira@example.com"))
        .await
        .expect("registration should succeed");

    assert_eq!(response.user.username, "amira");
    assert_eq!(response.user.role, "customer");

    let claims = validate_token(&response.access_token, &config).expect("token should validate");
    assert_eq!(claims.sub, response.user.id);

    let stored = user_repo.users.lock().expect("users mutex poisoned");
    assert_eq!(stored.len(), 1);
    assert_ne!(stored[0].password_hash, "a-long-password");
}

#[test]
async fn register_rejects_duplicate_username() {
    let user_repo = Arc::new(MockUserRepo::default());
    let mut existing = test_user();
    existing.username = "amira".to_string();
    user_repo.push(existing);

    let service = AuthService::new(user_repo, test_auth_config());
    let result = service
        .register(register_request("amira", "other@example.com"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[test]
async fn register_rejects_duplicate_email() {
    let user_repo = Arc::new(MockUserRepo::default());
    let mut existing = test_user();
    existing.email = "amira@example.com".to_string();
    user_repo.push(existing);

    let service = AuthService::new(user_repo, test_auth_config());
    let result = service
        .register(register_request("someoneelse", "amira@example.com"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[test]
async fn register_rejects_invalid_payload() {
    let service = AuthService::new(Arc::new(MockUserRepo::default()), test_auth_config());

    let result = service
        .register(register_request("amira", "not-an-email"))
        .await;

    assert!(matches!(result, Err(AppError::ValidationError { .. })));
}

#[test]
async fn login_succeeds_with_correct_password() {
    let user_repo = Arc::new(MockUserRepo::default());
    let mut user = test_user();
    user.username = "amira".to_string();
    user.password_hash = hash_password("a-long-password").expect("hashing should work");
    user_repo.push(user.clone());

    let service = AuthService::new(user_repo, test_auth_config());
    let response = service
        .login(LoginRequest {
            username: "amira".to_string(),
            password: "a-long-password".to_string(),
        })
        .await
        .expect("login should succeed");

    assert_eq!(response.user.id, user.id);
    assert!(!response.access_token.is_empty());
}

#[test]
async fn login_rejects_wrong_password() {
    let user_repo = Arc::new(MockUserRepo::default());
    let mut user = test_user();
    user.username = "amira".to_string();
    user.password_hash = hash_password("a-long-password").expect("hashing should work");
    user_repo.push(user);

    let service = AuthService::new(user_repo, test_auth_config());
    let result = service
        .login(LoginRequest {
            username: "amira".to_string(),
            password: "wrong-password".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Unauthorized)));
}

#[test]
async fn login_rejects_unknown_username() {
    let service = AuthService::new(Arc::new(MockUserRepo::default()), test_auth_config());

    let result = service
        .login(LoginRequest {
            username: "ghost".to_string(),
            password: "whatever-password".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Unauthorized)));
}

#[test]
async fn me_returns_profile_without_password_material() {
    let user_repo = Arc::new(MockUserRepo::default());
    let user = test_user();
    user_repo.push(user.clone());

    let service = AuthService::new(user_repo, test_auth_config());
    let profile = service.me(user.id).await.expect("profile should load");

    assert_eq!(profile.id, user.id);
    assert_eq!(profile.email, user.email);
    let body = serde_json::to_value(&profile).expect("should serialize");
    assert!(body.get("passwordHash").is_none());
    assert!(body.get("password_hash").is_none());
}

#[test]
async fn me_rejects_unknown_user() {
    let service = AuthService::new(Arc::new(MockUserRepo::default()), test_auth_config());

    let result = service.me(uuid::Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}
