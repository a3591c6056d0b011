use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use crate::config::AuthConfig;
use crate::domain::{Role, User};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::UserRepository;
use crate::utils::hash::{hash_password, verify_password};
use crate::utils::jwt::create_access_token;

#[derive(Clone)]
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(user_repo: Arc<dyn UserRepository>, config: AuthConfig) -> Self {
        Self { user_repo, config }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<AuthResponse> {
        request.validate()?;

        if self
            .user_repo
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("username already taken".to_string()));
        }

        if self
            .user_repo
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("email already registered".to_string()));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: request.username,
            email: request.email,
            full_name: request.full_name,
            phone_number: request.phone_number,
            role: Role::Customer,
            password_hash: hash_password(&request.password)?,
            created_at: Utc::now(),
        };

        let user = self.user_repo.create(&user).await?;
        self.issue_token(user)
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        request.validate()?;

        let user = self
            .user_repo
            .find_by_username(&request.username)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(AppError::Unauthorized);
        }

        self.issue_token(user)
    }

    pub async fn me(&self, user_id: Uuid) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;
        Ok(user.into())
    }

    fn issue_token(&self, user: User) -> AppResult<AuthResponse> {
        let user_response: UserResponse = user.into();
        let access_token =
            create_access_token(user_response.id, &user_response.role, &self.config)?;
        Ok(AuthResponse {
            access_token,
            user: user_response,
        })
    }
}
