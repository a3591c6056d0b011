use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, FromRequest, HttpRequest};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AppError;
use crate::utils::jwt::validate_token;

/// Identity extracted from a validated bearer token. Handlers take this as an
/// argument; the user id is never read from request bodies.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub role: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_user(req))
    }
}

fn extract_user(req: &HttpRequest) -> Result<AuthenticatedUser, AppError> {
    let config = req
        .app_data::<web::Data<AuthConfig>>()
        .ok_or_else(|| AppError::InternalError(anyhow::anyhow!("auth config not registered")))?;

    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?;

    let claims = validate_token(token, config)?;

    Ok(AuthenticatedUser {
        user_id: claims.sub,
        role: claims.role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    use crate::utils::jwt::create_access_token;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_expiration_seconds: 3600,
            issuer: "motorcare-backend".to_string(),
            audience: "motorcare-clients".to_string(),
        }
    }

    #[test]
    fn extracts_user_from_valid_bearer_token() {
        let user_id = Uuid::new_v4();
        let token = create_access_token(user_id, "customer", &config()).unwrap();

        let req = TestRequest::default()
            .app_data(web::Data::new(config()))
            .insert_header((AUTHORIZATION, format!("Bearer {token}")))
            .to_http_request();

        let user = extract_user(&req).unwrap();
        assert_eq!(user.user_id, user_id);
        assert_eq!(user.role, "customer");
    }

    #[test]
    fn missing_header_is_unauthorized() {
        let req = TestRequest::default()
            .app_data(web::Data::new(config()))
            .to_http_request();

        assert!(matches!(extract_user(&req), Err(AppError::Unauthorized)));
    }

    #[test]
    fn non_bearer_scheme_is_unauthorized() {
        let req = TestRequest::default()
            .app_data(web::Data::new(config()))
            .insert_header((AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_http_request();

        assert!(matches!(extract_user(&req), Err(AppError::Unauthorized)));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let req = TestRequest::default()
            .app_data(web::Data::new(config()))
            .insert_header((AUTHORIZATION, "Bearer not.a.token"))
            .to_http_request();

        assert!(matches!(extract_user(&req), Err(AppError::InvalidToken)));
    }
}
