use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::users::model::{User, UserRole};

// JWT Claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub email: String,
    pub role: UserRole,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 128, message = "password is required"))]
    pub password: String,
    pub role: Option<UserRole>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SigninRequest {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub message: String,
    pub user: User,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_validation() {
        let dto = SignupRequest {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "secret1".to_string(),
            role: None,
        };
        assert!(dto.validate().is_ok());

        let dto = SignupRequest {
            name: "".to_string(),
            email: "jane@example.com".to_string(),
            password: "secret1".to_string(),
            role: None,
        };
        assert!(dto.validate().is_err());

        let dto = SignupRequest {
            name: "Jane".to_string(),
            email: "nope".to_string(),
            password: "secret1".to_string(),
            role: None,
        };
        assert!(dto.validate().is_err());

        let dto = SignupRequest {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "".to_string(),
            role: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_signup_request_role_parses() {
        let dto: SignupRequest = serde_json::from_str(
            r#"{"name":"Jane","email":"jane@example.com","password":"secret1","role":"admin"}"#,
        )
        .unwrap();
        assert_eq!(dto.role, Some(UserRole::Admin));
    }

    #[test]
    fn test_claims_round_trip() {
        let claims = Claims {
            sub: "5".to_string(),
            email: "user@example.com".to_string(),
            role: UserRole::User,
            exp: 9999999999,
            iat: 1234567890,
        };
        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains(r#""role":"user""#));

        let parsed: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.sub, "5");
        assert_eq!(parsed.role, UserRole::User);
    }
}
