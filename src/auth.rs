//! JWT bearer authentication for the admin API.
//!
//! Admin requests carry an `Authorization: Bearer <token>` header signed
//! with the shared secret from [`ServerConfig`]. The claims double as the
//! request's user context; role checks happen in the service layer so that
//! business logic stays testable without HTTP machinery.

use actix_web::dev::Payload;
use actix_web::error::{ErrorInternalServerError, ErrorUnauthorized};
use actix_web::http::header;
use actix_web::{Error, FromRequest, HttpRequest, web};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

/// Claims carried by an admin bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
    pub exp: usize,
}

/// Returns true when `roles` contains `role`.
pub fn check_role(role: &str, roles: &[String]) -> bool {
    roles.iter().any(|r| r == role)
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

impl AuthenticatedUser {
    fn from_http_request(req: &HttpRequest) -> Result<Self, Error> {
        let config = req
            .app_data::<web::Data<ServerConfig>>()
            .ok_or_else(|| ErrorInternalServerError("server configuration missing"))?;

        let token = bearer_token(req).ok_or_else(|| ErrorUnauthorized("missing bearer token"))?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);

        decode::<AuthenticatedUser>(
            token,
            &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| ErrorUnauthorized("invalid bearer token"))
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        std::future::ready(Self::from_http_request(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use jsonwebtoken::{EncodingKey, Header, encode};

    const TEST_SECRET: &str = "test-secret-key-with-enough-length!";

    fn sample_config() -> ServerConfig {
        ServerConfig {
            database_url: ":memory:".to_string(),
            bind_address: "127.0.0.1:0".to_string(),
            jwt_secret: TEST_SECRET.to_string(),
        }
    }

    fn sample_user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".to_string(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            roles: vec!["manager".to_string()],
            // 2100-01-01, far enough for any test run
            exp: 4102444800,
        }
    }

    #[test]
    fn checks_roles() {
        let roles = vec!["manager".to_string(), "viewer".to_string()];
        assert!(check_role("manager", &roles));
        assert!(!check_role("admin", &roles));
    }

    #[test]
    fn accepts_valid_bearer_token() {
        let token = encode(
            &Header::default(),
            &sample_user(),
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        let req = TestRequest::default()
            .app_data(web::Data::new(sample_config()))
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .to_http_request();

        let user = AuthenticatedUser::from_http_request(&req).unwrap();
        assert_eq!(user.email, "admin@example.com");
        assert_eq!(user.roles, vec!["manager".to_string()]);
    }

    #[test]
    fn rejects_missing_and_malformed_tokens() {
        let req = TestRequest::default()
            .app_data(web::Data::new(sample_config()))
            .to_http_request();
        assert!(AuthenticatedUser::from_http_request(&req).is_err());

        let req = TestRequest::default()
            .app_data(web::Data::new(sample_config()))
            .insert_header((header::AUTHORIZATION, "Bearer not-a-token"))
            .to_http_request();
        assert!(AuthenticatedUser::from_http_request(&req).is_err());
    }

    #[test]
    fn rejects_tokens_signed_with_another_secret() {
        let token = encode(
            &Header::default(),
            &sample_user(),
            &EncodingKey::from_secret(b"a-completely-different-secret-key"),
        )
        .unwrap();

        let req = TestRequest::default()
            .app_data(web::Data::new(sample_config()))
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .to_http_request();
        assert!(AuthenticatedUser::from_http_request(&req).is_err());
    }
}
