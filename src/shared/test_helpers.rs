#[cfg(test)]
use crate::core::config::AuthConfig;
#[cfg(test)]
use crate::features::auth::model::{AuthenticatedUser, Claims};

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
pub fn create_admin_user() -> AuthenticatedUser {
    AuthenticatedUser {
        sub: "test-admin".to_string(),
        roles: vec!["admin".to_string()],
        is_admin: true,
    }
}

#[cfg(test)]
async fn inject_admin_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_admin_user());
    next.run(request).await
}

/// Wrap a router so every request is treated as coming from an admin
#[cfg(test)]
pub fn with_admin_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_admin_middleware))
}

#[cfg(test)]
pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "test-secret".to_string(),
        jwt_leeway: std::time::Duration::from_secs(0),
        cookie_name: crate::shared::constants::DEFAULT_AUTH_COOKIE.to_string(),
        admin_role: crate::shared::constants::ROLE_ADMIN.to_string(),
    }
}

/// Sign an HS256 token for `user-1` with a single role, expiring `ttl_secs` from now
#[cfg(test)]
pub fn issue_token(config: &AuthConfig, role: &str, ttl_secs: i64) -> String {
    let claims = Claims {
        sub: Some("user-1".to_string()),
        exp: (chrono::Utc::now().timestamp() + ttl_secs) as u64,
        role: Some(role.to_string()),
        roles: Vec::new(),
    };

    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .unwrap()
}
