use super::model::{AuthenticatedUser, Claims};
use crate::core::config::AuthConfig;
use crate::core::error::AppError;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

/// Validates HS256 access tokens and resolves the caller's roles
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    admin_role: String,
    cookie_name: String,
}

impl JwtValidator {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.jwt_leeway.as_secs();

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            admin_role: config.admin_role.clone(),
            cookie_name: config.cookie_name.clone(),
        }
    }

    /// Name of the cookie the web client stores its token in
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!("Rejected access token: {}", e);
                AppError::Unauthorized("Invalid or expired token".to_string())
            })?;

        let claims = token_data.claims;
        let mut user = AuthenticatedUser {
            roles: claims.all_roles(),
            sub: claims.sub.unwrap_or_default(),
            is_admin: false,
        };
        user.is_admin = user.has_role(&self.admin_role);

        Ok(user)
    }
}
