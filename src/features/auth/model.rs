use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Caller identity resolved by the auth middleware
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub sub: String,
    pub roles: Vec<String>,
    /// Whether `roles` contains the configured admin role
    pub is_admin: bool,
}

impl AuthenticatedUser {
    /// Check if user has a specific role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Claims carried by access tokens issued by the main application.
///
/// The web client's login stores a single `role`; service tokens may carry a
/// `roles` list instead. Both are accepted and merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(alias = "_id", default)]
    pub sub: Option<String>,
    pub exp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl Claims {
    pub fn all_roles(&self) -> Vec<String> {
        let mut roles = self.roles.clone();
        if let Some(role) = &self.role {
            if !roles.contains(role) {
                roles.push(role.clone());
            }
        }
        roles
    }
}
