// =============================================================================
// CATEGORY FIELD BOUNDS
// =============================================================================

/// Minimum length (in characters, after trimming) of a category name
pub const CATEGORY_NAME_MIN_LEN: u64 = 3;

/// Maximum length (in characters, after trimming) of a category name
pub const CATEGORY_NAME_MAX_LEN: u64 = 50;

/// Minimum length of a category slug
pub const CATEGORY_SLUG_MIN_LEN: u64 = 3;

/// Maximum length of a category slug
pub const CATEGORY_SLUG_MAX_LEN: u64 = 50;

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Default role required for category management
pub const ROLE_ADMIN: &str = "admin";

/// Default cookie carrying the access token issued by the web client login
pub const DEFAULT_AUTH_COOKIE: &str = "access_token";
