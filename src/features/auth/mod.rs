//! Admin-only gate: token validation and role guards.

mod validator;

pub mod guards;
pub mod model;

pub use validator::JwtValidator;
