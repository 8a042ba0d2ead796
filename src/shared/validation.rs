use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating category slugs
    /// Lowercase letters, digits and hyphens only, in any arrangement
    /// - Valid: "shoes", "mens-shoes", "2024-sale", "-legacy-"
    /// - Invalid: "Shoes", "mens shoes", "mens_shoes", "café", ""
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9-]+$").unwrap();
}
