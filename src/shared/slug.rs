//! Slug derivation used by the category form.
//!
//! The transform is lowercase and strict: anything outside `[a-z0-9]` collapses
//! into a single hyphen, and leading/trailing hyphens are dropped. Non-ASCII
//! letters are transliterated first, so "Café Crème" becomes "cafe-creme".

/// Derive a slug from a human-entered name.
pub fn slugify(name: &str) -> String {
    ::slug::slugify(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::SLUG_REGEX;

    #[test]
    fn test_slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Running Shoes"), "running-shoes");
        assert_eq!(slugify("  Shoes & Bags  "), "shoes-bags");
        assert_eq!(slugify("Kids' Wear (2024)"), "kids-wear-2024");
    }

    #[test]
    fn test_slugify_transliterates() {
        assert_eq!(slugify("Café Crème"), "cafe-creme");
    }

    #[test]
    fn test_slugify_output_matches_slug_pattern() {
        for name in ["Home & Garden", "TV/Audio", "Books -- Used", "ÜBER Deals"] {
            let slug = slugify(name);
            assert!(SLUG_REGEX.is_match(&slug), "{slug} should be a valid slug");
        }
    }

    #[test]
    fn test_slugify_punctuation_only_is_empty() {
        assert_eq!(slugify("!!!"), "");
    }
}
