//! Field validation rules
//!
//! Pure functions from (label, raw value, rules) to an error message; an
//! empty string means the value is valid. Rules after `Required` are
//! skipped when the trimmed value is empty so optional fields stay valid
//! when left blank.

use crate::api::{AuthorMeta, SeoMeta};
use regex::Regex;

/// Maximum article title length
pub const MAX_TITLE: usize = 200;
/// Maximum article excerpt length
pub const MAX_EXCERPT: usize = 300;
/// Maximum event short excerpt length
pub const MAX_EVENT_EXCERPT: usize = 500;
/// Maximum number of article tags
pub const MAX_TAGS: usize = 10;
/// Maximum SEO meta title length
pub const MAX_META_TITLE: usize = 60;
/// Maximum SEO meta description length
pub const MAX_META_DESCRIPTION: usize = 160;
/// Maximum number of SEO meta keywords
pub const MAX_META_KEYWORDS: usize = 15;
/// Minimum digits in a phone number after stripping separators
pub const MIN_PHONE_DIGITS: usize = 10;

/// A single validation rule attached to a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Trimmed value must be non-empty
    Required,
    /// Value must have at least this many characters
    MinLen(usize),
    /// Value must have at most this many characters
    MaxLen(usize),
    /// Letters and spaces only (name fields)
    LettersAndSpaces,
    /// Simple `local@domain.tld` shape
    Email,
    /// Digits/separators only, at least 10 digits once stripped
    Phone,
    /// Comma-separated list with at most this many entries
    MaxTags(usize),
    /// Must parse as author metadata with name and designation
    AuthorJson,
    /// Must parse as SEO metadata within the configured maxima
    SeoJson,
    /// Must parse as well-formed JSON
    JsonValue,
}

/// Split a comma-separated tags value into trimmed, non-empty entries.
pub fn split_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validate a raw value against a field's rules.
///
/// Returns the first failing rule's message, or an empty string when the
/// value passes every rule.
pub fn validate_value(label: &str, value: &str, rules: &[FieldRule]) -> String {
    let trimmed = value.trim();

    for rule in rules {
        match rule {
            FieldRule::Required => {
                if trimmed.is_empty() {
                    return format!("{label} is required");
                }
            }
            // Everything below only applies to non-empty values so that
            // optional fields are valid when blank.
            _ if trimmed.is_empty() => {}
            FieldRule::MinLen(min) => {
                if trimmed.chars().count() < *min {
                    return format!("{label} must be at least {min} characters");
                }
            }
            FieldRule::MaxLen(max) => {
                if value.chars().count() > *max {
                    return format!("{label} exceeds the maximum limit of {max} characters");
                }
            }
            FieldRule::LettersAndSpaces => {
                let pattern = Regex::new(r"^[a-zA-Z\s]+$").unwrap();
                if !pattern.is_match(value) {
                    return format!("{label} can only contain letters and spaces");
                }
            }
            FieldRule::Email => {
                let pattern = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
                if !pattern.is_match(trimmed) {
                    return "Please enter a valid email".to_string();
                }
            }
            FieldRule::Phone => {
                let pattern = Regex::new(r"^[\d\s\-\+\(\)]+$").unwrap();
                if !pattern.is_match(value) {
                    return "Please enter a valid phone number".to_string();
                }
                let digits = value.chars().filter(char::is_ascii_digit).count();
                if digits < MIN_PHONE_DIGITS {
                    return format!("Phone number must be at least {MIN_PHONE_DIGITS} digits");
                }
            }
            FieldRule::MaxTags(max) => {
                let count = split_tags(value).len();
                if count > *max {
                    return format!("Cannot have more than {max} tags (currently {count})");
                }
            }
            FieldRule::AuthorJson => {
                let Ok(author) = serde_json::from_str::<AuthorMeta>(value) else {
                    return format!(
                        "Invalid JSON format in {label} field; check for missing quotes or commas"
                    );
                };
                if author.name.trim().is_empty() || author.designation.trim().is_empty() {
                    return format!("{label} must contain 'name' and 'designation' fields");
                }
            }
            FieldRule::SeoJson => {
                let Ok(seo) = serde_json::from_str::<SeoMeta>(value) else {
                    return format!(
                        "Invalid JSON format in {label} field; check the structure and use double quotes"
                    );
                };
                if seo.meta_title.chars().count() > MAX_META_TITLE {
                    return format!(
                        "SEO meta title exceeds the maximum limit of {MAX_META_TITLE} characters"
                    );
                }
                if seo.meta_description.chars().count() > MAX_META_DESCRIPTION {
                    return format!(
                        "SEO meta description exceeds the maximum limit of {MAX_META_DESCRIPTION} characters"
                    );
                }
                if seo.meta_keywords.len() > MAX_META_KEYWORDS {
                    return format!("SEO meta keywords cannot exceed {MAX_META_KEYWORDS} keywords");
                }
            }
            FieldRule::JsonValue => {
                if serde_json::from_str::<serde_json::Value>(value).is_err() {
                    return format!("{label} must be valid JSON");
                }
            }
        }
    }

    String::new()
}

/// Default author block used by the article form's quick-fill.
pub fn author_template() -> String {
    let author = AuthorMeta {
        name: "Nanda Kumar".to_string(),
        designation: "Founder & CEO, SaaviGen.AI".to_string(),
    };
    serde_json::to_string_pretty(&author).unwrap_or_default()
}

/// SEO block derived from the article's own title/excerpt/tags, truncated
/// to the configured maxima.
pub fn seo_template(title: &str, excerpt: &str, tags: &str) -> String {
    let seo = SeoMeta {
        meta_title: title.chars().take(MAX_META_TITLE).collect(),
        meta_description: excerpt.chars().take(MAX_META_DESCRIPTION).collect(),
        meta_keywords: split_tags(tags)
            .into_iter()
            .take(MAX_META_KEYWORDS)
            .collect(),
        robots: Some("index,follow".to_string()),
    };
    serde_json::to_string_pretty(&seo).unwrap_or_default()
}
