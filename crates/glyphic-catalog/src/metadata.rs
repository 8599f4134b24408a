//! Icon metadata entries.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A single entry in the icon catalog.
///
/// Entries are immutable once loaded; the catalog document uses camelCase
/// field names (`displayName`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconMetadata {
    /// Unique icon name (also the remote SVG file stem)
    pub name: String,

    /// Human-readable name derived from `name`
    pub display_name: String,

    /// Short description
    #[serde(default)]
    pub description: String,

    /// Coarse classification tag
    pub category: Category,

    /// Search keywords, in catalog order
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl IconMetadata {
    /// Check whether this icon matches a search query.
    ///
    /// Case-insensitive substring match against the name, the display name,
    /// or any keyword.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.display_name.to_lowercase().contains(&query)
            || self
                .keywords
                .iter()
                .any(|keyword| keyword.to_lowercase().contains(&query))
    }
}

/// Derive a display name from an icon name.
///
/// Hyphens become spaces and each word is title-cased, so `eye-slash`
/// becomes `Eye Slash`.
pub fn display_name(name: &str) -> String {
    name.split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalize first letter of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn icon(name: &str, keywords: &[&str]) -> IconMetadata {
        IconMetadata {
            name: name.to_string(),
            display_name: display_name(name),
            description: String::new(),
            category: crate::category::classify(name),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn derives_display_names() {
        assert_eq!(display_name("star"), "Star");
        assert_eq!(display_name("eye-slash"), "Eye Slash");
        assert_eq!(display_name("credit-card"), "Credit Card");
        assert_eq!(display_name("circle-question"), "Circle Question");
    }

    #[test]
    fn matches_name_case_insensitively() {
        let star = icon("star", &[]);

        assert!(star.matches("star"));
        assert!(star.matches("STAR"));
        assert!(star.matches("ta"));
        assert!(!star.matches("heart"));
    }

    #[test]
    fn matches_display_name_and_keywords() {
        let slash = icon("eye-slash", &["hidden", "invisible"]);

        assert!(slash.matches("Eye Slash"));
        assert!(slash.matches("hidden"));
        assert!(slash.matches("INVIS"));
        assert!(!slash.matches("visible-not"));
    }

    #[test]
    fn deserializes_camel_case_document() {
        let json = r#"{
            "name": "credit-card",
            "displayName": "Credit Card",
            "description": "A payment card",
            "category": "payment",
            "keywords": ["pay", "bank"]
        }"#;

        let icon: IconMetadata = serde_json::from_str(json).unwrap();

        assert_eq!(icon.name, "credit-card");
        assert_eq!(icon.display_name, "Credit Card");
        assert_eq!(icon.category, Category::Payment);
        assert_eq!(icon.keywords, vec!["pay".to_string(), "bank".to_string()]);
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{"name": "star", "displayName": "Star", "category": "rating"}"#;

        let icon: IconMetadata = serde_json::from_str(json).unwrap();

        assert!(icon.description.is_empty());
        assert!(icon.keywords.is_empty());
    }
}
