//! Category classification for icon names.

use serde::{Deserialize, Serialize};

/// Coarse classification tag assigned to each icon.
///
/// The set is closed; catalog documents with an unrecognized category string
/// fall back to [`Category::Other`] rather than failing the whole load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Navigation,
    Media,
    File,
    User,
    System,
    Action,
    Status,
    Help,
    Security,
    Time,
    Communication,
    Social,
    Rating,
    Network,
    Layout,
    Payment,
    Commerce,
    #[serde(other)]
    Other,
}

impl Category {
    /// The lowercase name used in catalog documents and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::Media => "media",
            Self::File => "file",
            Self::User => "user",
            Self::System => "system",
            Self::Action => "action",
            Self::Status => "status",
            Self::Help => "help",
            Self::Security => "security",
            Self::Time => "time",
            Self::Communication => "communication",
            Self::Social => "social",
            Self::Rating => "rating",
            Self::Network => "network",
            Self::Layout => "layout",
            Self::Payment => "payment",
            Self::Commerce => "commerce",
            Self::Other => "other",
        }
    }

    /// Parse a category name. Returns `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "navigation" => Some(Self::Navigation),
            "media" => Some(Self::Media),
            "file" => Some(Self::File),
            "user" => Some(Self::User),
            "system" => Some(Self::System),
            "action" => Some(Self::Action),
            "status" => Some(Self::Status),
            "help" => Some(Self::Help),
            "security" => Some(Self::Security),
            "time" => Some(Self::Time),
            "communication" => Some(Self::Communication),
            "social" => Some(Self::Social),
            "rating" => Some(Self::Rating),
            "network" => Some(Self::Network),
            "layout" => Some(Self::Layout),
            "payment" => Some(Self::Payment),
            "commerce" => Some(Self::Commerce),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered classification rules. The first rule whose substring list hits
/// the icon name decides the category.
const RULES: &[(&[&str], Category)] = &[
    (&["arrow", "chevron"], Category::Navigation),
    (&["play", "pause", "stop", "volume"], Category::Media),
    (&["file", "folder", "document"], Category::File),
    (&["user", "person", "profile"], Category::User),
    (&["settings", "config", "gear"], Category::System),
    (&["search", "find"], Category::Action),
    (&["edit", "pencil"], Category::Action),
    (&["delete", "trash", "remove"], Category::Action),
    (&["add", "plus"], Category::Action),
    (&["check", "tick"], Category::Status),
    (&["warning", "error", "exclamation"], Category::Status),
    (&["info", "question"], Category::Help),
    (&["lock", "security"], Category::Security),
    (&["calendar", "clock", "time"], Category::Time),
    (&["mail", "email"], Category::Communication),
    (&["phone", "call"], Category::Communication),
    (&["camera", "photo", "image"], Category::Media),
    (&["video", "movie"], Category::Media),
    (&["music", "audio"], Category::Media),
    (&["heart", "like", "favorite"], Category::Social),
    (&["star", "rating"], Category::Rating),
    (&["share", "social"], Category::Social),
    (&["download", "upload"], Category::Action),
    (&["print", "printer"], Category::Action),
    (&["location", "map", "pin"], Category::Navigation),
    (&["wifi", "network", "signal"], Category::Network),
    (&["battery", "power"], Category::System),
    (&["grid", "list", "layout"], Category::Layout),
    (&["filter", "sort"], Category::Action),
    (&["zoom", "magnify"], Category::Action),
    (&["fullscreen", "expand"], Category::Action),
    (&["menu", "hamburger"], Category::Navigation),
    (&["close", "x"], Category::Action),
    (&["refresh", "sync", "reload"], Category::Action),
    (&["eye", "view"], Category::Action),
    (&["money", "dollar", "payment"], Category::Payment),
    (&["shopping", "cart", "buy"], Category::Commerce),
];

/// Classify an icon name.
///
/// Rules are evaluated in a fixed order, first match wins; names that match
/// nothing land in [`Category::Other`]. Pure function of the name.
pub fn classify(name: &str) -> Category {
    for (needles, category) in RULES {
        if needles.iter().any(|needle| name.contains(needle)) {
            return *category;
        }
    }
    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_substring() {
        assert_eq!(classify("arrow-up"), Category::Navigation);
        assert_eq!(classify("chevron-left"), Category::Navigation);
        assert_eq!(classify("folder-open"), Category::File);
        assert_eq!(classify("credit-card"), Category::Other);
        assert_eq!(classify("lock"), Category::Security);
        assert_eq!(classify("star"), Category::Rating);
        assert_eq!(classify("shopping-bag"), Category::Commerce);
    }

    #[test]
    fn first_matching_rule_wins() {
        // "arrow-play" hits both the navigation and media rules;
        // navigation is listed first.
        assert_eq!(classify("arrow-play"), Category::Navigation);
        // "heart-star" hits social before rating.
        assert_eq!(classify("heart-star"), Category::Social);
    }

    #[test]
    fn single_letter_x_rule_applies() {
        // The close rule matches any name containing an "x", so "xmark"
        // and even "box" classify as action.
        assert_eq!(classify("xmark"), Category::Action);
        assert_eq!(classify("box"), Category::Action);
    }

    #[test]
    fn unmatched_names_fall_back_to_other() {
        assert_eq!(classify("diamond"), Category::Other);
        assert_eq!(classify(""), Category::Other);
    }

    #[test]
    fn classification_is_deterministic() {
        for name in ["arrow-up", "eye-slash", "diamond", "wifi-low"] {
            assert_eq!(classify(name), classify(name));
        }
    }

    #[test]
    fn parse_round_trips_every_category() {
        for category in [
            Category::Navigation,
            Category::Media,
            Category::File,
            Category::User,
            Category::System,
            Category::Action,
            Category::Status,
            Category::Help,
            Category::Security,
            Category::Time,
            Category::Communication,
            Category::Social,
            Category::Rating,
            Category::Network,
            Category::Layout,
            Category::Payment,
            Category::Commerce,
            Category::Other,
        ] {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse("unknown"), None);
    }

    #[test]
    fn unknown_category_string_deserializes_to_other() {
        let category: Category = serde_json::from_str("\"weather\"").unwrap();
        assert_eq!(category, Category::Other);
    }
}
