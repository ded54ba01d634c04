//! PII categories with fixed precedence and replacement tokens.

use serde::{Deserialize, Serialize};

/// Category of personally identifiable information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    /// Email address.
    Email,
    /// Phone number, contiguous or separated 3-3-4 digit groups.
    Phone,
    /// Payment-card number, four groups of four digits.
    Card,
}

impl PiiCategory {
    /// Categories in application order. Earlier categories consume text
    /// before later ones scan it.
    pub const ORDERED: [PiiCategory; 3] =
        [PiiCategory::Email, PiiCategory::Phone, PiiCategory::Card];

    /// Fixed replacement token for this category.
    pub fn token(&self) -> &'static str {
        match self {
            PiiCategory::Email => "<EMAIL>",
            PiiCategory::Phone => "<PHONE>",
            PiiCategory::Card => "<CARD>",
        }
    }
}

impl std::fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PiiCategory::Email => "email",
            PiiCategory::Phone => "phone",
            PiiCategory::Card => "card",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_order() {
        assert_eq!(
            PiiCategory::ORDERED,
            [PiiCategory::Email, PiiCategory::Phone, PiiCategory::Card]
        );
    }

    #[test]
    fn test_tokens_are_fixed() {
        assert_eq!(PiiCategory::Email.token(), "<EMAIL>");
        assert_eq!(PiiCategory::Phone.token(), "<PHONE>");
        assert_eq!(PiiCategory::Card.token(), "<CARD>");
    }

    #[test]
    fn test_display() {
        assert_eq!(PiiCategory::Email.to_string(), "email");
        assert_eq!(PiiCategory::Card.to_string(), "card");
    }
}
