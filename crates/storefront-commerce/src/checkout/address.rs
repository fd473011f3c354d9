//! Address types.

use serde::{Deserialize, Serialize};

/// A shipping address as collected by the checkout form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Address {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Street address.
    pub address1: String,
    /// City.
    pub city: String,
    /// Postal/ZIP code.
    pub zip: String,
}

impl Address {
    /// Create a new address.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address1: impl Into<String>,
        city: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address1: address1.into(),
            city: city.into(),
            zip: zip.into(),
        }
    }

    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        format!("{}, {} {}", self.address1, self.city, self.zip)
    }

    /// Required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("address", &self.address1),
            ("city", &self.city),
            ("zip code", &self.zip),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Check if address is complete.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_address() {
        let address = Address::new("Ada", "Lovelace", "12 Analytical Way", "London", "N1 9GU");
        assert!(address.is_complete());
        assert_eq!(address.full_name(), "Ada Lovelace");
        assert_eq!(address.one_line(), "12 Analytical Way, London N1 9GU");
    }

    #[test]
    fn test_missing_fields() {
        let address = Address {
            first_name: "Ada".to_string(),
            city: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            address.missing_fields(),
            vec!["last name", "address", "city", "zip code"]
        );
        assert!(!address.is_complete());
    }
}
