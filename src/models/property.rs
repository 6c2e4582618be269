//! Property entity and write inputs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A persisted property listing.
///
/// The store owns the authoritative copy; cached snapshots hold clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a property. `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProperty {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub location: String,
}

impl NewProperty {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            price,
            location: location.into(),
        }
    }

    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_title(&self.title).or_else(|| validate_price(self.price))
    }
}

/// Partial update of a property. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PropertyChanges {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub location: Option<String>,
}

impl PropertyChanges {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        self.title
            .as_deref()
            .and_then(validate_title)
            .or_else(|| self.price.and_then(validate_price))
    }

    /// Applies the changes to `property` in place. `id` and `created_at` never change.
    pub fn apply_to(self, property: &mut Property) {
        if let Some(title) = self.title {
            property.title = title;
        }
        if let Some(description) = self.description {
            property.description = description;
        }
        if let Some(price) = self.price {
            property.price = price;
        }
        if let Some(location) = self.location {
            property.location = location;
        }
    }
}

fn validate_title(title: &str) -> Option<String> {
    if title.trim().is_empty() {
        Some("Title cannot be empty".to_string())
    } else {
        None
    }
}

fn validate_price(price: Decimal) -> Option<String> {
    if price.is_sign_negative() && !price.is_zero() {
        Some("Price cannot be negative".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Property {
        Property {
            id: 1,
            title: "Urban Loft".to_string(),
            description: "Exposed brick".to_string(),
            price: Decimal::new(280000, 2),
            location: "Arts District".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_price_serializes_as_string() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["price"], "2800.00");
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn test_new_property_accepts_numeric_price() {
        let json = r#"{"title": "Cabin", "price": 1800.5}"#;
        let new: NewProperty = serde_json::from_str(json).unwrap();
        assert_eq!(new.price, Decimal::new(18005, 1));
        assert!(new.description.is_empty());
        assert!(new.validate().is_none());
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let new = NewProperty::new("  ", "", Decimal::ONE, "");
        assert!(new.validate().is_some());
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let new = NewProperty::new("Cabin", "", Decimal::new(-1, 0), "");
        assert_eq!(new.validate().unwrap(), "Price cannot be negative");

        let changes = PropertyChanges {
            price: Some(Decimal::new(-5, 0)),
            ..Default::default()
        };
        assert!(changes.validate().is_some());
    }

    #[test]
    fn test_apply_changes_keeps_identity() {
        let mut property = sample();
        let created_at = property.created_at;
        PropertyChanges {
            title: Some("Renovated Loft".to_string()),
            price: Some(Decimal::new(300000, 2)),
            ..Default::default()
        }
        .apply_to(&mut property);

        assert_eq!(property.id, 1);
        assert_eq!(property.created_at, created_at);
        assert_eq!(property.title, "Renovated Loft");
        assert_eq!(property.location, "Arts District");
        assert_eq!(property.price, Decimal::new(300000, 2));
    }
}
