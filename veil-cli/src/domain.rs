use serde::Serialize;
use veil::Error;

/// A catalogue item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Item {
    /// Builds a validated item.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `name` is empty or `price` is not a
    /// finite positive number.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        price: f64,
        description: Option<String>,
    ) -> veil::Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::validation("name must not be empty"));
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(Error::validation("price must be positive"));
        }

        Ok(Self {
            id,
            name,
            price,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use veil::ErrorKind;

    use super::*;

    #[test]
    fn builds_valid_item() {
        let item = Item::new(1, "Test Item", 100.0, Some("A test item".into())).unwrap();
        assert_eq!(item.id, 1);
        assert_eq!(item.name, "Test Item");
        assert_eq!(item.description.as_deref(), Some("A test item"));
    }

    #[test]
    fn rejects_empty_name() {
        let err = Item::new(1, "", 1.0, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.message(), "name must not be empty");
    }

    #[test]
    fn rejects_non_positive_or_non_finite_price() {
        for price in [0.0, -50.0, f64::NAN, f64::INFINITY] {
            let err = Item::new(2, "Invalid Item", price, None).unwrap_err();
            assert_eq!(err.message(), "price must be positive", "price: {price}");
        }
    }

    #[test]
    fn description_is_omitted_when_absent() {
        let item = Item::new(4, "Simple Item", 50.0, None).unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({"id": 4, "name": "Simple Item", "price": 50.0}));
    }
}
