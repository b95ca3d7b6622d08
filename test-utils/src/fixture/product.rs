//! Product fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::product;

/// Default test product name.
pub const DEFAULT_NAME: &str = "Test Product";

/// Default test product description.
pub const DEFAULT_DESCRIPTION: &str = "A product used in tests";

/// Default test product price.
pub const DEFAULT_PRICE: f64 = 19.99;

/// Creates a product entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Product"`
/// - description: `Some("A product used in tests")`
/// - price: `19.99`
/// - image: `None`
/// - in_stock: `true`
/// - created_at: `2025-01-01T00:00:00Z`
/// - updated_at: `None`
pub fn entity() -> product::Model {
    entity_builder().build()
}

/// Creates a product entity builder for customization.
pub fn entity_builder() -> ProductEntityBuilder {
    ProductEntityBuilder::default()
}

/// Builder for creating customized product entity models.
pub struct ProductEntityBuilder {
    entity: product::Model,
}

impl Default for ProductEntityBuilder {
    fn default() -> Self {
        Self {
            entity: product::Model {
                id: 1,
                name: DEFAULT_NAME.to_string(),
                description: Some(DEFAULT_DESCRIPTION.to_string()),
                price: DEFAULT_PRICE,
                image: None,
                in_stock: true,
                created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
                updated_at: None,
            },
        }
    }
}

impl ProductEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.entity.price = price;
        self
    }

    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.entity.in_stock = in_stock;
        self
    }

    pub fn build(self) -> product::Model {
        self.entity
    }
}
