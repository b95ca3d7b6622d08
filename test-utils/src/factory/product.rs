//! Product factory for creating test product entities in the history store.

use crate::{factory::helpers::next_id, fixture};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products with customizable fields.
///
/// Default values are sourced from the product fixture.
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::product::Model,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with defaults from `fixture::product`.
    ///
    /// The name is suffixed with a unique counter value.
    ///
    /// # Arguments
    /// - `db` - History database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::product::entity_builder()
            .name(format!("Product {}", id))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.entity.price = price;
        self
    }

    pub fn image(mut self, image: Option<String>) -> Self {
        self.entity.image = image;
        self
    }

    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.entity.in_stock = in_stock;
        self
    }

    /// Builds and inserts the product entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::product::Model)` - Created product entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
            price: ActiveValue::Set(self.entity.price),
            image: ActiveValue::Set(self.entity.image),
            in_stock: ActiveValue::Set(self.entity.in_stock),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a product with default values.
pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).build().await
}
