//! Order history factory for creating test order entities in the history store.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
pub struct OrderHistoryFactory<'a> {
    db: &'a DatabaseConnection,
    full_name: String,
    email: String,
    product_title: String,
    quantity: i32,
    total_amount: f64,
    order_date: DateTime<Utc>,
}

impl<'a> OrderHistoryFactory<'a> {
    /// Creates a new OrderHistoryFactory with default values.
    ///
    /// Defaults:
    /// - full_name: `"Customer {id}"`
    /// - email: `"customer{id}@example.com"`
    /// - product_title: `"Test Product"`
    /// - quantity: `1`
    /// - total_amount: `19.99`
    /// - order_date: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            full_name: format!("Customer {}", id),
            email: format!("customer{}@example.com", id),
            product_title: "Test Product".to_string(),
            quantity: 1,
            total_amount: 19.99,
            order_date: Utc::now(),
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn total_amount(mut self, total_amount: f64) -> Self {
        self.total_amount = total_amount;
        self
    }

    pub fn order_date(mut self, order_date: DateTime<Utc>) -> Self {
        self.order_date = order_date;
        self
    }

    /// Builds and inserts the order entity into the database.
    pub async fn build(self) -> Result<entity::order_history::Model, DbErr> {
        entity::order_history::ActiveModel {
            full_name: ActiveValue::Set(self.full_name),
            email: ActiveValue::Set(self.email),
            contact: ActiveValue::Set("+10000000000".to_string()),
            product_title: ActiveValue::Set(self.product_title),
            quantity: ActiveValue::Set(self.quantity),
            total_amount: ActiveValue::Set(self.total_amount),
            order_date: ActiveValue::Set(self.order_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order with default values.
pub async fn create_order(
    db: &DatabaseConnection,
) -> Result<entity::order_history::Model, DbErr> {
    OrderHistoryFactory::new(db).build().await
}
