//! Order history service over the history store.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::order_history::OrderHistoryRepository,
    error::AppError,
    model::order::{CreateOrderHistoryParams, OrderHistory, UpdateOrderHistoryParams},
};

pub struct OrderService<'a> {
    history_db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(history_db: &'a DatabaseConnection) -> Self {
        Self { history_db }
    }

    /// Records an order placed now
    pub async fn create(&self, params: CreateOrderHistoryParams) -> Result<OrderHistory, AppError> {
        let order = OrderHistoryRepository::new(self.history_db)
            .create(params)
            .await?;

        tracing::info!(
            "Recorded order {} for {} x{}",
            order.id,
            order.product_title,
            order.quantity
        );

        Ok(order)
    }

    pub async fn get(&self, id: i32) -> Result<Option<OrderHistory>, AppError> {
        Ok(OrderHistoryRepository::new(self.history_db)
            .get_by_id(id)
            .await?)
    }

    /// Lists orders newest first
    pub async fn list(&self, skip: u64, limit: u64) -> Result<Vec<OrderHistory>, AppError> {
        Ok(OrderHistoryRepository::new(self.history_db)
            .get_paginated(skip, limit)
            .await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateOrderHistoryParams,
    ) -> Result<Option<OrderHistory>, AppError> {
        Ok(OrderHistoryRepository::new(self.history_db)
            .update(id, params)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<OrderHistory>, AppError> {
        Ok(OrderHistoryRepository::new(self.history_db)
            .delete(id)
            .await?)
    }
}
