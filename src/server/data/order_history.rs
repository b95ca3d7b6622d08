//! Order history repository over the history store.
//!
//! Orders are append-mostly records. Listing returns the newest orders first so the
//! most recent activity is at the top of the first page.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    QuerySelect, TryIntoModel,
};

use crate::server::model::order::{
    CreateOrderHistoryParams, OrderHistory, UpdateOrderHistoryParams,
};

pub struct OrderHistoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderHistoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new order, stamping `order_date` with the current time.
    ///
    /// # Returns
    /// - `Ok(OrderHistory)` - The stored order with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateOrderHistoryParams) -> Result<OrderHistory, DbErr> {
        let entity = entity::order_history::ActiveModel {
            full_name: ActiveValue::Set(params.full_name),
            email: ActiveValue::Set(params.email),
            contact: ActiveValue::Set(params.contact),
            product_title: ActiveValue::Set(params.product_title),
            quantity: ActiveValue::Set(params.quantity),
            total_amount: ActiveValue::Set(params.total_amount),
            order_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(OrderHistory::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<OrderHistory>, DbErr> {
        let entity = entity::prelude::OrderHistory::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(OrderHistory::from_entity))
    }

    /// Gets a window of orders, newest `order_date` first.
    ///
    /// Ties on `order_date` are broken by descending id so paging is stable.
    ///
    /// # Arguments
    /// - `skip` - Number of rows to skip
    /// - `limit` - Maximum number of rows to return
    pub async fn get_paginated(&self, skip: u64, limit: u64) -> Result<Vec<OrderHistory>, DbErr> {
        let entities = entity::prelude::OrderHistory::find()
            .order_by_desc(entity::order_history::Column::OrderDate)
            .order_by_desc(entity::order_history::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(OrderHistory::from_entity).collect())
    }

    /// Merges provided fields into an order. `order_date` is never changed.
    ///
    /// # Returns
    /// - `Ok(Some(OrderHistory))` - Updated order
    /// - `Ok(None)` - No order with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateOrderHistoryParams,
    ) -> Result<Option<OrderHistory>, DbErr> {
        let Some(order) = entity::prelude::OrderHistory::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::order_history::ActiveModel = order.into();
        if let Some(full_name) = params.full_name {
            active_model.full_name = ActiveValue::Set(full_name);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(contact) = params.contact {
            active_model.contact = ActiveValue::Set(contact);
        }
        if let Some(product_title) = params.product_title {
            active_model.product_title = ActiveValue::Set(product_title);
        }
        if let Some(quantity) = params.quantity {
            active_model.quantity = ActiveValue::Set(quantity);
        }
        if let Some(total_amount) = params.total_amount {
            active_model.total_amount = ActiveValue::Set(total_amount);
        }

        // Nothing to write; ActiveModel::update errors on an empty SET list.
        if !active_model.is_changed() {
            return Ok(Some(OrderHistory::from_entity(
                active_model.try_into_model()?,
            )));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(OrderHistory::from_entity(entity)))
    }

    /// Deletes an order, returning its last state
    pub async fn delete(&self, id: i32) -> Result<Option<OrderHistory>, DbErr> {
        let Some(order) = entity::prelude::OrderHistory::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        entity::prelude::OrderHistory::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(OrderHistory::from_entity(order)))
    }
}
