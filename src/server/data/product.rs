//! Product data repository. Products live in the history store.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    QuerySelect,
};

use crate::server::model::product::{CreateProductParams, Product, UpdateProductParams};

pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    /// Creates a new ProductRepository over the history store connection.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new product and returns it with its assigned id
    pub async fn create(&self, params: CreateProductParams) -> Result<Product, DbErr> {
        let entity = entity::product::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            image: ActiveValue::Set(params.image),
            in_stock: ActiveValue::Set(params.in_stock),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Product::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Product>, DbErr> {
        let entity = entity::prelude::Product::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Product::from_entity))
    }

    /// Gets a window of products ordered by id
    pub async fn get_paginated(&self, skip: u64, limit: u64) -> Result<Vec<Product>, DbErr> {
        let entities = entity::prelude::Product::find()
            .order_by_asc(entity::product::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Product::from_entity).collect())
    }

    /// Applies the provided fields to a product and stamps `updated_at`.
    ///
    /// Returns `Ok(None)` when no product has the given id.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateProductParams,
    ) -> Result<Option<Product>, DbErr> {
        let Some(product) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::product::ActiveModel = product.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(price) = params.price {
            active_model.price = ActiveValue::Set(price);
        }
        if let Some(image) = params.image {
            active_model.image = ActiveValue::Set(Some(image));
        }
        if let Some(in_stock) = params.in_stock {
            active_model.in_stock = ActiveValue::Set(in_stock);
        }
        active_model.updated_at = ActiveValue::Set(Some(Utc::now()));

        let entity = active_model.update(self.db).await?;

        Ok(Some(Product::from_entity(entity)))
    }

    /// Deletes a product, returning its last state or `None` if it did not exist
    pub async fn delete(&self, id: i32) -> Result<Option<Product>, DbErr> {
        let Some(product) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        entity::prelude::Product::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(Product::from_entity(product)))
    }
}
