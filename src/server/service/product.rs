use sea_orm::DatabaseConnection;

use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::product::{CreateProductParams, Product, UpdateProductParams},
};

/// Product catalogue operations over the history store.
pub struct ProductService<'a> {
    history_db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(history_db: &'a DatabaseConnection) -> Self {
        Self { history_db }
    }

    pub async fn create(&self, params: CreateProductParams) -> Result<Product, AppError> {
        Ok(ProductRepository::new(self.history_db).create(params).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Option<Product>, AppError> {
        Ok(ProductRepository::new(self.history_db).get_by_id(id).await?)
    }

    pub async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Product>, AppError> {
        Ok(ProductRepository::new(self.history_db)
            .get_paginated(skip, limit)
            .await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateProductParams,
    ) -> Result<Option<Product>, AppError> {
        Ok(ProductRepository::new(self.history_db)
            .update(id, params)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Product>, AppError> {
        Ok(ProductRepository::new(self.history_db).delete(id).await?)
    }
}
