use sea_orm::DatabaseConnection;

use crate::server::{
    data::event::EventRepository,
    error::AppError,
    model::event::{CreateEventParams, Event, UpdateEventParams},
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateEventParams) -> Result<Event, AppError> {
        Ok(EventRepository::new(self.db).create(params).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Option<Event>, AppError> {
        Ok(EventRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db)
            .get_paginated(skip, limit)
            .await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateEventParams,
    ) -> Result<Option<Event>, AppError> {
        Ok(EventRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Event>, AppError> {
        Ok(EventRepository::new(self.db).delete(id).await?)
    }
}
