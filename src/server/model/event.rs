//! Event domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::event::{CreateEventDto, EventDto, UpdateEventDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub time: String,
    pub location: String,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            date: entity.date,
            time: entity.time,
            location: entity.location,
            url: entity.url,
            image_url: entity.image_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            title: self.title,
            description: self.description,
            date: self.date,
            time: self.time,
            location: self.location,
            url: self.url,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub time: String,
    pub location: String,
    pub url: Option<String>,
    pub image_url: Option<String>,
}

impl CreateEventParams {
    pub fn from_dto(dto: CreateEventDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            date: dto.date,
            time: dto.time,
            location: dto.location,
            url: dto.url,
            image_url: dto.image_url,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEventParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
}

impl UpdateEventParams {
    pub fn from_dto(dto: UpdateEventDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            date: dto.date,
            time: dto.time,
            location: dto.location,
            url: dto.url,
            image_url: dto.image_url,
        }
    }
}
