//! Order history domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::order::{CreateOrderHistoryDto, OrderHistoryDto, UpdateOrderHistoryDto};

/// A recorded order. Lives in the history store.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderHistory {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub contact: String,
    pub product_title: String,
    pub quantity: i32,
    pub total_amount: f64,
    pub order_date: DateTime<Utc>,
}

impl OrderHistory {
    pub fn from_entity(entity: entity::order_history::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            email: entity.email,
            contact: entity.contact,
            product_title: entity.product_title,
            quantity: entity.quantity,
            total_amount: entity.total_amount,
            order_date: entity.order_date,
        }
    }

    pub fn into_dto(self) -> OrderHistoryDto {
        OrderHistoryDto {
            id: self.id,
            full_name: self.full_name,
            email: self.email,
            contact: self.contact,
            product_title: self.product_title,
            quantity: self.quantity,
            total_amount: self.total_amount,
            order_date: self.order_date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateOrderHistoryParams {
    pub full_name: String,
    pub email: String,
    pub contact: String,
    pub product_title: String,
    pub quantity: i32,
    pub total_amount: f64,
}

impl CreateOrderHistoryParams {
    pub fn from_dto(dto: CreateOrderHistoryDto) -> Self {
        Self {
            full_name: dto.full_name,
            email: dto.email,
            contact: dto.contact,
            product_title: dto.product_title,
            quantity: dto.quantity,
            total_amount: dto.total_amount,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateOrderHistoryParams {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
    pub product_title: Option<String>,
    pub quantity: Option<i32>,
    pub total_amount: Option<f64>,
}

impl UpdateOrderHistoryParams {
    pub fn from_dto(dto: UpdateOrderHistoryDto) -> Self {
        Self {
            full_name: dto.full_name,
            email: dto.email,
            contact: dto.contact,
            product_title: dto.product_title,
            quantity: dto.quantity,
            total_amount: dto.total_amount,
        }
    }
}
