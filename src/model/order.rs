use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct OrderHistoryDto {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub contact: String,
    pub product_title: String,
    pub quantity: i32,
    pub total_amount: f64,
    pub order_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateOrderHistoryDto {
    pub full_name: String,
    pub email: String,
    pub contact: String,
    pub product_title: String,
    pub quantity: i32,
    pub total_amount: f64,
}

/// Partial update: omitted or null fields are left untouched.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateOrderHistoryDto {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
    pub product_title: Option<String>,
    pub quantity: Option<i32>,
    pub total_amount: Option<f64>,
}
