use crate::server::{
    data::order_history::OrderHistoryRepository,
    model::order::{CreateOrderHistoryParams, UpdateOrderHistoryParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod update;
