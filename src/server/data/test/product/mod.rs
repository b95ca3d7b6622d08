use crate::server::{
    data::product::ProductRepository,
    model::product::{CreateProductParams, UpdateProductParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod update;
