use crate::server::{
    data::event::EventRepository,
    model::event::{CreateEventParams, UpdateEventParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;
