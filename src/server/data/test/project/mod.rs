use crate::server::{
    data::project::ProjectRepository,
    model::project::{CreateProjectParams, UpdateProjectParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod get_paginated;
mod update;
