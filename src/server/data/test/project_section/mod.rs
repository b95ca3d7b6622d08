use crate::server::{
    data::project_section::ProjectSectionRepository,
    model::project::{CreateProjectSectionParams, UpdateProjectSectionParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod update;
