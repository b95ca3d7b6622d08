use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::project::{
    CreateProjectSectionParams, ProjectSection, UpdateProjectSectionParams,
};

pub struct ProjectSectionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectSectionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a section under an existing project.
    ///
    /// The foreign key rejects a missing parent; callers check existence first so they
    /// can report a not-found instead of a constraint error.
    pub async fn create(&self, params: CreateProjectSectionParams) -> Result<ProjectSection, DbErr> {
        let entity = entity::project_section::ActiveModel {
            project_id: ActiveValue::Set(params.project_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            details: ActiveValue::Set(params.details),
            main_image_url: ActiveValue::Set(params.main_image_url),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ProjectSection::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ProjectSection>, DbErr> {
        let entity = entity::prelude::ProjectSection::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ProjectSection::from_entity))
    }

    /// Gets a window of sections ordered by id, optionally limited to one project
    pub async fn get_paginated(
        &self,
        project_id: Option<i32>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<ProjectSection>, DbErr> {
        let mut query = entity::prelude::ProjectSection::find();
        if let Some(project_id) = project_id {
            query = query.filter(entity::project_section::Column::ProjectId.eq(project_id));
        }

        let entities = query
            .order_by_asc(entity::project_section::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ProjectSection::from_entity).collect())
    }

    /// Merges provided fields into a section; the parent project never changes
    pub async fn update(
        &self,
        id: i32,
        params: UpdateProjectSectionParams,
    ) -> Result<Option<ProjectSection>, DbErr> {
        let Some(section) = entity::prelude::ProjectSection::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::project_section::ActiveModel = section.into();
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(details) = params.details {
            active_model.details = ActiveValue::Set(Some(details));
        }
        if let Some(main_image_url) = params.main_image_url {
            active_model.main_image_url = ActiveValue::Set(Some(main_image_url));
        }
        active_model.updated_at = ActiveValue::Set(Some(Utc::now()));

        let entity = active_model.update(self.db).await?;

        Ok(Some(ProjectSection::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<Option<ProjectSection>, DbErr> {
        let Some(section) = entity::prelude::ProjectSection::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        entity::prelude::ProjectSection::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(ProjectSection::from_entity(section)))
    }
}
