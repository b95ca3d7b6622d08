//! Project data repository.
//!
//! Projects are returned together with their sections. Sections are loaded eagerly with a
//! second query keyed on the fetched project ids and grouped in memory, so a page of
//! projects costs two round trips regardless of its size.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::project::{CreateProjectParams, Project, UpdateProjectParams};

pub struct ProjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectRepository<'a> {
    /// Creates a new ProjectRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the primary database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a project. A new project has no sections yet.
    ///
    /// # Returns
    /// - `Ok(Project)` - The created project with an empty section list
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateProjectParams) -> Result<Project, DbErr> {
        let entity = entity::project::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            overview: ActiveValue::Set(params.overview),
            main_image_url: ActiveValue::Set(params.main_image_url),
            status: ActiveValue::Set(params.status),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Project::from_entity(entity, Vec::new()))
    }

    /// Gets a project by id with its sections.
    ///
    /// # Returns
    /// - `Ok(Some(Project))` - Project with sections in ascending id order
    /// - `Ok(None)` - No project with that id
    /// - `Err(DbErr)` - Database error during either query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Project>, DbErr> {
        let Some(project) = entity::prelude::Project::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let sections = self.sections_for(&[project.id]).await?.remove(&project.id);

        Ok(Some(Project::from_entity(project, sections.unwrap_or_default())))
    }

    /// Gets a window of projects ordered by id, each with its sections.
    ///
    /// # Arguments
    /// - `skip` - Number of projects to skip
    /// - `limit` - Maximum number of projects to return
    pub async fn get_paginated(&self, skip: u64, limit: u64) -> Result<Vec<Project>, DbErr> {
        let projects = entity::prelude::Project::find()
            .order_by_asc(entity::project::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = projects.iter().map(|p| p.id).collect();
        let mut sections = self.sections_for(&ids).await?;

        Ok(projects
            .into_iter()
            .map(|p| {
                let own = sections.remove(&p.id).unwrap_or_default();
                Project::from_entity(p, own)
            })
            .collect())
    }

    /// Merges provided fields into a project and stamps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Project))` - Updated project with its sections
    /// - `Ok(None)` - No project with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdateProjectParams,
    ) -> Result<Option<Project>, DbErr> {
        let Some(project) = entity::prelude::Project::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::project::ActiveModel = project.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(overview) = params.overview {
            active_model.overview = ActiveValue::Set(Some(overview));
        }
        if let Some(main_image_url) = params.main_image_url {
            active_model.main_image_url = ActiveValue::Set(Some(main_image_url));
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(Some(status));
        }
        active_model.updated_at = ActiveValue::Set(Some(Utc::now()));

        let entity = active_model.update(self.db).await?;
        let sections = self.sections_for(&[entity.id]).await?.remove(&entity.id);

        Ok(Some(Project::from_entity(entity, sections.unwrap_or_default())))
    }

    /// Deletes a project row.
    ///
    /// Sections are never removed here. The foreign key restricts deletion, so a
    /// project that still has sections fails with a foreign key violation.
    ///
    /// # Returns
    /// - `Ok(Some(Project))` - The project as it was before deletion
    /// - `Ok(None)` - No project with that id
    /// - `Err(DbErr)` - Database error, including the foreign key violation
    pub async fn delete(&self, id: i32) -> Result<Option<Project>, DbErr> {
        let Some(project) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        entity::prelude::Project::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(project))
    }

    /// Checks whether a project with the given id exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Project::find()
            .filter(entity::project::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Fetches sections for the given projects in one query, grouped by project id
    async fn sections_for(
        &self,
        project_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::project_section::Model>>, DbErr> {
        if project_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let sections = entity::prelude::ProjectSection::find()
            .filter(entity::project_section::Column::ProjectId.is_in(project_ids.to_vec()))
            .order_by_asc(entity::project_section::Column::Id)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<entity::project_section::Model>> = HashMap::new();
        for section in sections {
            grouped.entry(section.project_id).or_default().push(section);
        }

        Ok(grouped)
    }
}
