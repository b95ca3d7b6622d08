use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000002_create_project_table::Project;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectSection::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectSection::Id))
                    .col(integer(ProjectSection::ProjectId))
                    .col(string(ProjectSection::Title))
                    .col(text_null(ProjectSection::Description))
                    .col(text_null(ProjectSection::Details))
                    .col(string_null(ProjectSection::MainImageUrl))
                    .col(
                        timestamp_with_time_zone(ProjectSection::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(ProjectSection::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_sections_project_id")
                            .from(ProjectSection::Table, ProjectSection::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectSection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProjectSection {
    #[sea_orm(iden = "projects_sections")]
    Table,
    Id,
    ProjectId,
    Title,
    Description,
    Details,
    MainImageUrl,
    CreatedAt,
    UpdatedAt,
}
