use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::Website).text().not_null())
                    .col(ColumnDef::new(Projects::Repository).text().not_null())
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProjectTranslations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectTranslations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProjectTranslations::ProjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectTranslations::Language)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectTranslations::Title)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectTranslations::Description)
                            .text()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_translations_project_id")
                            .from(ProjectTranslations::Table, ProjectTranslations::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProjectTags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectTags::ProjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProjectTags::TagId).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(ProjectTags::ProjectId)
                            .col(ProjectTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_tags_project_id")
                            .from(ProjectTags::Table, ProjectTags::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_tags_tag_id")
                            .from(ProjectTags::Table, ProjectTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectTags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectTranslations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Website,
    Repository,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProjectTranslations {
    Table,
    Id,
    ProjectId,
    Language,
    Title,
    Description,
}

#[derive(DeriveIden)]
enum ProjectTags {
    Table,
    ProjectId,
    TagId,
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
}
