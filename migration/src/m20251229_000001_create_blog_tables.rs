use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Blogs (language-independent part)
        manager
            .create_table(
                Table::create()
                    .table(Blogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Blogs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Blogs::Url).text().not_null())
                    .col(ColumnDef::new(Blogs::ImagePath).text().not_null())
                    .col(
                        ColumnDef::new(Blogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Blogs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // 2. Per-language title/description.
        // No unique (blog_id, language) index: duplicate translation rows
        // are a known upstream concern and surface as duplicate result rows.
        manager
            .create_table(
                Table::create()
                    .table(BlogTranslations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogTranslations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BlogTranslations::BlogId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BlogTranslations::Language)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BlogTranslations::Title)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BlogTranslations::Description)
                            .text()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_translations_blog_id")
                            .from(BlogTranslations::Table, BlogTranslations::BlogId)
                            .to(Blogs::Table, Blogs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 3. Tags
        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tags::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Tags::Name)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // 4. BlogTags (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(BlogTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BlogTags::BlogId).big_integer().not_null())
                    .col(ColumnDef::new(BlogTags::TagId).big_integer().not_null())
                    .primary_key(Index::create().col(BlogTags::BlogId).col(BlogTags::TagId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_tags_blog_id")
                            .from(BlogTags::Table, BlogTags::BlogId)
                            .to(Blogs::Table, Blogs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_tags_tag_id")
                            .from(BlogTags::Table, BlogTags::TagId)
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
            .drop_table(Table::drop().table(BlogTags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BlogTranslations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Blogs::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Blogs {
    Table,
    Id,
    Url,
    ImagePath,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum BlogTranslations {
    Table,
    Id,
    BlogId,
    Language,
    Title,
    Description,
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum BlogTags {
    Table,
    BlogId,
    TagId,
}
