use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QuerySelect,
    RelationTrait, Select,
};

use crate::entities::{language::Language, project, project_translation};
use crate::models::project_model::{ProjectResponse, ProjectRow};
use crate::repositories::tag_repository::TagRepository;

pub struct ProjectRepository;

impl ProjectRepository {
    pub fn query_for(language: Language) -> Select<project::Entity> {
        project::Entity::find()
            .select_only()
            .columns([
                project::Column::Id,
                project::Column::Website,
                project::Column::Repository,
            ])
            .columns([
                project_translation::Column::Title,
                project_translation::Column::Description,
            ])
            .join(
                JoinType::InnerJoin,
                project::Relation::ProjectTranslation.def(),
            )
            .filter(project_translation::Column::Language.eq(language))
    }

    pub async fn find_by_language(
        db: &DatabaseConnection,
        language: Language,
    ) -> Result<Vec<ProjectResponse>, DbErr> {
        let rows = Self::query_for(language)
            .into_model::<ProjectRow>()
            .all(db)
            .await?;

        let mut projects = Vec::with_capacity(rows.len());
        for row in rows {
            let tags = TagRepository::find_by_project_id(db, row.id).await?;
            projects.push(ProjectResponse::from_row(row, tags));
        }

        Ok(projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, QueryTrait, Value};
    use std::collections::BTreeMap;

    #[test]
    fn query_joins_translations_and_filters_language() {
        let sql = ProjectRepository::query_for(Language::Es)
            .build(DatabaseBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#"INNER JOIN "project_translations""#));
        assert!(sql.contains("'ES'"));
    }

    #[tokio::test]
    async fn maps_rows_and_attaches_tags() {
        let row = BTreeMap::from([
            ("id", Value::from(1i64)),
            ("website", Value::from("https://sergioia.dev")),
            (
                "repository",
                Value::from("https://github.com/sergioIA/portfolio"),
            ),
            ("title", Value::from("Portfolio & Personal Blog")),
            ("description", Value::from("a description")),
        ]);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .append_query_results([vec![crate::entities::tag::Model {
                id: 5,
                name: "REACT".to_string(),
            }]])
            .into_connection();

        let projects = ProjectRepository::find_by_language(&db, Language::En)
            .await
            .unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].website, "https://sergioia.dev");
        assert_eq!(projects[0].tags.len(), 1);
        assert_eq!(projects[0].tags[0].name, "React");
    }
}
