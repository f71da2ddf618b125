use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QuerySelect,
    RelationTrait, Select,
};

use crate::entities::{blog, blog_tag, blog_translation, language::Language, tag};
use crate::models::blog_model::{BlogResponse, BlogRow, FilterSpec};
use crate::repositories::tag_repository::TagRepository;
use crate::utils::string_manipulation::escape_like_pattern;

pub struct BlogRepository;

impl BlogRepository {
    // Inner join: blogs without a translation in the requested language
    // simply drop out of the result.
    fn base_query(language: Language) -> Select<blog::Entity> {
        blog::Entity::find()
            .select_only()
            .columns([blog::Column::Id, blog::Column::Url, blog::Column::ImagePath])
            .columns([
                blog_translation::Column::Title,
                blog_translation::Column::Description,
            ])
            .join(JoinType::InnerJoin, blog::Relation::BlogTranslation.def())
            .filter(blog_translation::Column::Language.eq(language))
    }

    fn with_tag_joins(query: Select<blog::Entity>) -> Select<blog::Entity> {
        query
            .join(JoinType::InnerJoin, blog::Relation::BlogTag.def())
            .join(JoinType::InnerJoin, blog_tag::Relation::Tag.def())
    }

    // Literal substring containment: the needle is escaped so %, _ and \
    // in it never act as wildcards, and both sides are lower-cased.
    fn title_contains(needle: &str) -> SimpleExpr {
        let pattern = format!("%{}%", escape_like_pattern(needle).to_lowercase());
        Expr::expr(Func::lower(Expr::col((
            blog_translation::Entity,
            blog_translation::Column::Title,
        ))))
        .like(LikeExpr::new(pattern).escape('\\'))
    }

    /// One query per `FilterSpec` variant. LIMIT is part of the statement,
    /// so row capping happens before any tag enrichment.
    pub fn query_for(language: Language, filter: &FilterSpec) -> Select<blog::Entity> {
        let query = Self::base_query(language);
        match filter {
            FilterSpec::Plain => query,
            FilterSpec::ByMatch(needle) => query.filter(Self::title_contains(needle)),
            FilterSpec::ByTag(tag_name) => Self::with_tag_joins(query)
                .filter(tag::Column::Name.eq(tag_name.trim().to_uppercase())),
            FilterSpec::ByQuantity(quantity) => query.limit(*quantity),
            FilterSpec::ByTagAndQuantity(tag_name, quantity) => Self::with_tag_joins(query)
                .filter(tag::Column::Name.eq(tag_name.trim().to_uppercase()))
                .limit(*quantity),
        }
    }

    pub async fn find_by_filter(
        db: &DatabaseConnection,
        language: Language,
        filter: &FilterSpec,
    ) -> Result<Vec<BlogResponse>, DbErr> {
        let rows = Self::query_for(language, filter)
            .into_model::<BlogRow>()
            .all(db)
            .await?;

        let mut blogs = Vec::with_capacity(rows.len());
        for row in rows {
            let tags = TagRepository::find_by_blog_id(db, row.id).await?;
            blogs.push(BlogResponse::from_row(row, tags));
        }

        Ok(blogs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tag_model::TagResponse;
    use sea_orm::{DatabaseBackend, MockDatabase, QueryTrait, Value};
    use std::collections::BTreeMap;

    fn sql_for(filter: &FilterSpec) -> String {
        BlogRepository::query_for(Language::En, filter)
            .build(DatabaseBackend::Postgres)
            .to_string()
    }

    #[test]
    fn plain_variant_joins_translations_only() {
        let sql = sql_for(&FilterSpec::Plain);
        assert!(sql.contains(r#"INNER JOIN "blog_translations""#));
        assert!(sql.contains("'EN'"));
        assert!(!sql.contains(r#""blog_tags""#));
        assert!(!sql.contains("LIMIT"));
    }

    #[test]
    fn match_variant_lowers_title_and_escapes_the_needle() {
        let sql = sql_for(&FilterSpec::ByMatch("Rust".to_string()));
        assert!(sql.contains("LOWER"));
        assert!(sql.contains("LIKE"));
        assert!(sql.contains("ESCAPE"));
        assert!(sql.contains("%rust%"));
        assert!(!sql.contains(r#""blog_tags""#));
    }

    #[test]
    fn match_needle_wildcards_are_neutralized() {
        // The exact escape rendering is backend business; what matters is
        // that the raw needle never reaches the pattern unescaped.
        let sql = sql_for(&FilterSpec::ByMatch("50%".to_string()));
        assert!(sql.contains("ESCAPE"));
        assert!(!sql.contains("'%50%'"));
    }

    #[test]
    fn tag_variant_joins_tags_and_compares_upper_cased() {
        let sql = sql_for(&FilterSpec::ByTag("rust".to_string()));
        assert!(sql.contains(r#"INNER JOIN "blog_tags""#));
        assert!(sql.contains(r#"INNER JOIN "tags""#));
        assert!(sql.contains("'RUST'"));
        assert!(!sql.contains("LIMIT"));
    }

    #[test]
    fn quantity_variant_limits_rows_in_sql() {
        let sql = sql_for(&FilterSpec::ByQuantity(2));
        assert!(sql.contains("LIMIT 2"));
        assert!(!sql.contains(r#""blog_tags""#));
    }

    #[test]
    fn tag_and_quantity_variant_combines_joins_with_limit() {
        let sql = sql_for(&FilterSpec::ByTagAndQuantity("rust".to_string(), 2));
        assert!(sql.contains(r#"INNER JOIN "blog_tags""#));
        assert!(sql.contains(r#"INNER JOIN "tags""#));
        assert!(sql.contains("'RUST'"));
        assert!(sql.contains("LIMIT 2"));
    }

    fn blog_row(id: i64, url: &str, title: &str) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([
            ("id", Value::from(id)),
            ("url", Value::from(url)),
            ("image_path", Value::from("cover.webp")),
            ("title", Value::from(title)),
            ("description", Value::from("a description")),
        ])
    }

    #[tokio::test]
    async fn attaches_capitalized_tags_to_each_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![blog_row(
                1,
                "blog/rust-performance-tips",
                "Rust Performance Tips",
            )]])
            .append_query_results([vec![
                tag::Model {
                    id: 4,
                    name: "RUST".to_string(),
                },
                tag::Model {
                    id: 8,
                    name: "LINUX".to_string(),
                },
            ]])
            .into_connection();

        let blogs = BlogRepository::find_by_filter(&db, Language::En, &FilterSpec::Plain)
            .await
            .unwrap();

        assert_eq!(blogs.len(), 1);
        assert_eq!(blogs[0].id, 1);
        assert_eq!(blogs[0].title, "Rust Performance Tips");
        assert_eq!(
            blogs[0].tags,
            vec![
                TagResponse {
                    id: 4,
                    name: "Rust".to_string()
                },
                TagResponse {
                    id: 8,
                    name: "Linux".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn no_translations_yield_empty_vec() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&'static str, Value>>::new()])
            .into_connection();

        let blogs = BlogRepository::find_by_filter(&db, Language::En, &FilterSpec::Plain)
            .await
            .unwrap();
        assert!(blogs.is_empty());
    }

    #[tokio::test]
    async fn rows_without_tags_get_an_empty_list() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![blog_row(2, "blog/react-web-development", "React")]])
            .append_query_results([Vec::<tag::Model>::new()])
            .into_connection();

        let blogs = BlogRepository::find_by_filter(&db, Language::Es, &FilterSpec::Plain)
            .await
            .unwrap();
        assert_eq!(blogs.len(), 1);
        assert!(blogs[0].tags.is_empty());
    }
}
