use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

use crate::entities::{blog_tag, project_tag, tag};
use crate::models::tag_model::TagResponse;

pub struct TagRepository;

impl TagRepository {
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<TagResponse>, DbErr> {
        let tags = tag::Entity::find()
            .order_by_asc(tag::Column::Id)
            .all(db)
            .await?;

        Ok(tags.into_iter().map(TagResponse::from).collect())
    }

    // Attached tag lists are ordered by tag id so repeated reads of the
    // same data serialize identically.
    pub async fn find_by_blog_id(
        db: &DatabaseConnection,
        blog_id: i64,
    ) -> Result<Vec<TagResponse>, DbErr> {
        let tags = tag::Entity::find()
            .join(JoinType::InnerJoin, tag::Relation::BlogTag.def())
            .filter(blog_tag::Column::BlogId.eq(blog_id))
            .order_by_asc(tag::Column::Id)
            .all(db)
            .await?;

        Ok(tags.into_iter().map(TagResponse::from).collect())
    }

    pub async fn find_by_project_id(
        db: &DatabaseConnection,
        project_id: i64,
    ) -> Result<Vec<TagResponse>, DbErr> {
        let tags = tag::Entity::find()
            .join(JoinType::InnerJoin, tag::Relation::ProjectTag.def())
            .filter(project_tag::Column::ProjectId.eq(project_id))
            .order_by_asc(tag::Column::Id)
            .all(db)
            .await?;

        Ok(tags.into_iter().map(TagResponse::from).collect())
    }
}
