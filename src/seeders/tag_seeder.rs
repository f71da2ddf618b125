use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::entities::tag;

pub async fn seed_tags(db: &DatabaseConnection) -> Result<(), String> {
    let names = [
        "HTML", "CSS", "JAVASCRIPT", "TYPESCRIPT", "REACT", "EXPRESS", "NODE", "LINUX", "NIXOS",
        "NIX", "JAVA", "RUST", "FLUTTER", "PYTHON", "DOCKER", "KUBERNETES", "POSTGRESQL",
        "MONGODB", "GIT", "AWS", "VUE", "ANGULAR", "SPRING", "DJANGO",
    ];

    for name in names {
        let exists = tag::Entity::find()
            .filter(tag::Column::Name.eq(name))
            .one(db)
            .await
            .map_err(|e| e.to_string())?;

        if exists.is_none() {
            let new_tag = tag::ActiveModel {
                name: Set(name.to_string()),
                ..Default::default()
            };
            new_tag.insert(db).await.map_err(|e| e.to_string())?;
            tracing::info!("Seeded tag: {}", name);
        }
    }

    Ok(())
}
