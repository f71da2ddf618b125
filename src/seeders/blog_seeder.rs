use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::entities::{blog, blog_tag, blog_translation, language::Language, tag};

pub async fn seed_blogs(db: &DatabaseConnection) -> Result<(), String> {
    let count = blog::Entity::find()
        .count(db)
        .await
        .map_err(|e| e.to_string())?;
    if count > 0 {
        return Ok(());
    }

    insert_blog(
        db,
        "blog/linux-administration-guide",
        "linux-admin.webp",
        &[
            (
                Language::Es,
                "Guía de Administración de Linux",
                "Una guía completa sobre administración de sistemas Linux, incluyendo configuración de servidores, gestión de usuarios y optimización de rendimiento.",
            ),
            (
                Language::En,
                "Linux Administration Guide",
                "A comprehensive guide to Linux system administration, including server setup, user management, and performance optimization.",
            ),
        ],
        &["LINUX", "NIXOS", "NIX", "JAVA", "JAVASCRIPT", "TYPESCRIPT", "RUST", "FLUTTER"],
    )
    .await?;

    // Spanish-only on purpose; EN listings skip it via the inner join.
    insert_blog(
        db,
        "blog/react-web-development",
        "react-dev.webp",
        &[(
            Language::Es,
            "Desarrollo Web con React",
            "Aprende a construir aplicaciones web modernas con React, incluyendo hooks, estado global y mejores prácticas.",
        )],
        &["LINUX", "NIXOS", "NIX", "JAVA", "JAVASCRIPT", "TYPESCRIPT", "RUST", "FLUTTER"],
    )
    .await?;

    insert_blog(
        db,
        "blog/rust-performance-tips",
        "rust-performance.webp",
        &[
            (
                Language::En,
                "Rust Performance Tips",
                "Advanced techniques for optimizing Rust applications, including memory management and concurrency patterns.",
            ),
            (
                Language::Es,
                "Consejos de Rendimiento en Rust",
                "Técnicas avanzadas para optimizar aplicaciones Rust, incluyendo gestión de memoria y patrones de concurrencia.",
            ),
        ],
        &["RUST", "LINUX", "DOCKER"],
    )
    .await?;

    tracing::info!("Seeded blogs");
    Ok(())
}

async fn insert_blog(
    db: &DatabaseConnection,
    url: &str,
    image_path: &str,
    translations: &[(Language, &str, &str)],
    tag_names: &[&str],
) -> Result<(), String> {
    let saved = blog::ActiveModel {
        url: Set(url.to_string()),
        image_path: Set(image_path.to_string()),
        created_at: Set(Utc::now()),
        updated_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| e.to_string())?;

    for (language, title, description) in translations {
        blog_translation::ActiveModel {
            blog_id: Set(saved.id),
            language: Set(*language),
            title: Set(title.to_string()),
            description: Set(description.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(|e| e.to_string())?;
    }

    let tags = tag::Entity::find()
        .filter(tag::Column::Name.is_in(tag_names.iter().copied()))
        .all(db)
        .await
        .map_err(|e| e.to_string())?;

    for tag in tags {
        blog_tag::ActiveModel {
            blog_id: Set(saved.id),
            tag_id: Set(tag.id),
        }
        .insert(db)
        .await
        .map_err(|e| e.to_string())?;
    }

    Ok(())
}
