use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::entities::{language::Language, project, project_tag, project_translation, tag};

pub async fn seed_projects(db: &DatabaseConnection) -> Result<(), String> {
    let count = project::Entity::find()
        .count(db)
        .await
        .map_err(|e| e.to_string())?;
    if count > 0 {
        return Ok(());
    }

    insert_project(
        db,
        "https://sergioIA.dev",
        "https://github.com/sergioIA/portfolio",
        &[
            (
                Language::Es,
                "Portafolio y Personal Blog",
                "Portafolio y Blog personal en el cual busco compartir mis proyectos, conocimiento y pensamientos adquiridos durante la resolución de problemas. Este proyecto incorpora multiples lenguajes y diferentes temas de colores.",
            ),
            (
                Language::En,
                "Portfolio & Personal Blog",
                "A personal Portfolio and Blog where I share my projects, knowledge, and insights gained while solving problems. This project integrates multiple languages and different color schemes.",
            ),
        ],
        &["HTML", "CSS", "REACT", "EXPRESS"],
    )
    .await?;

    insert_project(
        db,
        "https://taskmanager.dev",
        "https://github.com/sergioIA/task-manager",
        &[
            (
                Language::Es,
                "Gestor de Tareas",
                "Aplicación web para gestión de tareas con drag & drop, notificaciones y sincronización en tiempo real. Construida con React, Node.js y WebSocket.",
            ),
            (
                Language::En,
                "Task Manager",
                "Web application for task management with drag & drop, notifications, and real-time synchronization. Built with React, Node.js, and WebSocket.",
            ),
        ],
        &["HTML", "CSS", "REACT", "EXPRESS"],
    )
    .await?;

    tracing::info!("Seeded projects");
    Ok(())
}

async fn insert_project(
    db: &DatabaseConnection,
    website: &str,
    repository: &str,
    translations: &[(Language, &str, &str)],
    tag_names: &[&str],
) -> Result<(), String> {
    let saved = project::ActiveModel {
        website: Set(website.to_string()),
        repository: Set(repository.to_string()),
        created_at: Set(Utc::now()),
        updated_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| e.to_string())?;

    for (language, title, description) in translations {
        project_translation::ActiveModel {
            project_id: Set(saved.id),
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
        project_tag::ActiveModel {
            project_id: Set(saved.id),
            tag_id: Set(tag.id),
        }
        .insert(db)
        .await
        .map_err(|e| e.to_string())?;
    }

    Ok(())
}
