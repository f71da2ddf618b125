pub mod blog_seeder;
pub mod project_seeder;
pub mod tag_seeder;

use sea_orm::DatabaseConnection;

pub async fn run_seeders(db: &DatabaseConnection) -> Result<(), String> {
    // 1. Tags first, blogs and projects link against them
    tag_seeder::seed_tags(db).await?;

    // 2. Blogs
    blog_seeder::seed_blogs(db).await?;

    // 3. Projects
    project_seeder::seed_projects(db).await?;

    Ok(())
}
