pub mod blog;
pub mod blog_tag;
pub mod blog_translation;
pub mod language;
pub mod project;
pub mod project_tag;
pub mod project_translation;
pub mod tag;
