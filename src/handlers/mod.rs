pub mod blog_handler;
pub mod project_handler;
pub mod tag_handler;
