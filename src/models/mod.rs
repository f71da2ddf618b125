pub mod blog_model;
pub mod project_model;
pub mod tag_model;
