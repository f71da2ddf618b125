use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use crate::entities::language::Language;
use crate::models::tag_model::TagResponse;
use crate::utils::api_response::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct ProjectFilterParams {
    pub lang: Option<String>,
}

impl ProjectFilterParams {
    pub fn resolve(self) -> Result<Language, ApiError> {
        self.lang
            .as_deref()
            .and_then(Language::parse)
            .ok_or(ApiError::BadRequest)
    }
}

#[derive(Debug, FromQueryResult)]
pub struct ProjectRow {
    pub id: i64,
    pub website: String,
    pub repository: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: i64,
    pub website: String,
    pub repository: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<TagResponse>,
}

impl ProjectResponse {
    pub fn from_row(row: ProjectRow, tags: Vec<TagResponse>) -> Self {
        ProjectResponse {
            id: row.id,
            website: row.website,
            repository: row.repository,
            title: row.title,
            description: row.description,
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_lang_case_insensitively() {
        let params = ProjectFilterParams {
            lang: Some("es".to_string()),
        };
        assert_eq!(params.resolve().unwrap(), Language::Es);
    }

    #[test]
    fn missing_or_unknown_lang_is_rejected() {
        assert_eq!(
            ProjectFilterParams { lang: None }.resolve().unwrap_err(),
            ApiError::BadRequest
        );
        assert_eq!(
            ProjectFilterParams {
                lang: Some("fr".to_string())
            }
            .resolve()
            .unwrap_err(),
            ApiError::BadRequest
        );
    }
}
