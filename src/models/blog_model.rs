use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use crate::entities::language::Language;
use crate::models::tag_model::TagResponse;
use crate::utils::api_response::ApiError;

/// Which query variant a request resolves to. Exactly one variant is picked
/// per request; the precedence lives in `FilterSpec::from_parts` and nowhere
/// else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSpec {
    Plain,
    ByMatch(String),
    ByTag(String),
    ByQuantity(u64),
    ByTagAndQuantity(String, u64),
}

impl FilterSpec {
    /// Precedence: quantity+tag beats plain quantity, which beats match,
    /// which beats plain tag.
    pub fn from_parts(
        match_title: Option<String>,
        tag: Option<String>,
        quantity: Option<u64>,
    ) -> FilterSpec {
        match (quantity, tag, match_title) {
            (Some(quantity), Some(tag), _) => FilterSpec::ByTagAndQuantity(tag, quantity),
            (Some(quantity), None, _) => FilterSpec::ByQuantity(quantity),
            (None, _, Some(needle)) => FilterSpec::ByMatch(needle),
            (None, Some(tag), None) => FilterSpec::ByTag(tag),
            (None, None, None) => FilterSpec::Plain,
        }
    }
}

/// Raw query string of `GET /blogs`. `quantity` stays a string here so the
/// reject-with-400 policy is ours, not the extractor's.
#[derive(Debug, Default, Deserialize)]
pub struct BlogFilterParams {
    pub lang: Option<String>,
    #[serde(rename = "match")]
    pub match_title: Option<String>,
    pub tag: Option<String>,
    pub quantity: Option<String>,
}

impl BlogFilterParams {
    pub fn resolve(self) -> Result<(Language, FilterSpec), ApiError> {
        let language = self
            .lang
            .as_deref()
            .and_then(Language::parse)
            .ok_or(ApiError::BadRequest)?;

        // Non-numeric or non-positive quantities are request errors.
        let quantity = match self.quantity {
            Some(raw) => {
                let parsed: i64 = raw.trim().parse().map_err(|_| ApiError::BadRequest)?;
                if parsed < 1 {
                    return Err(ApiError::BadRequest);
                }
                Some(parsed as u64)
            }
            None => None,
        };

        Ok((
            language,
            FilterSpec::from_parts(self.match_title, self.tag, quantity),
        ))
    }
}

/// One row of the blog/translation join, before tag enrichment.
#[derive(Debug, FromQueryResult)]
pub struct BlogRow {
    pub id: i64,
    pub url: String,
    pub image_path: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct BlogResponse {
    pub id: i64,
    pub url: String,
    pub image_path: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<TagResponse>,
}

impl BlogResponse {
    pub fn from_row(row: BlogRow, tags: Vec<TagResponse>) -> Self {
        BlogResponse {
            id: row.id,
            url: row.url,
            image_path: row.image_path,
            title: row.title,
            description: row.description,
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(
        lang: Option<&str>,
        match_title: Option<&str>,
        tag: Option<&str>,
        quantity: Option<&str>,
    ) -> BlogFilterParams {
        BlogFilterParams {
            lang: lang.map(String::from),
            match_title: match_title.map(String::from),
            tag: tag.map(String::from),
            quantity: quantity.map(String::from),
        }
    }

    #[test]
    fn missing_lang_is_rejected() {
        let err = params(None, None, None, None).resolve().unwrap_err();
        assert_eq!(err, ApiError::BadRequest);
    }

    #[test]
    fn unknown_lang_is_rejected() {
        let err = params(Some("xx"), None, None, None).resolve().unwrap_err();
        assert_eq!(err, ApiError::BadRequest);
    }

    #[test]
    fn lang_is_normalized_before_matching() {
        let (language, spec) = params(Some(" en "), None, None, None).resolve().unwrap();
        assert_eq!(language, Language::En);
        assert_eq!(spec, FilterSpec::Plain);
    }

    #[test]
    fn quantity_and_tag_beat_everything_else() {
        let (_, spec) = params(Some("es"), Some("rust"), Some("RUST"), Some("2"))
            .resolve()
            .unwrap();
        assert_eq!(spec, FilterSpec::ByTagAndQuantity("RUST".into(), 2));
    }

    #[test]
    fn quantity_alone_beats_match() {
        let (_, spec) = params(Some("es"), Some("rust"), None, Some("5"))
            .resolve()
            .unwrap();
        assert_eq!(spec, FilterSpec::ByQuantity(5));
    }

    #[test]
    fn match_beats_tag() {
        let (_, spec) = params(Some("en"), Some("linux"), Some("RUST"), None)
            .resolve()
            .unwrap();
        assert_eq!(spec, FilterSpec::ByMatch("linux".into()));
    }

    #[test]
    fn tag_alone_resolves_to_by_tag() {
        let (_, spec) = params(Some("en"), None, Some("RUST"), None)
            .resolve()
            .unwrap();
        assert_eq!(spec, FilterSpec::ByTag("RUST".into()));
    }

    #[test]
    fn no_filters_resolve_to_plain() {
        let (_, spec) = params(Some("en"), None, None, None).resolve().unwrap();
        assert_eq!(spec, FilterSpec::Plain);
    }

    #[test]
    fn zero_and_negative_quantities_are_rejected() {
        assert_eq!(
            params(Some("en"), None, None, Some("0"))
                .resolve()
                .unwrap_err(),
            ApiError::BadRequest
        );
        assert_eq!(
            params(Some("en"), None, None, Some("-3"))
                .resolve()
                .unwrap_err(),
            ApiError::BadRequest
        );
    }

    #[test]
    fn non_numeric_quantity_is_rejected() {
        assert_eq!(
            params(Some("en"), None, None, Some("many"))
                .resolve()
                .unwrap_err(),
            ApiError::BadRequest
        );
    }
}
