use sea_orm::{entity::prelude::*, sea_query::StringLen};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    #[sea_orm(string_value = "EN")]
    En,
    #[sea_orm(string_value = "ES")]
    Es,
}

impl Language {
    /// Accepts any casing and surrounding whitespace ("en", " Es ").
    pub fn parse(raw: &str) -> Option<Language> {
        match raw.trim().to_uppercase().as_str() {
            "EN" => Some(Language::En),
            "ES" => Some(Language::Es),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_languages_case_insensitively() {
        assert_eq!(Language::parse("EN"), Some(Language::En));
        assert_eq!(Language::parse("en"), Some(Language::En));
        assert_eq!(Language::parse(" es "), Some(Language::Es));
    }

    #[test]
    fn rejects_unknown_languages() {
        assert_eq!(Language::parse("xx"), None);
        assert_eq!(Language::parse(""), None);
        assert_eq!(Language::parse("ENG"), None);
    }
}
