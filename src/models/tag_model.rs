use serde::Serialize;

use crate::entities::tag;
use crate::utils::string_manipulation::capitalize_first_letter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagResponse {
    pub id: i64,
    pub name: String,
}

impl From<tag::Model> for TagResponse {
    // Display casing is applied here so every read path agrees,
    // whatever casing the row was stored with.
    fn from(model: tag::Model) -> Self {
        TagResponse {
            id: model.id,
            name: capitalize_first_letter(&model.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_stored_name_on_conversion() {
        let model = tag::Model {
            id: 7,
            name: "POSTGRESQL".to_string(),
        };
        let response = TagResponse::from(model);
        assert_eq!(response.id, 7);
        assert_eq!(response.name, "Postgresql");
    }
}
