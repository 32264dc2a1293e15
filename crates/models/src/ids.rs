use mongodb::bson::oid::ObjectId;

use crate::errors::ModelError;

/// Parse a 24-char hex path segment into an `ObjectId`.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, ModelError> {
    ObjectId::parse_str(raw.trim()).map_err(|_| ModelError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hex_and_rejects_garbage() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
        assert!(matches!(parse_object_id("not-an-id"), Err(ModelError::InvalidId(_))));
        assert!(matches!(parse_object_id(""), Err(ModelError::InvalidId(_))));
    }
}
