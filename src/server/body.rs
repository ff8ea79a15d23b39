use serde::de::DeserializeOwned;

use crate::item::ItemError;

/// Parse a raw request body as JSON.
///
/// Bodies are taken as bytes rather than through the `Json` extractor so that
/// a missing content type or broken JSON maps to the same 400 as any other
/// malformed body.
pub fn parse_json_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ItemError> {
    serde_json::from_slice(bytes).map_err(ItemError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{CreateItemRequest, UpdateItemRequest};

    #[test]
    fn test_parse_valid_body() {
        let req: CreateItemRequest =
            parse_json_body(br#"{"name":"Mouse","description":"Wireless"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("Mouse"));
    }

    #[test]
    fn test_parse_empty_body_is_malformed() {
        let err = parse_json_body::<UpdateItemRequest>(b"").unwrap_err();
        assert!(matches!(err, ItemError::MalformedBody(_)));
    }

    #[test]
    fn test_parse_broken_json_is_malformed() {
        let err = parse_json_body::<CreateItemRequest>(b"{\"name\":").unwrap_err();
        assert!(matches!(err, ItemError::MalformedBody(_)));
    }

    #[test]
    fn test_parse_wrong_field_type_is_malformed() {
        let err = parse_json_body::<CreateItemRequest>(br#"{"name":42}"#).unwrap_err();
        assert!(matches!(err, ItemError::MalformedBody(_)));
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let req: UpdateItemRequest =
            parse_json_body(br#"{"description":"d","color":"red"}"#).unwrap();
        assert_eq!(req.description.as_deref(), Some("d"));
    }
}
