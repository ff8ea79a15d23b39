use serde::{Deserialize, Serialize};

/// A single record in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl Item {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Validated input for creating an item. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateItemOptions {
    pub name: String,
    pub description: String,
}

/// Shallow-merge patch applied on update.
///
/// `None` keeps the current value of the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateItemOptions {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateItemOptions {
    /// Build the replacement record for `current`.
    #[must_use]
    pub fn apply_to(&self, current: &Item) -> Item {
        Item {
            id: current.id.clone(),
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| current.description.clone()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// Raw create body as sent by clients. Both fields may be missing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Raw update body as sent by clients. Both fields may be missing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpdateItemRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `{ "message": string }` body used for confirmations and errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_json_shape() {
        let item = Item::new("7", "Mouse", "Wireless");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "7", "name": "Mouse", "description": "Wireless"})
        );
    }

    #[test]
    fn test_apply_only_description() {
        let current = Item::new("1", "Laptop", "Old");
        let patch = UpdateItemOptions {
            name: None,
            description: Some("New".to_string()),
        };
        let updated = patch.apply_to(&current);
        assert_eq!(updated.id, "1");
        assert_eq!(updated.name, "Laptop");
        assert_eq!(updated.description, "New");
    }

    #[test]
    fn test_apply_empty_patch_is_identity() {
        let current = Item::new("1", "Laptop", "Old");
        let patch = UpdateItemOptions::default();
        assert!(patch.is_empty());
        assert_eq!(patch.apply_to(&current), current);
    }

    #[test]
    fn test_update_request_null_is_absent() {
        let req: UpdateItemRequest =
            serde_json::from_str(r#"{"name": null, "description": "x"}"#).unwrap();
        assert!(req.name.is_none());
        assert_eq!(req.description.as_deref(), Some("x"));
    }

    #[test]
    fn test_update_request_skips_absent_fields() {
        let req = UpdateItemRequest {
            name: Some("X".to_string()),
            description: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"name":"X"}"#);
    }
}
