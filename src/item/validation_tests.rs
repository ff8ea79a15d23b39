use super::*;

fn create(name: Option<&str>, description: Option<&str>) -> CreateItemRequest {
    CreateItemRequest {
        name: name.map(str::to_string),
        description: description.map(str::to_string),
    }
}

fn update(name: Option<&str>, description: Option<&str>) -> UpdateItemRequest {
    UpdateItemRequest {
        name: name.map(str::to_string),
        description: description.map(str::to_string),
    }
}

#[test]
fn test_create_accepts_both_fields() {
    let opts = validate_create(create(Some("Mouse"), Some("Wireless"))).unwrap();
    assert_eq!(opts.name, "Mouse");
    assert_eq!(opts.description, "Wireless");
}

#[test]
fn test_create_rejects_missing_name() {
    let err = validate_create(create(None, Some("Wireless"))).unwrap_err();
    assert_eq!(err, ItemError::validation(CREATE_REQUIRED_MESSAGE));
}

#[test]
fn test_create_rejects_missing_description() {
    assert!(validate_create(create(Some("Mouse"), None)).is_err());
}

#[test]
fn test_create_rejects_empty_strings() {
    assert!(validate_create(create(Some(""), Some("Wireless"))).is_err());
    assert!(validate_create(create(Some("Mouse"), Some(""))).is_err());
}

#[test]
fn test_update_requires_a_field() {
    let err = validate_update(update(None, None)).unwrap_err();
    assert_eq!(err.to_string(), UPDATE_REQUIRED_MESSAGE);
}

#[test]
fn test_update_allows_partial() {
    let opts = validate_update(update(None, Some("Only description"))).unwrap();
    assert!(opts.name.is_none());
    assert_eq!(opts.description.as_deref(), Some("Only description"));
}

#[test]
fn test_update_rejects_empty_value() {
    let err = validate_update(update(Some(""), Some("fine"))).unwrap_err();
    assert_eq!(err.to_string(), UPDATE_EMPTY_MESSAGE);
}
