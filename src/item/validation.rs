//! Presence checks for create and update bodies.

use super::error::ItemError;
use super::types::{CreateItemOptions, CreateItemRequest, UpdateItemOptions, UpdateItemRequest};

pub const CREATE_REQUIRED_MESSAGE: &str = "Name and description are required";
pub const UPDATE_REQUIRED_MESSAGE: &str = "Name or description must be provided for update";
pub const UPDATE_EMPTY_MESSAGE: &str = "Name and description cannot be empty";

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Both fields must be present and non-empty.
pub fn validate_create(req: CreateItemRequest) -> Result<CreateItemOptions, ItemError> {
    match (non_empty(req.name), non_empty(req.description)) {
        (Some(name), Some(description)) => Ok(CreateItemOptions { name, description }),
        _ => Err(ItemError::validation(CREATE_REQUIRED_MESSAGE)),
    }
}

/// At least one field must be present; any present field must be non-empty.
pub fn validate_update(req: UpdateItemRequest) -> Result<UpdateItemOptions, ItemError> {
    let options = UpdateItemOptions {
        name: req.name,
        description: req.description,
    };
    if options.is_empty() {
        return Err(ItemError::validation(UPDATE_REQUIRED_MESSAGE));
    }
    let has_empty_field = [&options.name, &options.description]
        .into_iter()
        .flatten()
        .any(String::is_empty);
    if has_empty_field {
        return Err(ItemError::validation(UPDATE_EMPTY_MESSAGE));
    }
    Ok(options)
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod validation_tests;
