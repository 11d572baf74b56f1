//! Flat map snapshot of a category (`to_dict` / `from_dict`).
//!
//! Shape:
//!
//! ```text
//! { "class_name": "Category", "id": <string>, "name": <string>,
//!   "description": <string>, "is_active": <bool> }
//! ```
//!
//! Events are not part of the snapshot. Reconstruction goes through the normal
//! constructor, so a rebuilt category starts a fresh log with one
//! `CategoryCreated` event.

use serde_json::{Map, Value};

use catalog_core::{DomainError, DomainResult, Entity};

use crate::category::Category;

/// Key holding the entity type discriminant.
pub const CLASS_NAME_KEY: &str = "class_name";

/// Discriminant value identifying a category snapshot.
pub const CATEGORY_TAG: &str = "Category";

/// Data keys every snapshot must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 4] = ["id", "name", "description", "is_active"];

impl Category {
    /// Structural snapshot of the current state. Does not include events.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(CLASS_NAME_KEY.to_string(), Value::from(CATEGORY_TAG));
        map.insert("id".to_string(), Value::from(self.id().as_str()));
        map.insert("name".to_string(), Value::from(self.name()));
        map.insert("description".to_string(), Value::from(self.description()));
        map.insert("is_active".to_string(), Value::from(self.is_active()));
        map
    }

    /// Rebuild a category from a snapshot produced by [`Category::to_dict`].
    ///
    /// Checks, in order: the discriminant (`Format`), presence of every
    /// required key (`MissingField`, first absent key wins), value kinds
    /// (`InvalidField`), then the usual field rules.
    pub fn from_dict(data: &Map<String, Value>) -> DomainResult<Self> {
        match data.get(CLASS_NAME_KEY) {
            Some(Value::String(tag)) if tag == CATEGORY_TAG => {}
            Some(other) => {
                return Err(DomainError::format(format!(
                    "{CLASS_NAME_KEY} must be '{CATEGORY_TAG}', got {other}"
                )));
            }
            None => {
                return Err(DomainError::format(format!(
                    "{CLASS_NAME_KEY} is missing (expected '{CATEGORY_TAG}')"
                )));
            }
        }

        if let Some(missing) = REQUIRED_FIELDS.iter().find(|key| !data.contains_key(**key)) {
            return Err(DomainError::missing_field(*missing));
        }

        let id = string_field(data, "id")?;
        let name = string_field(data, "name")?;
        let description = string_field(data, "description")?;
        let is_active = data
            .get("is_active")
            .and_then(Value::as_bool)
            .ok_or_else(|| DomainError::invalid_field("is_active", "a boolean"))?;

        Category::with_status(id, name, description, is_active)
    }

    /// Like [`Category::from_dict`], for an arbitrary JSON value.
    pub fn from_value(value: &Value) -> DomainResult<Self> {
        match value {
            Value::Object(map) => Self::from_dict(map),
            other => Err(DomainError::format(format!(
                "expected a map snapshot, got {}",
                kind_of(other)
            ))),
        }
    }

    /// Snapshot encoded as a JSON string.
    pub fn to_json(&self) -> String {
        Value::Object(self.to_dict()).to_string()
    }

    /// Rebuild a category from a JSON-encoded snapshot.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| DomainError::format(format!("malformed JSON: {e}")))?;
        Self::from_value(&value)
    }
}

fn string_field<'a>(data: &'a Map<String, Value>, key: &str) -> DomainResult<&'a str> {
    match data.get(key) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(DomainError::invalid_field(key, "a string")),
        None => Err(DomainError::missing_field(key)),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a map",
    }
}
