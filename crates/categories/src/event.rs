use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::{EntityId, ValueObject};
use catalog_events::Event;

/// Closed set of category event tags. The tag string is the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryEventType {
    CategoryCreated,
    CategoryUpdated,
    CategoryActivated,
    CategoryDeactivated,
}

impl CategoryEventType {
    pub const fn as_str(self) -> &'static str {
        match self {
            CategoryEventType::CategoryCreated => "CategoryCreated",
            CategoryEventType::CategoryUpdated => "CategoryUpdated",
            CategoryEventType::CategoryActivated => "CategoryActivated",
            CategoryEventType::CategoryDeactivated => "CategoryDeactivated",
        }
    }
}

impl core::fmt::Display for CategoryEventType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field values passed into a single `Category::update` call.
///
/// `None` means the caller left that field alone. Both keys are always present
/// when serialized (`null` for omitted fields).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedFields {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdatedFields {
    /// `(field name, value)` pairs in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> {
        [
            ("name", self.name.as_deref()),
            ("description", self.description.as_deref()),
        ]
        .into_iter()
    }

    /// True when the call changed neither field.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// Event: CategoryCreated. Snapshot of the entity at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCreated {
    pub category_id: EntityId,
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

/// Event: CategoryUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryUpdated {
    pub category_id: EntityId,
    pub timestamp: DateTime<Utc>,
    pub updated_fields: UpdatedFields,
}

/// Event: CategoryActivated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryActivated {
    pub category_id: EntityId,
    pub timestamp: DateTime<Utc>,
}

/// Event: CategoryDeactivated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDeactivated {
    pub category_id: EntityId,
    pub timestamp: DateTime<Utc>,
}

/// Serialized with the variant name under `event_type`, next to the payload fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type")]
pub enum CategoryEvent {
    CategoryCreated(CategoryCreated),
    CategoryUpdated(CategoryUpdated),
    CategoryActivated(CategoryActivated),
    CategoryDeactivated(CategoryDeactivated),
}

impl CategoryEvent {
    pub fn kind(&self) -> CategoryEventType {
        match self {
            CategoryEvent::CategoryCreated(_) => CategoryEventType::CategoryCreated,
            CategoryEvent::CategoryUpdated(_) => CategoryEventType::CategoryUpdated,
            CategoryEvent::CategoryActivated(_) => CategoryEventType::CategoryActivated,
            CategoryEvent::CategoryDeactivated(_) => CategoryEventType::CategoryDeactivated,
        }
    }

    pub fn category_id(&self) -> &EntityId {
        match self {
            CategoryEvent::CategoryCreated(e) => &e.category_id,
            CategoryEvent::CategoryUpdated(e) => &e.category_id,
            CategoryEvent::CategoryActivated(e) => &e.category_id,
            CategoryEvent::CategoryDeactivated(e) => &e.category_id,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            CategoryEvent::CategoryCreated(e) => e.timestamp,
            CategoryEvent::CategoryUpdated(e) => e.timestamp,
            CategoryEvent::CategoryActivated(e) => e.timestamp,
            CategoryEvent::CategoryDeactivated(e) => e.timestamp,
        }
    }

    pub fn updated_fields(&self) -> Option<&UpdatedFields> {
        match self {
            CategoryEvent::CategoryUpdated(e) => Some(&e.updated_fields),
            _ => None,
        }
    }
}

impl Event for CategoryEvent {
    fn event_type(&self) -> &'static str {
        self.kind().as_str()
    }

    fn aggregate_id(&self) -> &EntityId {
        self.category_id()
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.timestamp()
    }
}

impl ValueObject for UpdatedFields {}
impl ValueObject for CategoryEvent {}
