use chrono::{DateTime, Utc};

use catalog_core::EntityId;

/// A domain-agnostic event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **tagged** with a stable, closed set of type names
/// - designed to be **append-only**
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "CategoryCreated").
    fn event_type(&self) -> &'static str;

    /// Identifier of the entity the event belongs to.
    fn aggregate_id(&self) -> &EntityId;

    /// When the event occurred.
    fn occurred_at(&self) -> DateTime<Utc>;
}
