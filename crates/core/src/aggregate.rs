//! Aggregate root trait for entities that record domain events.

use crate::entity::Entity;

/// An entity that records a domain event for every observable state change.
///
/// The recorded events are owned by the aggregate. Readers get a snapshot
/// (`get_events`), never a live view, so nothing outside the aggregate can
/// rewrite its history. Draining the log is explicit (`clear_events`), typically
/// after the caller has handed the events off for processing.
pub trait AggregateRoot: Entity {
    type Event: Clone + core::fmt::Debug;

    /// Returns an independent copy of the recorded events, oldest first.
    fn get_events(&self) -> Vec<Self::Event>;

    /// Discards every recorded event. Irreversible.
    fn clear_events(&mut self);

    /// Number of events currently recorded.
    fn pending_event_count(&self) -> usize {
        self.get_events().len()
    }
}
