use crate::event::Event;

/// Append-only, in-memory event log owned by a single aggregate.
///
/// Events keep insertion order. The only ways to shrink the log are `clear`
/// (everything) and `drain` (everything, handed to the caller).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLog<E> {
    events: Vec<E>,
}

impl<E> Default for EventLog<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<E: Event> EventLog<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event at the end of the log.
    pub fn record(&mut self, event: E) {
        tracing::debug!(
            event_type = event.event_type(),
            aggregate_id = %event.aggregate_id(),
            position = self.events.len(),
            "domain event recorded"
        );
        self.events.push(event);
    }

    /// Independent copy of the log; mutating it does not touch the log.
    pub fn snapshot(&self) -> Vec<E> {
        self.events.clone()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Take every event out of the log, leaving it empty.
    pub fn drain(&mut self) -> Vec<E> {
        core::mem::take(&mut self.events)
    }

    pub fn last(&self) -> Option<&E> {
        self.events.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
