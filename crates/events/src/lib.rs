//! Domain events and the append-only log aggregates record them into.

pub mod event;
pub mod log;

pub use event::Event;
pub use log::EventLog;
