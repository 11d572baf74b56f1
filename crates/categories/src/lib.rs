//! Categories domain module.
//!
//! The `Category` entity validates its own fields, records a domain event for
//! every observable state change, and converts to/from a flat map snapshot.
//! Pure domain logic: no IO, no storage, no event dispatch.

pub mod category;
pub mod event;
pub mod snapshot;

pub use category::{Category, MAX_DESCRIPTION_LEN, MAX_NAME_LEN, validate_fields};
pub use event::{
    CategoryActivated, CategoryCreated, CategoryDeactivated, CategoryEvent, CategoryEventType,
    CategoryUpdated, UpdatedFields,
};
pub use snapshot::{CATEGORY_TAG, CLASS_NAME_KEY, REQUIRED_FIELDS};
