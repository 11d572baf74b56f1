use chrono::Utc;

use catalog_core::{AggregateRoot, DomainError, DomainResult, Entity, EntityId};
use catalog_events::EventLog;

use crate::event::{
    CategoryActivated, CategoryCreated, CategoryDeactivated, CategoryEvent, CategoryUpdated,
    UpdatedFields,
};

/// Maximum name length, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// Maximum description length, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 1024;

/// Check a name/description pair against the category field rules.
///
/// Rules are checked in a fixed order: name length, description length, then
/// blank name. The length check uses the name as given; the blank check uses it
/// trimmed.
pub fn validate_fields(name: &str, description: &str) -> DomainResult<()> {
    let name_len = name.chars().count();
    if name_len > MAX_NAME_LEN {
        return Err(DomainError::NameTooLong {
            max: MAX_NAME_LEN,
            actual: name_len,
        });
    }

    let description_len = description.chars().count();
    if description_len > MAX_DESCRIPTION_LEN {
        return Err(DomainError::DescriptionTooLong {
            max: MAX_DESCRIPTION_LEN,
            actual: description_len,
        });
    }

    if name.trim().is_empty() {
        return Err(DomainError::EmptyName);
    }

    Ok(())
}

/// Entity: Category.
///
/// Names are stored exactly as given (untrimmed). Every mutation that changes
/// observable state appends one event to the entity's own log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: EntityId,
    name: String,
    description: String,
    is_active: bool,
    events: EventLog<CategoryEvent>,
}

impl Category {
    /// Create an active category.
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::with_status(id, name, description, true)
    }

    /// Create a category with an explicit active flag.
    ///
    /// Fails without constructing anything if the fields are invalid. On
    /// success the log holds exactly one `CategoryCreated` event.
    pub fn with_status(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> DomainResult<Self> {
        let id = id.into();
        let name = name.into();
        let description = description.into();

        validate_fields(&name, &description)?;

        let mut category = Self {
            id,
            name,
            description,
            is_active,
            events: EventLog::new(),
        };

        let created = CategoryEvent::CategoryCreated(CategoryCreated {
            category_id: category.id.clone(),
            timestamp: Utc::now(),
            name: category.name.clone(),
            description: category.description.clone(),
            is_active: category.is_active,
        });
        category.events.record(created);

        Ok(category)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Read-only view of the recorded events.
    pub fn events(&self) -> &EventLog<CategoryEvent> {
        &self.events
    }

    /// Hand every recorded event to the caller and empty the log.
    pub fn take_events(&mut self) -> Vec<CategoryEvent> {
        self.events.drain()
    }

    /// Overwrite the given fields; `None` leaves a field unchanged.
    ///
    /// The resulting state is validated before anything is written: on error
    /// the category is untouched and no event is recorded. On success one
    /// `CategoryUpdated` event records the values passed in, whether or not
    /// they differ from the previous ones.
    pub fn update(&mut self, name: Option<&str>, description: Option<&str>) -> DomainResult<()> {
        let next_name = name.unwrap_or(self.name.as_str());
        let next_description = description.unwrap_or(self.description.as_str());
        validate_fields(next_name, next_description)?;

        if let Some(name) = name {
            self.name = name.to_string();
        }
        if let Some(description) = description {
            self.description = description.to_string();
        }

        self.events
            .record(CategoryEvent::CategoryUpdated(CategoryUpdated {
                category_id: self.id.clone(),
                timestamp: Utc::now(),
                updated_fields: UpdatedFields {
                    name: name.map(str::to_string),
                    description: description.map(str::to_string),
                },
            }));

        Ok(())
    }

    /// Mark the category active. Returns `false` (and records nothing) if it
    /// already was.
    pub fn activate(&mut self) -> bool {
        if self.is_active {
            tracing::debug!(category_id = %self.id, "activate ignored: already active");
            return false;
        }

        self.is_active = true;
        self.events
            .record(CategoryEvent::CategoryActivated(CategoryActivated {
                category_id: self.id.clone(),
                timestamp: Utc::now(),
            }));
        true
    }

    /// Mark the category inactive. Returns `false` (and records nothing) if it
    /// already was.
    pub fn deactivate(&mut self) -> bool {
        if !self.is_active {
            tracing::debug!(category_id = %self.id, "deactivate ignored: already inactive");
            return false;
        }

        self.is_active = false;
        self.events
            .record(CategoryEvent::CategoryDeactivated(CategoryDeactivated {
                category_id: self.id.clone(),
                timestamp: Utc::now(),
            }));
        true
    }
}

impl Entity for Category {
    type Id = EntityId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Category {
    type Event = CategoryEvent;

    fn get_events(&self) -> Vec<Self::Event> {
        self.events.snapshot()
    }

    fn clear_events(&mut self) {
        self.events.clear();
    }

    fn pending_event_count(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::CategoryEventType;

    fn books() -> Category {
        Category::new("cat-002", "Books", "All kinds of books").unwrap()
    }

    fn kinds(category: &Category) -> Vec<CategoryEventType> {
        category.get_events().iter().map(|e| e.kind()).collect()
    }

    #[test]
    fn new_category_records_created_event_with_snapshot() {
        let category = books();

        assert_eq!(category.id().as_str(), "cat-002");
        assert!(category.is_active());

        let events = category.get_events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            CategoryEvent::CategoryCreated(e) => {
                assert_eq!(e.category_id.as_str(), "cat-002");
                assert_eq!(e.name, "Books");
                assert_eq!(e.description, "All kinds of books");
                assert!(e.is_active);
            }
            _ => panic!("Expected CategoryCreated event"),
        }
    }

    #[test]
    fn with_status_captures_inactive_flag() {
        let category = Category::with_status("cat-9", "Toys", "", false).unwrap();
        assert!(!category.is_active());
        match &category.get_events()[0] {
            CategoryEvent::CategoryCreated(e) => assert!(!e.is_active),
            _ => panic!("Expected CategoryCreated event"),
        }
    }

    #[test]
    fn new_rejects_empty_and_whitespace_names() {
        assert_eq!(
            Category::new("cat-003", "", "Test").unwrap_err(),
            DomainError::EmptyName
        );
        assert_eq!(
            Category::new("cat-003", " \t\n ", "Test").unwrap_err(),
            DomainError::EmptyName
        );
    }

    #[test]
    fn new_rejects_long_name() {
        let err = Category::new("x", "A".repeat(256), "d").unwrap_err();
        assert_eq!(err, DomainError::NameTooLong { max: 255, actual: 256 });
    }

    #[test]
    fn new_rejects_long_description() {
        let err = Category::new("x", "Name", "d".repeat(1025)).unwrap_err();
        assert_eq!(
            err,
            DomainError::DescriptionTooLong {
                max: 1024,
                actual: 1025
            }
        );
    }

    #[test]
    fn boundary_lengths_are_accepted() {
        let category = Category::new("x", "A".repeat(255), "d".repeat(1024)).unwrap();
        assert_eq!(category.name().len(), 255);
        assert_eq!(category.description().len(), 1024);
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let name = "é".repeat(255);
        assert!(name.len() > 255);
        assert!(Category::new("x", name, "").is_ok());
    }

    #[test]
    fn name_is_stored_untrimmed() {
        let category = Category::new("x", "  Padded  ", "").unwrap();
        assert_eq!(category.name(), "  Padded  ");
    }

    #[test]
    fn whitespace_only_name_over_limit_reports_length_first() {
        let err = Category::new("x", " ".repeat(300), "").unwrap_err();
        assert!(matches!(err, DomainError::NameTooLong { actual: 300, .. }));
    }

    #[test]
    fn update_overwrites_fields_and_records_passed_values() {
        let mut category = books();
        category
            .update(Some("Books & Literature"), Some("Books and literary works"))
            .unwrap();

        assert_eq!(category.name(), "Books & Literature");
        assert_eq!(category.description(), "Books and literary works");

        let events = category.get_events();
        assert_eq!(events.len(), 2);
        let fields = events[1].updated_fields().unwrap();
        assert_eq!(fields.name.as_deref(), Some("Books & Literature"));
        assert_eq!(fields.description.as_deref(), Some("Books and literary works"));
    }

    #[test]
    fn update_leaves_omitted_fields_and_records_them_as_none() {
        let mut category = books();
        category.update(None, Some("Printed and digital")).unwrap();

        assert_eq!(category.name(), "Books");
        assert_eq!(category.description(), "Printed and digital");
        let fields = category.get_events()[1].updated_fields().cloned().unwrap();
        assert_eq!(
            fields,
            UpdatedFields {
                name: None,
                description: Some("Printed and digital".to_string()),
            }
        );
    }

    #[test]
    fn update_records_unchanged_values_too() {
        let mut category = books();
        category.update(Some("Books"), None).unwrap();
        assert_eq!(kinds(&category).last(), Some(&CategoryEventType::CategoryUpdated));
        assert_eq!(
            category.get_events()[1].updated_fields().unwrap().name.as_deref(),
            Some("Books")
        );
    }

    #[test]
    fn update_with_nothing_still_records_an_event() {
        let mut category = books();
        category.update(None, None).unwrap();
        assert_eq!(category.pending_event_count(), 2);
        assert!(category.get_events()[1].updated_fields().unwrap().is_empty());
    }

    #[test]
    fn failed_update_leaves_category_untouched() {
        let mut category = books();
        let before = category.clone();

        let err = category
            .update(Some("Valid new name"), Some("d".repeat(1025).as_str()))
            .unwrap_err();
        assert!(matches!(err, DomainError::DescriptionTooLong { .. }));
        assert_eq!(category, before);

        let err = category.update(Some("   "), None).unwrap_err();
        assert_eq!(err, DomainError::EmptyName);
        assert_eq!(category, before);
        assert_eq!(category.pending_event_count(), 1);
    }

    #[test]
    fn deactivate_then_activate_records_both_events() {
        let mut category = books();

        assert!(category.deactivate());
        assert!(!category.is_active());
        assert!(category.activate());
        assert!(category.is_active());

        assert_eq!(
            kinds(&category),
            vec![
                CategoryEventType::CategoryCreated,
                CategoryEventType::CategoryDeactivated,
                CategoryEventType::CategoryActivated,
            ]
        );
    }

    #[test]
    fn activate_and_deactivate_are_idempotent() {
        let mut category = books();
        assert!(!category.activate());
        assert!(!category.activate());
        assert_eq!(category.pending_event_count(), 1);

        assert!(category.deactivate());
        assert!(!category.deactivate());
        assert!(!category.is_active());
        assert_eq!(category.pending_event_count(), 2);
    }

    #[test]
    fn events_share_the_category_id_and_are_time_ordered() {
        let mut category = books();
        category.update(Some("Novels"), None).unwrap();
        category.deactivate();
        category.activate();

        let events = category.get_events();
        assert!(events.iter().all(|e| e.category_id().as_str() == "cat-002"));
        assert!(events.windows(2).all(|w| w[0].timestamp() <= w[1].timestamp()));
    }

    #[test]
    fn get_events_returns_independent_copy() {
        let mut category = books();
        let mut copy = category.get_events();
        copy.clear();
        assert_eq!(category.pending_event_count(), 1);

        category.deactivate();
        assert_eq!(copy.len(), 0);
        assert_eq!(category.get_events().len(), 2);
    }

    #[test]
    fn clear_events_empties_the_log() {
        let mut category = books();
        category.deactivate();
        category.clear_events();
        assert!(category.get_events().is_empty());

        category.activate();
        assert_eq!(kinds(&category), vec![CategoryEventType::CategoryActivated]);
    }

    #[test]
    fn take_events_drains_in_order() {
        let mut category = books();
        category.deactivate();

        let taken = category.take_events();
        assert_eq!(taken.len(), 2);
        assert_eq!(taken[0].kind(), CategoryEventType::CategoryCreated);
        assert!(category.events().is_empty());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: valid fields always construct, with exactly one CategoryCreated event.
            #[test]
            fn valid_fields_construct_with_one_event(
                id in "[a-z0-9-]{0,16}",
                name in "[A-Za-z][A-Za-z0-9 ]{0,254}",
                description in "[A-Za-z0-9 ]{0,1024}"
            ) {
                let category = Category::new(id.as_str(), name.as_str(), description.as_str()).unwrap();
                let events = category.get_events();
                prop_assert_eq!(events.len(), 1);
                prop_assert_eq!(events[0].kind(), CategoryEventType::CategoryCreated);
                prop_assert_eq!(category.id().as_str(), id.as_str());
                prop_assert_eq!(category.name(), name.as_str());
                prop_assert_eq!(category.description(), description.as_str());
                prop_assert!(category.is_active());
            }

            /// Property: blank names are always rejected as EmptyName.
            #[test]
            fn blank_names_are_rejected(name in "[ \t\n\r]{0,40}", description in "[a-z ]{0,64}") {
                let err = Category::new("x", name, description).unwrap_err();
                prop_assert_eq!(err, DomainError::EmptyName);
            }

            /// Property: names over the limit are always rejected as NameTooLong.
            #[test]
            fn long_names_are_rejected(name in "[A-Za-z]{256,320}") {
                let err = Category::new("x", name, "d").unwrap_err();
                let is_name_too_long = matches!(err, DomainError::NameTooLong { .. });
                prop_assert!(is_name_too_long);
            }

            /// Property: descriptions over the limit are always rejected as DescriptionTooLong.
            #[test]
            fn long_descriptions_are_rejected(description in "[a-z ]{1025,1100}") {
                let err = Category::new("x", "Name", description).unwrap_err();
                let is_description_too_long = matches!(err, DomainError::DescriptionTooLong { .. });
                prop_assert!(is_description_too_long);
            }

            /// Property: repeated activate/deactivate calls only record real transitions.
            #[test]
            fn toggles_record_only_transitions(ops in proptest::collection::vec(any::<bool>(), 0..32)) {
                let mut category = Category::new("x", "Name", "").unwrap();
                let mut expected_events = 1;
                let mut active = true;

                for activate in ops {
                    let changed = if activate { category.activate() } else { category.deactivate() };
                    prop_assert_eq!(changed, active != activate);
                    if changed {
                        expected_events += 1;
                    }
                    active = activate;
                    prop_assert_eq!(category.is_active(), active);
                }

                prop_assert_eq!(category.pending_event_count(), expected_events);
            }
        }
    }
}
