//! Walk-through of the category entity: snapshot round-trip, event recording,
//! and the failure cases. Output goes through `tracing` (see `LOG_FORMAT`).

use anyhow::{Context, Result};
use serde_json::json;

use catalog_categories::Category;
use catalog_core::{AggregateRoot, DomainError, Entity};
use catalog_events::Event;

fn main() -> Result<()> {
    catalog_observability::init();

    serialization()?;
    domain_events()?;
    error_scenarios();

    tracing::info!("demo finished");
    Ok(())
}

fn serialization() -> Result<()> {
    let original = Category::new("cat-001", "Electronics", "Electronic devices and accessories")
        .context("creating cat-001")?;
    tracing::info!(
        id = %original.id(),
        name = original.name(),
        is_active = original.is_active(),
        "original category"
    );

    let dict = original.to_dict();
    tracing::info!(snapshot = %serde_json::Value::Object(dict.clone()), "exported snapshot");

    let rebuilt = Category::from_dict(&dict).context("rebuilding cat-001")?;
    tracing::info!(
        same_id = rebuilt.id() == original.id(),
        same_name = rebuilt.name() == original.name(),
        same_description = rebuilt.description() == original.description(),
        same_active = rebuilt.is_active() == original.is_active(),
        "round-trip check"
    );
    Ok(())
}

fn domain_events() -> Result<()> {
    let mut category =
        Category::new("cat-002", "Books", "All kinds of books").context("creating cat-002")?;
    log_last(&category, "after creation");

    category
        .update(Some("Books & Literature"), Some("Books and literary works"))
        .context("updating cat-002")?;
    log_last(&category, "after update");

    category.deactivate();
    log_last(&category, "after deactivation");

    category.activate();
    log_last(&category, "after activation");

    let events = category.get_events();
    tracing::info!(total = events.len(), "processing recorded events");
    for (i, event) in events.iter().enumerate() {
        let payload = serde_json::to_value(event).context("encoding event")?;
        tracing::info!(
            position = i + 1,
            event_type = event.event_type(),
            category_id = %event.aggregate_id(),
            payload = %payload,
            "event"
        );
    }

    category.clear_events();
    tracing::info!(remaining = category.pending_event_count(), "events cleared");
    Ok(())
}

fn log_last(category: &Category, stage: &str) {
    if let Some(event) = category.events().last() {
        tracing::info!(
            stage,
            count = category.pending_event_count(),
            event_type = event.event_type(),
            occurred_at = %event.occurred_at(),
            "latest event"
        );
    }
}

fn error_scenarios() {
    let attempts: Vec<(&str, Result<Category, DomainError>)> = vec![
        (
            "mismatched class_name",
            Category::from_value(&json!({
                "class_name": "InvalidClass",
                "id": "test",
                "name": "Test",
                "description": "Test",
                "is_active": true
            })),
        ),
        (
            "missing fields",
            Category::from_value(&json!({
                "class_name": "Category",
                "id": "test",
                "name": "Test"
            })),
        ),
        ("empty name", Category::new("cat-003", "", "Test")),
        ("long name", Category::new("cat-004", "A".repeat(256), "Test")),
    ];

    for (scenario, outcome) in attempts {
        match outcome {
            Ok(category) => tracing::warn!(scenario, id = %category.id(), "unexpectedly accepted"),
            Err(err) => tracing::info!(scenario, error = %err, "rejected as expected"),
        }
    }
}
