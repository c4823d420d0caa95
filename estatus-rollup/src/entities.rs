//! Entity discovery and single-entity rollups.

use std::collections::BTreeSet;

use estatus_core::models::{EntityStatus, Event};

/// Distinct entity names present in `events`.
pub fn entities_from_events(events: &[Event]) -> BTreeSet<String> {
    events
        .iter()
        .map(|event| event.entity_name().to_string())
        .collect()
}

/// Status of one entity, ignoring every other entity's events.
/// Zeroed if the entity has no events.
pub fn entity_status(entity: &str, events: &[Event]) -> EntityStatus {
    let mut status = EntityStatus::default();
    for event in events.iter().filter(|e| e.entity_name() == entity) {
        status.record_event(event);
    }
    tracing::debug!(entity, status = status.status.code(), total = status.total, "entity status");
    status
}
