//! Accumulator for the per-entity fold.

use estatus_core::models::{EntityStatus, EntityStatusMap, Event};
use tracing::{debug, trace};

/// Owns the entity map while events are folded in.
#[derive(Debug, Clone, Default)]
pub struct RollupEngine {
    statuses: EntityStatusMap,
    events_folded: usize,
}

impl RollupEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert the event's entity and fold the event into it.
    pub fn fold_event(&mut self, event: &Event) {
        let status = self
            .statuses
            .entry(event.entity_name().to_string())
            .or_default();
        status.record_event(event);
        self.events_folded += 1;
        trace!(
            entity = event.entity_name(),
            check = event.check_name().unwrap_or_default(),
            status = status.status.code(),
            "rollup: event folded"
        );
    }

    pub fn fold_all<'a, I>(&mut self, events: I)
    where
        I: IntoIterator<Item = &'a Event>,
    {
        for event in events {
            self.fold_event(event);
        }
    }

    /// Merge another partial rollup into this one.
    pub fn merge(&mut self, other: RollupEngine) {
        for (entity, partial) in other.statuses {
            self.statuses
                .entry(entity)
                .and_modify(|status| status.merge(&partial))
                .or_insert(partial);
        }
        self.events_folded += other.events_folded;
    }

    pub fn get(&self, entity: &str) -> Option<&EntityStatus> {
        self.statuses.get(entity)
    }

    pub fn entity_count(&self) -> usize {
        self.statuses.len()
    }

    pub fn events_folded(&self) -> usize {
        self.events_folded
    }

    /// Hand the finished map off.
    pub fn finish(self) -> EntityStatusMap {
        debug!(
            entities = self.statuses.len(),
            events = self.events_folded,
            "rollup complete"
        );
        self.statuses
    }
}
