//! # estatus-rollup
//!
//! Folds an unordered event set into one [`EntityStatus`] per entity.
//!
//! The fold is order-independent and partial rollups merge with the same
//! lattice rule, so chunked or concurrent folding gives identical results.

pub mod engine;
pub mod entities;

use estatus_core::models::{EntityStatusMap, Event};

pub use engine::RollupEngine;
pub use entities::{entities_from_events, entity_status};
pub use estatus_core::models::EntityStatus;

/// Roll every event up into its entity's status.
pub fn rollup(events: &[Event]) -> EntityStatusMap {
    let span = estatus_core::rollup_span!(events.len());
    let _entered = span.enter();

    let mut engine = RollupEngine::new();
    engine.fold_all(events);
    engine.finish()
}

/// Fold `chunk_size`-sized slices independently, then merge the partials.
/// Yields the same map as [`rollup`].
pub fn rollup_chunked(events: &[Event], chunk_size: usize) -> EntityStatusMap {
    let span = estatus_core::rollup_span!(events.len());
    let _entered = span.enter();

    events
        .chunks(chunk_size.max(1))
        .map(|chunk| {
            let mut partial = RollupEngine::new();
            partial.fold_all(chunk);
            partial
        })
        .fold(RollupEngine::new(), |mut acc, partial| {
            acc.merge(partial);
            acc
        })
        .finish()
}
