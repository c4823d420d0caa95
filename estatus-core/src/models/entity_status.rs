//! Per-entity rollup record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::event::Event;
use super::severity::Severity;

/// Rollup output keyed by entity name. Ordered so renderers are stable.
pub type EntityStatusMap = BTreeMap<String, EntityStatus>;

/// Rolled-up state of one entity plus per-severity tallies.
///
/// `status` is the lattice merge of every non-silenced event folded in.
/// Silenced events still land in their severity bucket and in `silenced`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityStatus {
    pub status: Severity,
    pub silenced: u64,
    pub critical: u64,
    pub warning: u64,
    pub unknown: u64,
    pub ok: u64,
    pub total: u64,
}

impl EntityStatus {
    /// Fold one check result into the tallies.
    pub fn record(&mut self, check_status: i64, silenced: bool) {
        if silenced {
            self.silenced += 1;
        }

        let severity = Severity::bucket(check_status);
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::Warning => self.warning += 1,
            Severity::Unknown => self.unknown += 1,
            Severity::Ok => self.ok += 1,
        }
        self.total += 1;

        if !silenced {
            self.status = self.status.merge(severity);
        }
    }

    /// Fold one event. The caller is responsible for matching the entity.
    pub fn record_event(&mut self, event: &Event) {
        self.record(event.check_status(), event.is_silenced());
    }

    /// Combine with a partial rollup of the same entity.
    pub fn merge(&mut self, other: &EntityStatus) {
        self.status = self.status.merge(other.status);
        self.silenced += other.silenced;
        self.critical += other.critical;
        self.warning += other.warning;
        self.unknown += other.unknown;
        self.ok += other.ok;
        self.total += other.total;
    }

    /// `total` equals the sum of the four severity buckets.
    pub fn is_consistent(&self) -> bool {
        self.total == self.ok + self.warning + self.critical + self.unknown
            && self.silenced <= self.total
    }
}
