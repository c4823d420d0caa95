//! Backend event records.
//!
//! Only the handful of fields the rollup needs are decoded; everything else
//! in the backend's event document is ignored.

use serde::{Deserialize, Serialize};

/// Name/namespace metadata shared by entities and checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectMeta {
    pub name: String,
    pub namespace: String,
}

/// The monitored host or service that produced an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEntity {
    #[serde(default)]
    pub metadata: ObjectMeta,
}

/// Result of one check execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCheck {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub is_silenced: bool,
    /// Names of the silence entries muting this check. `null` decodes as empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silenced: Option<Vec<String>>,
}

/// One event as returned by the events endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub entity: EventEntity,
    /// Events without a check are treated as OK and not silenced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check: Option<EventCheck>,
}

impl Event {
    /// Build an event for `entity` with the given check result.
    pub fn new(entity: impl Into<String>, status: i64, silenced: bool) -> Self {
        Self {
            entity: EventEntity {
                metadata: ObjectMeta {
                    name: entity.into(),
                    ..Default::default()
                },
            },
            check: Some(EventCheck {
                status,
                is_silenced: silenced,
                ..Default::default()
            }),
        }
    }

    /// Set the check name.
    pub fn with_check_name(mut self, name: impl Into<String>) -> Self {
        self.check.get_or_insert_with(EventCheck::default).metadata.name = name.into();
        self
    }

    pub fn entity_name(&self) -> &str {
        &self.entity.metadata.name
    }

    pub fn check_name(&self) -> Option<&str> {
        self.check
            .as_ref()
            .map(|c| c.metadata.name.as_str())
            .filter(|name| !name.is_empty())
    }

    /// Raw severity code; `0` when the event carries no check.
    pub fn check_status(&self) -> i64 {
        self.check.as_ref().map_or(0, |c| c.status)
    }

    /// Silenced when flagged, or when any silence entry applies.
    pub fn is_silenced(&self) -> bool {
        self.check.as_ref().is_some_and(|c| {
            c.is_silenced || c.silenced.as_ref().is_some_and(|entries| !entries.is_empty())
        })
    }
}
