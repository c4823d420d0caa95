//! Data model: raw backend events in, per-entity rollups out.

pub mod entity_status;
pub mod event;
pub mod severity;

pub use entity_status::{EntityStatus, EntityStatusMap};
pub use event::{Event, EventCheck, EventEntity, ObjectMeta};
pub use severity::{display_token, Severity};
