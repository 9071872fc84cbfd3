//! Store-side view shared by every persisted record kind.

use chrono::Utc;
use sea_orm::entity::prelude::DateTimeWithTimeZone;

pub type Timestamp = DateTimeWithTimeZone;

/// Current wall-clock time as stored in `timestamptz` columns.
pub fn now() -> Timestamp {
    Utc::now().into()
}

/// A record as the persistence gateway sees it.
///
/// Identifiers and timestamps belong to the store: only a store
/// implementation calls [`Record::stamp`].
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> Option<i32>;
    fn created(&self) -> Option<Timestamp>;
    fn stamp(&mut self, id: i32, created: Timestamp, last_updated: Timestamp);
}
