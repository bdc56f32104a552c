/// Entity identifiers are opaque UUID strings (assigned by storage).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
