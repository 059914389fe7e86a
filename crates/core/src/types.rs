/// All entity primary keys are opaque UUIDs assigned by the store at
/// creation and never reassigned.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
