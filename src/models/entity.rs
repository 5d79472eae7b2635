//! The capability set a record type exposes to the generic CRUD stack.

/// A durable record with a unique numeric identifier.
///
/// The associated types carry the request payloads for the two write paths:
/// `Create` builds a fresh record, `Update` replaces the mutable fields of an
/// existing one. The id itself is never part of either payload.
pub trait Entity: Clone + Send + Sync + 'static {
    type Create: Send;
    type Update: Send;

    /// Resource name used in log and error messages.
    const RESOURCE: &'static str;

    /// `None` until the store assigns an id on first save.
    fn id(&self) -> Option<i64>;

    /// Assign the store-generated id. Called exactly once per record.
    fn assign_id(&mut self, id: i64);

    /// Construct a new, not-yet-persisted record from a create payload.
    fn from_create(input: Self::Create) -> Self;

    /// Overwrite the mutable fields from an update payload, preserving id.
    fn apply_update(&mut self, input: Self::Update);
}
