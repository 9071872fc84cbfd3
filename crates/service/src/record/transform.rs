use std::fmt::Debug;

use models::record::Record;

/// Pure mapping between an API model and its persisted record.
pub trait Transform: Send + Sync + 'static {
    type Model: Debug + Send + Sync + 'static;
    type Entity: Record + Debug;

    /// Record kind used in logs.
    const KIND: &'static str;

    fn model_id(model: &Self::Model) -> i32;

    /// Copies the mutable fields. The id is carried over only when positive;
    /// otherwise it stays unset so the store inserts. Timestamps never cross.
    fn to_entity(model: Self::Model) -> Self::Entity;

    /// Copies everything, store-assigned id and timestamps included.
    fn to_model(entity: Self::Entity) -> Self::Model;

    /// Copies the mutable fields onto an already persisted record, leaving
    /// its id and timestamps alone.
    fn overwrite(entity: &mut Self::Entity, model: Self::Model);
}
