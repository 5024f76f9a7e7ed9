//! Bound for application state held by a handler.

/// Marker trait for model objects.
///
/// Models should be:
/// - Immutable (the update function returns a fresh value instead of mutating)
/// - Self-contained (everything an observer needs to react)
///
/// The handler shares the current model as `Arc<M>` between the fold task,
/// the delivery task and subscribers, hence `Send + Sync`.
pub trait Model: Send + Sync + 'static {}

impl<T: Send + Sync + 'static> Model for T {}
