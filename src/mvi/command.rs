//! Bound for values that can travel through the command intake.

/// Marker trait for command objects.
///
/// Commands represent:
/// - User actions (button clicks, key presses)
/// - System events (responses, timers)
/// - Follow-up work enqueued by the update function itself
///
/// Any `Send + 'static` type qualifies; commands cross the intake queue into
/// the fold task and are dropped once folded.
pub trait Command: Send + 'static {}

impl<T: Send + 'static> Command for T {}
