//! Reducer trait for MVI architecture.

use super::command::Command;
use super::model::Model;
use crate::handler::Dispatcher;

/// Reducer folds commands into models.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (Model, Command) -> Option<Model>, where the
/// only permitted effect is enqueueing follow-up commands through `dispatch`.
pub trait Reducer {
    /// The model type this reducer operates on.
    type Model: Model;

    /// The command type this reducer handles.
    type Command: Command;

    /// Process a command and return the next model.
    ///
    /// Return `None` when the command leaves the model untouched (including
    /// commands the reducer does not recognize). Commands sent via
    /// `dispatch` are folded after this call returns, never inline.
    fn update(
        model: &Self::Model,
        dispatch: &Dispatcher<Self::Command>,
        command: Self::Command,
    ) -> Option<Self::Model>;
}
