//! Model-View-Intent primitives shared by every [`Handler`](crate::Handler).
//!
//! # Architecture
//!
//! ```text
//! Command ──→ update ──→ Model ──→ Observers
//!    ↑           │                    │
//!    └─ dispatch ┘────────────────────┘
//! ```
//!
//! - **Model**: immutable application state, replaced wholesale on change
//! - **Command**: a requested transition, consumed by exactly one fold
//! - **Reducer**: pure fold `(model, dispatch, command) -> Option<model>`

mod command;
mod model;
mod reducer;

pub use command::Command;
pub use model::Model;
pub use reducer::Reducer;
