//! Minimal unidirectional-data-flow state container.
//!
//! Callers [`send`](Handler::send) commands; a pure update function folds
//! each one against the current model to produce the next model (or no
//! change); registered observers are notified of every delivered model,
//! optionally batched by a debounce window.
//!
//! ```no_run
//! use unistate::{observer, Dispatcher, Handler, HandlerConfig};
//!
//! enum Counter {
//!     Increment,
//!     Reset,
//! }
//!
//! fn update(model: &i64, _dispatch: &Dispatcher<Counter>, command: Counter) -> Option<i64> {
//!     match command {
//!         Counter::Increment => Some(model + 1),
//!         Counter::Reset if *model != 0 => Some(0),
//!         Counter::Reset => None,
//!     }
//! }
//!
//! # async fn run() -> Result<(), unistate::HandlerError> {
//! let handler = Handler::new(0, update, HandlerConfig::default())?;
//! handler.add_observer(observer(|model: &i64| println!("model = {model}")));
//! handler.send(Counter::Increment);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod mvi;

pub use config::{ConfigError, HandlerConfig};
pub use error::HandlerError;
pub use handler::{observer, Dispatcher, Handler, Observer};
pub use mvi::{Command, Model, Reducer};
