//! The state container: command intake, fold, and model delivery.
//!
//! ```text
//! send ──→ [intake queue] ──delay──→ fold(update) ──Some──→ [model queue]
//!                ↑                       │                       │
//!                └──── Dispatcher ───────┘              debounce (optional)
//!                                                                │
//!                                               observers + subscribe() stream
//! ```
//!
//! Two tokio tasks run per handler: the fold loop owns the only write access
//! to the current model; the delivery loop owns debouncing and fan-out.
//! Dropping the [`Handler`] aborts both.

mod delivery;
mod dispatch;
mod observers;

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::config::HandlerConfig;
use crate::error::HandlerError;
use crate::mvi::{Command, Model, Reducer};

use delivery::{delivery_loop, Outlet};
use dispatch::fold_loop;
use observers::ObserverRegistry;

pub use dispatch::Dispatcher;
pub use observers::{observer, Observer};

/// Buffered values per `subscribe()` receiver before it starts lagging.
const STREAM_CAPACITY: usize = 64;

/// Unidirectional-data-flow state container.
///
/// Holds exactly one current model, folds every sent command through the
/// update function in send order, and delivers each accepted model to
/// registered observers (optionally debounced).
pub struct Handler<M, C> {
    dispatcher: Dispatcher<C>,
    observers: ObserverRegistry<M>,
    current: Arc<RwLock<Arc<M>>>,
    stream: broadcast::Sender<Arc<M>>,
    fold_task: JoinHandle<()>,
    delivery_task: JoinHandle<()>,
}

impl<M: Model, C: Command> Handler<M, C> {
    /// Create a handler and start its tasks on the current tokio runtime.
    ///
    /// `initial_model` is queued for delivery before this returns, and the
    /// delivery task holds it until the intake delay has passed. Observers
    /// added right after construction therefore receive it first on any
    /// runtime flavor, as long as they are registered within that delay.
    ///
    /// # Errors
    /// `HandlerError::Config` for an invalid config, `HandlerError::NoRuntime`
    /// when called outside a tokio runtime.
    pub fn new<F>(
        initial_model: M,
        update: F,
        config: HandlerConfig,
    ) -> Result<Self, HandlerError>
    where
        F: Fn(&M, &Dispatcher<C>, C) -> Option<M> + Send + Sync + 'static,
    {
        config.validate()?;
        let runtime =
            tokio::runtime::Handle::try_current().map_err(|_| HandlerError::NoRuntime)?;

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (model_tx, model_rx) = mpsc::unbounded_channel();
        let (stream, _) = broadcast::channel(STREAM_CAPACITY);

        let dispatcher = Dispatcher::new(command_tx, config.intake_delay());
        let observers = ObserverRegistry::new();
        let initial_model = Arc::new(initial_model);
        let current = Arc::new(RwLock::new(Arc::clone(&initial_model)));

        // model_rx is still held here, so this can't fail.
        let _ = model_tx.send(initial_model);

        let start = Instant::now() + config.intake_delay();
        let outlet = Outlet::new(observers.clone(), stream.clone());
        let delivery_task =
            runtime.spawn(delivery_loop(model_rx, start, config.debounce(), outlet));
        let fold_task = runtime.spawn(fold_loop(
            command_rx,
            dispatcher.clone(),
            update,
            Arc::clone(&current),
            model_tx,
        ));

        tracing::debug!(
            debounce_ms = config.debounce_ms,
            intake_delay_ms = config.intake_delay_ms,
            "handler started"
        );

        Ok(Self {
            dispatcher,
            observers,
            current,
            stream,
            fold_task,
            delivery_task,
        })
    }

    /// Create a handler whose update function is `R::update`.
    pub fn with_reducer<R>(
        initial_model: M,
        config: HandlerConfig,
    ) -> Result<Self, HandlerError>
    where
        R: Reducer<Model = M, Command = C> + 'static,
    {
        Self::new(initial_model, R::update, config)
    }

    /// Enqueue a command. See [`Dispatcher::send`].
    pub fn send(&self, command: C) {
        self.dispatcher.send(command);
    }

    /// A cloneable handle that sends into this handler.
    pub fn dispatcher(&self) -> Dispatcher<C> {
        self.dispatcher.clone()
    }

    /// Append `observer`. Registering the same observer twice means two
    /// calls per delivered model.
    ///
    /// An observer added while a fan-out is running only sees later values.
    pub fn add_observer(&self, observer: Observer<M>) {
        self.observers.add(observer);
        tracing::debug!(observers = self.observers.len(), "observer added");
    }

    /// Remove every registration of `observer` (matched by `Arc` identity).
    /// Absent observers are ignored. A fan-out already running is not
    /// affected.
    pub fn remove_observer(&self, observer: &Observer<M>) {
        let removed = self.observers.remove(observer);
        tracing::debug!(removed, observers = self.observers.len(), "observer removed");
    }

    /// Number of registrations, counting duplicates.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// The model as of the last fold. It may not have been delivered yet
    /// when a debounce window is pending.
    pub fn model(&self) -> Arc<M> {
        self.current.read().clone()
    }

    /// Receive every delivered model, starting with the next delivery.
    ///
    /// Values are the same as observers see, after debouncing. A receiver
    /// that falls more than 64 values behind gets `RecvError::Lagged`.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<M>> {
        self.stream.subscribe()
    }
}

impl<M, C> Drop for Handler<M, C> {
    fn drop(&mut self) {
        // Pending commands and a held debounced model are discarded.
        self.fold_task.abort();
        self.delivery_task.abort();
        tracing::debug!("handler stopped");
    }
}
