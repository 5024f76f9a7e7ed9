//! Command intake: the dispatch capability and the fold loop.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time::Instant;

use crate::error::HandlerError;
use crate::mvi::{Command, Model};

/// A queued command and the earliest instant it may be folded.
pub(crate) struct Envelope<C> {
    due: Instant,
    command: C,
}

/// Capability to enqueue commands onto a [`Handler`](super::Handler).
///
/// Cheap to clone and `Send + Sync`, so it can be moved into observers,
/// other tasks or other threads. All clones feed one single-consumer queue:
/// commands are folded in arrival order, one at a time.
pub struct Dispatcher<C> {
    tx: UnboundedSender<Envelope<C>>,
    delay: Duration,
}

impl<C> Clone for Dispatcher<C> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            delay: self.delay,
        }
    }
}

impl<C: Command> Dispatcher<C> {
    pub(crate) fn new(tx: UnboundedSender<Envelope<C>>, delay: Duration) -> Self {
        Self { tx, delay }
    }

    /// Enqueue `command` for folding.
    ///
    /// Never blocks and never folds inline: the command is processed on a
    /// later scheduling turn, after every command sent before it. Commands
    /// sent after the handler is dropped are discarded.
    pub fn send(&self, command: C) {
        if self.try_send(command).is_err() {
            tracing::trace!("dispatch: command dropped (handler closed)");
        }
    }

    /// Like [`send`](Self::send), but reports a dropped handler.
    pub fn try_send(&self, command: C) -> Result<(), HandlerError> {
        let envelope = Envelope {
            due: Instant::now() + self.delay,
            command,
        };
        self.tx.send(envelope).map_err(|_| HandlerError::Closed)
    }

    /// True once the owning handler has shut down.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Folds queued commands into the current model until aborted.
///
/// The loop owns a dispatcher clone to hand to `update`, which keeps the
/// intake open; the handler stops it by aborting the task.
pub(crate) async fn fold_loop<M, C, F>(
    mut rx: UnboundedReceiver<Envelope<C>>,
    dispatcher: Dispatcher<C>,
    update: F,
    current: Arc<RwLock<Arc<M>>>,
    model_tx: UnboundedSender<Arc<M>>,
) where
    M: Model,
    C: Command,
    F: Fn(&M, &Dispatcher<C>, C) -> Option<M>,
{
    while let Some(Envelope { due, command }) = rx.recv().await {
        if due > Instant::now() {
            tokio::time::sleep_until(due).await;
        }

        let model = current.read().clone();
        let Some(next) = update(&model, &dispatcher, command) else {
            tracing::trace!("fold: no change");
            continue;
        };

        let next = Arc::new(next);
        *current.write() = Arc::clone(&next);
        tracing::trace!("fold: model replaced");

        if model_tx.send(next).is_err() {
            tracing::trace!("fold: delivery stage gone, stopping");
            break;
        }
    }
}
