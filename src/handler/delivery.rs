//! Output stage: optional debounce, then fan-out to observers and subscribers.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::Instant;

use super::observers::ObserverRegistry;
use crate::mvi::Model;

/// Where delivered models go.
pub(crate) struct Outlet<M> {
    observers: ObserverRegistry<M>,
    stream: broadcast::Sender<Arc<M>>,
}

impl<M: Model> Outlet<M> {
    pub(crate) fn new(observers: ObserverRegistry<M>, stream: broadcast::Sender<Arc<M>>) -> Self {
        Self { observers, stream }
    }

    /// Calls every observer registered right now, in registration order,
    /// then publishes to stream subscribers.
    fn deliver(&self, model: Arc<M>) {
        let observers = self.observers.snapshot();
        tracing::trace!(observers = observers.len(), "delivery: fan-out");
        for observer in observers {
            observer(&model);
        }
        // No subscribers is fine.
        let _ = self.stream.send(model);
    }
}

/// Drains the model channel into `outlet`.
///
/// Nothing is delivered before `start`, which is the first intake deadline:
/// the initial model goes out on the same deferred turn as the first fold,
/// after the constructing caller has registered its observers.
///
/// With a zero `debounce` every model is delivered as it arrives. Otherwise
/// a model is held until `debounce` passes with no newer model; a newer
/// arrival replaces the held one and restarts the window.
pub(crate) async fn delivery_loop<M: Model>(
    mut rx: UnboundedReceiver<Arc<M>>,
    start: Instant,
    debounce: Duration,
    outlet: Outlet<M>,
) {
    if start > Instant::now() {
        tokio::time::sleep_until(start).await;
    }

    if debounce.is_zero() {
        while let Some(model) = rx.recv().await {
            outlet.deliver(model);
        }
        return;
    }

    let mut pending: Option<Arc<M>> = None;

    loop {
        let Some(held) = pending.take() else {
            match rx.recv().await {
                Some(model) => pending = Some(model),
                None => break,
            }
            continue;
        };

        match tokio::time::timeout(debounce, rx.recv()).await {
            Ok(Some(newer)) => {
                tracing::trace!("delivery: superseded within debounce window");
                pending = Some(newer);
            }
            Ok(None) => {
                // Fold stage stopped: flush what settled last.
                outlet.deliver(held);
                break;
            }
            Err(_) => outlet.deliver(held),
        }
    }
}
