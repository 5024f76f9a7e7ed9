//! Ordered observer registry with snapshot fan-out.

use std::sync::Arc;

use parking_lot::Mutex;

/// Callback notified with every delivered model.
///
/// Identity is the `Arc` allocation: keep a clone to pass to
/// [`Handler::remove_observer`](super::Handler::remove_observer).
pub type Observer<M> = Arc<dyn Fn(&M) + Send + Sync>;

/// Wraps a closure into an [`Observer`].
pub fn observer<M, F>(callback: F) -> Observer<M>
where
    F: Fn(&M) + Send + Sync + 'static,
{
    Arc::new(callback)
}

/// Shared, insertion-ordered list of observers.
///
/// Clones share the same list. The lock is only held for list edits and for
/// taking a snapshot, never while callbacks run, so observers may add or
/// remove observers re-entrantly.
pub(crate) struct ObserverRegistry<M> {
    inner: Arc<Mutex<Vec<Observer<M>>>>,
}

impl<M> Clone for ObserverRegistry<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M> ObserverRegistry<M> {
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Appends without deduplication.
    pub(crate) fn add(&self, observer: Observer<M>) {
        self.inner.lock().push(observer);
    }

    /// Removes every entry sharing `observer`'s allocation. Returns how many
    /// entries were dropped.
    pub(crate) fn remove(&self, observer: &Observer<M>) -> usize {
        let mut observers = self.inner.lock();
        let before = observers.len();
        observers.retain(|existing| !same_observer(existing, observer));
        before - observers.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Copy of the list as it stands now; later edits don't affect it.
    pub(crate) fn snapshot(&self) -> Vec<Observer<M>> {
        self.inner.lock().clone()
    }
}

// Compares data pointers only: vtable pointers for the same closure type are
// not guaranteed unique across codegen units.
fn same_observer<M>(a: &Observer<M>, b: &Observer<M>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}
