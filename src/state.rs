use std::sync::{Arc, Mutex, MutexGuard};

use crate::store::ListStore;

pub struct AppState {
    store: Mutex<ListStore>,
}

impl AppState {
    pub fn new(store: ListStore) -> Arc<Self> {
        Arc::new(Self {
            store: Mutex::new(store),
        })
    }

    /// Locks the store for the duration of one operation. Handlers must not
    /// hold the guard across an await point.
    pub fn store(&self) -> MutexGuard<'_, ListStore> {
        // No store operation leaves the data half-mutated on panic, so a
        // poisoned lock is safe to recover.
        self.store
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
