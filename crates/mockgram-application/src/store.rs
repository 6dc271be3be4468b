//! Process-wide owner of the committed profile record.
//!
//! Every committed change goes through [`ProfileStore::replace`], which
//! swaps the whole record, persists it and then tells subscribers.

use mockgram_core::profile::{ProfileRecord, ProfileRepository};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Receives the committed record after every replacement.
pub trait ProfileObserver: Send + Sync {
    fn profile_changed(&self, record: &ProfileRecord);
}

impl<F> ProfileObserver for F
where
    F: Fn(&ProfileRecord) + Send + Sync,
{
    fn profile_changed(&self, record: &ProfileRecord) {
        self(record)
    }
}

/// Handle returned by [`ProfileStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct StoreState {
    record: ProfileRecord,
    viewing_own: bool,
}

/// Holds the committed [`ProfileRecord`] and the viewing-own flag.
pub struct ProfileStore {
    state: RwLock<StoreState>,
    repository: Arc<dyn ProfileRepository>,
    observers: RwLock<Vec<(SubscriptionId, Arc<dyn ProfileObserver>)>>,
    next_subscription: AtomicU64,
}

impl ProfileStore {
    /// Creates a store seeded with `record`. Nothing is written until the first replace.
    pub fn new(record: ProfileRecord, repository: Arc<dyn ProfileRepository>) -> Self {
        Self {
            state: RwLock::new(StoreState {
                record,
                viewing_own: true,
            }),
            repository,
            observers: RwLock::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
        }
    }

    /// Creates a store seeded from whatever the repository holds.
    pub fn open(repository: Arc<dyn ProfileRepository>) -> Self {
        let record = repository.load();
        Self::new(record, repository)
    }

    /// Snapshot of the committed record.
    pub fn get(&self) -> ProfileRecord {
        self.read_state().record.clone()
    }

    /// Runs `f` against the committed record without cloning it.
    pub fn with_record<R>(&self, f: impl FnOnce(&ProfileRecord) -> R) -> R {
        f(&self.read_state().record)
    }

    /// Whether the profile page renders the owner's variant.
    pub fn viewing_own(&self) -> bool {
        self.read_state().viewing_own
    }

    pub fn set_viewing_own(&self, viewing_own: bool) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if state.viewing_own != viewing_own {
            tracing::debug!("[ProfileStore] viewing_own -> {}", viewing_own);
        }
        state.viewing_own = viewing_own;
    }

    /// Replaces the whole record, persists it, then notifies subscribers in
    /// subscription order.
    ///
    /// Persistence failures are logged by the repository and do not roll
    /// back the in-memory record.
    pub fn replace(&self, record: ProfileRecord) {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.record = record.clone();
            // Saved under the lock so the stored order matches the in-memory order
            self.repository.save(&record);
        }

        tracing::info!(
            "[ProfileStore] Committed profile '{}' ({} highlights, {} posts)",
            record.username,
            record.highlights.len(),
            record.post_count()
        );

        // Snapshot so observers may subscribe or read the store re-entrantly
        let observers: Vec<Arc<dyn ProfileObserver>> = self
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();

        for observer in observers {
            observer.profile_changed(&record);
        }
    }

    /// Registers an observer called after every [`replace`](Self::replace).
    pub fn subscribe(&self, observer: Arc<dyn ProfileObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, observer));
        id
    }

    /// Removes an observer. Returns false if it was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.write().unwrap_or_else(PoisonError::into_inner);
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}
