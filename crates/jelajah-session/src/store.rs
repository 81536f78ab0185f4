//! Session Store
//!
//! Shared handle over one `TabSession`. Collaborators read snapshots and
//! call the four operations; they never touch the session directly.
//!
//! Every change bumps a revision under the write lock. Listeners see
//! snapshots in revision order; a snapshot overtaken by a newer one before
//! delivery is dropped.

use parking_lot::{ReentrantMutex, RwLock};
use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use jelajah_tabs::{Icon, PageKind, TabId};

use crate::session::{SessionSnapshot, TabSession};

type Listener = Arc<dyn Fn(&SessionSnapshot) + Send + Sync>;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Shared {
    session: RwLock<TabSession>,
    /// Change listeners, in subscription order
    listeners: RwLock<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicU64,
    /// Bumped under the session write lock on every change
    revision: AtomicU64,
    /// Newest revision handed to listeners. Reentrant so a listener may
    /// mutate the store.
    delivered: ReentrantMutex<Cell<u64>>,
}

pub struct SessionStore {
    shared: Arc<Shared>,
}

/// Non-owning store handle for listeners that need to read the store.
///
/// A listener holding a `SessionStore` clone keeps the session alive
/// forever; hold one of these instead.
#[derive(Clone)]
pub struct WeakSessionStore {
    shared: Weak<Shared>,
}

impl WeakSessionStore {
    pub fn upgrade(&self) -> Option<SessionStore> {
        self.shared.upgrade().map(|shared| SessionStore { shared })
    }
}

impl SessionStore {
    pub fn new(home_title: impl Into<String>) -> Self {
        Self::from_session(TabSession::with_home_title(home_title))
    }

    pub fn from_session(session: TabSession) -> Self {
        Self {
            shared: Arc::new(Shared {
                session: RwLock::new(session),
                listeners: RwLock::new(Vec::new()),
                next_subscription: AtomicU64::new(1),
                revision: AtomicU64::new(0),
                delivered: ReentrantMutex::new(Cell::new(0)),
            }),
        }
    }

    /// Seed the home tab. Returns whether this call did the seeding.
    pub fn initialize(&self) -> bool {
        self.mutate(|session| {
            let seeded = session.initialize();
            (seeded, seeded)
        })
    }

    pub fn add_new_tab(&self, page: PageKind, title: impl Into<String>, icon: Icon) -> TabId {
        let title = title.into();
        self.mutate(|session| (session.add_new_tab(page, title, icon), true))
    }

    pub fn switch_tab(&self, tab_id: &TabId) {
        self.mutate(|session| ((), session.switch_tab(tab_id)));
    }

    pub fn close_tab(&self, tab_id: &TabId) {
        self.mutate(|session| ((), session.close_tab(tab_id)));
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.shared.session.read().snapshot()
    }

    /// Run `f` against the session under the read lock
    pub fn read<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&TabSession) -> T,
    {
        f(&*self.shared.session.read())
    }

    pub fn downgrade(&self) -> WeakSessionStore {
        WeakSessionStore {
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Register a listener called with the new snapshot after every change.
    ///
    /// Listeners that need the store should capture `downgrade()`, not a clone.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&SessionSnapshot) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.shared.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.shared.listeners.write().push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.shared.listeners.write();
        let before = listeners.len();
        listeners.retain(|(sub, _)| *sub != id);
        listeners.len() != before
    }

    /// Apply `f` under the write lock, then notify listeners if it reported a change.
    /// Listeners run after the lock is released so they may read the store.
    fn mutate<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut TabSession) -> (T, bool),
    {
        let (out, change) = {
            let mut session = self.shared.session.write();
            let (out, changed) = f(&mut *session);
            let change = changed.then(|| {
                let revision = self.shared.revision.fetch_add(1, Ordering::SeqCst) + 1;
                (revision, session.snapshot())
            });
            (out, change)
        };

        if let Some((revision, snapshot)) = change {
            self.notify(revision, &snapshot);
        }

        out
    }

    fn notify(&self, revision: u64, snapshot: &SessionSnapshot) {
        let delivered = self.shared.delivered.lock();
        if delivered.get() >= revision {
            tracing::debug!(revision, "Dropping superseded session snapshot");
            return;
        }
        delivered.set(revision);

        let listeners: Vec<Listener> = self
            .shared
            .listeners
            .read()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            // A listener mutated the store; the newer snapshot already went out
            if delivered.get() != revision {
                break;
            }
            listener(snapshot);
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::from_session(TabSession::new())
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}
