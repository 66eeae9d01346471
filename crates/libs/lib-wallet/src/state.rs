//! # Connector State
//!
//! [`ProviderState`] is the record published to views. [`StateStore`] owns it and
//! notifies watchers after each write. Readers can take snapshots or watch; only
//! this crate can write, so the connection provider stays the single owner.
//!
//! Background tasks and wallet callbacks hold a [`WeakStateStore`]. Once the
//! store is gone their writes are dropped.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::client::BlockchainClient;
use crate::transport::Subscription;

/// Value published to descendant views.
#[derive(Clone, Debug, Default)]
pub struct ProviderState {
    /// First authorized address, as last reported by the wallet.
    pub current_account: Option<String>,
    /// Client bound to the wallet transport.
    pub provider: Option<BlockchainClient>,
    /// Hex id of the target network, set only when the wallet was already on it.
    pub chain_id: Option<String>,
}

impl ProviderState {
    pub fn is_connected(&self) -> bool {
        self.current_account.is_some()
    }

    pub fn has_wallet(&self) -> bool {
        self.provider.is_some()
    }
}

type Watcher = Rc<dyn Fn(&ProviderState)>;

#[derive(Default)]
struct Inner {
    state: RefCell<ProviderState>,
    watchers: RefCell<Vec<(u64, Watcher)>>,
    next_watcher_id: Cell<u64>,
}

/// Shared, single-threaded handle to the connector state.
#[derive(Clone, Default)]
pub struct StateStore {
    inner: Rc<Inner>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ProviderState {
        self.inner.state.borrow().clone()
    }

    pub fn current_account(&self) -> Option<String> {
        self.inner.state.borrow().current_account.clone()
    }

    pub fn provider(&self) -> Option<BlockchainClient> {
        self.inner.state.borrow().provider.clone()
    }

    pub fn chain_id(&self) -> Option<String> {
        self.inner.state.borrow().chain_id.clone()
    }

    /// Call `watcher` with the new state after every write.
    ///
    /// The watcher is not called for the current state; take a
    /// [`snapshot`](Self::snapshot) first if needed.
    pub fn watch(&self, watcher: impl Fn(&ProviderState) + 'static) -> Subscription {
        let id = self.inner.next_watcher_id.get();
        self.inner.next_watcher_id.set(id + 1);
        self.inner
            .watchers
            .borrow_mut()
            .push((id, Rc::new(watcher)));

        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.watchers.borrow_mut().retain(|(other, _)| *other != id);
            }
        })
    }

    pub fn watcher_count(&self) -> usize {
        self.inner.watchers.borrow().len()
    }

    pub(crate) fn downgrade(&self) -> WeakStateStore {
        WeakStateStore {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Last write wins; repeated identical values still publish.
    pub(crate) fn set_account(&self, account: Option<String>) {
        log::debug!("current_account <- {:?}", account);
        self.inner.state.borrow_mut().current_account = account;
        self.publish();
    }

    /// First client wins.
    pub(crate) fn set_client(&self, client: BlockchainClient) {
        {
            let mut state = self.inner.state.borrow_mut();
            if state.provider.is_some() {
                log::debug!("client handle already set, keeping the first one");
                return;
            }
            state.provider = Some(client);
        }
        log::debug!("provider <- client handle");
        self.publish();
    }

    pub(crate) fn set_network(&self, chain_id: String) {
        log::debug!("chain_id <- {}", chain_id);
        self.inner.state.borrow_mut().chain_id = Some(chain_id);
        self.publish();
    }

    fn publish(&self) {
        let snapshot = self.snapshot();
        let watchers: Vec<Watcher> = self
            .inner
            .watchers
            .borrow()
            .iter()
            .map(|(_, watcher)| watcher.clone())
            .collect();
        for watcher in watchers {
            watcher(&snapshot);
        }
    }
}

impl fmt::Debug for StateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateStore")
            .field("state", &*self.inner.state.borrow())
            .field("watchers", &self.watcher_count())
            .finish()
    }
}

/// Non-owning handle held by tasks and wallet callbacks.
#[derive(Clone)]
pub(crate) struct WeakStateStore {
    inner: Weak<Inner>,
}

impl WeakStateStore {
    pub(crate) fn upgrade(&self) -> Option<StateStore> {
        self.inner.upgrade().map(|inner| StateStore { inner })
    }
}
