//! # Wallet Connection Provider
//!
//! Owns the [`StateStore`] and fills it from the injected wallet when mounted:
//!
//! 1. **Client construction** - a [`BlockchainClient`] over the transport, built
//!    synchronously, once.
//! 2. **Account discovery & tracking** - `eth_requestAccounts`, then an
//!    `accountsChanged` listener held for the life of the mount.
//! 3. **Network enforcement** - compare `networkVersion` with the target's decimal
//!    id; either publish the target's hex id or ask the wallet to switch.
//!
//! Steps 2 and 3 are spawned as independent tasks. Views may see any partial
//! combination of fields until both settle. Nothing here retries or times out.
//!
//! A successful switch shows a notice and leaves `chain_id` unset. `chain_id` is
//! published only when the wallet was already on the target network.
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use futures::executor::LocalPool;
//! use lib_wallet::{LogNotifier, WalletConfig, WalletConnectionProvider};
//!
//! let provider = WalletConnectionProvider::new(None, Rc::new(LogNotifier), WalletConfig::default());
//! let mut pool = LocalPool::new();
//! let mounted = provider.mount(&pool.spawner()).unwrap();
//! pool.run_until_stalled();
//!
//! assert!(provider.state().snapshot().provider.is_none());
//! drop(mounted);
//! ```

use std::cell::Cell;
use std::rc::Rc;

use futures::task::{LocalSpawn, LocalSpawnExt};
use shared::dto::rpc::RpcRequest;

use crate::client::BlockchainClient;
use crate::config::WalletConfig;
use crate::error::Result;
use crate::notify::Notifier;
use crate::state::{StateStore, WeakStateStore};
use crate::transport::{AccountsHandler, Subscription, WalletTransport};

pub struct WalletConnectionProvider {
    transport: Option<Rc<dyn WalletTransport>>,
    notifier: Rc<dyn Notifier>,
    config: WalletConfig,
    state: StateStore,
    mounted: Cell<bool>,
}

impl WalletConnectionProvider {
    /// `transport` is `None` when no wallet is injected; every step is then skipped.
    pub fn new(
        transport: Option<Rc<dyn WalletTransport>>,
        notifier: Rc<dyn Notifier>,
        config: WalletConfig,
    ) -> Self {
        Self {
            transport,
            notifier,
            config,
            state: StateStore::new(),
            mounted: Cell::new(false),
        }
    }

    /// Read-only view of the published state.
    pub fn state(&self) -> &StateStore {
        &self.state
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    /// Start all three steps. Dropping the returned guard releases the
    /// `accountsChanged` listener.
    ///
    /// Only a refusing executor is reported as an error; wallet failures are
    /// logged and leave the affected field untouched.
    ///
    /// A provider mounts once. Later calls return an inert guard and touch
    /// neither the wallet nor the state.
    pub fn mount(&self, spawner: &impl LocalSpawn) -> Result<Mounted> {
        if self.mounted.replace(true) {
            log::warn!("Wallet connector already mounted, ignoring repeated mount");
            return Ok(Mounted { accounts: None });
        }

        let Some(transport) = self.transport.clone() else {
            log::info!("No injected wallet, connector stays empty");
            return Ok(Mounted { accounts: None });
        };

        self.state.set_client(BlockchainClient::new(transport.clone()));

        let accounts = subscribe_accounts(transport.as_ref(), self.state.downgrade());

        spawner.spawn_local(discover_accounts(transport.clone(), self.state.downgrade()))?;
        spawner.spawn_local(enforce_network(
            transport,
            self.notifier.clone(),
            self.config.clone(),
            self.state.downgrade(),
        ))?;

        log::info!("Wallet connector mounted (target: {})", self.config.target.name);
        Ok(Mounted { accounts })
    }
}

/// Live mount of a [`WalletConnectionProvider`].
#[derive(Debug)]
#[must_use = "dropping Mounted unsubscribes from account changes"]
pub struct Mounted {
    accounts: Option<Subscription>,
}

impl Mounted {
    pub fn is_tracking_accounts(&self) -> bool {
        self.accounts.as_ref().is_some_and(Subscription::is_active)
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        if self.accounts.take().is_some() {
            log::info!("Wallet connector unmounted, account listener released");
        }
    }
}

fn apply_accounts(state: &WeakStateStore, accounts: Vec<String>) {
    match state.upgrade() {
        Some(state) => state.set_account(accounts.into_iter().next()),
        None => log::debug!("accounts arrived after teardown, ignored"),
    }
}

fn subscribe_accounts(transport: &dyn WalletTransport, state: WeakStateStore) -> Option<Subscription> {
    let handler: AccountsHandler = Rc::new(move |accounts: Vec<String>| {
        log::debug!("accountsChanged: {} account(s)", accounts.len());
        apply_accounts(&state, accounts);
    });

    match transport.on_accounts_changed(handler) {
        Ok(subscription) => Some(subscription),
        Err(e) => {
            log::warn!("Could not listen for account changes: {}", e);
            None
        }
    }
}

async fn discover_accounts(transport: Rc<dyn WalletTransport>, state: WeakStateStore) {
    let result = transport.request(RpcRequest::request_accounts()).await;

    let accounts = match result.and_then(|value| Ok(serde_json::from_value::<Vec<String>>(value)?)) {
        Ok(accounts) => accounts,
        Err(e) => {
            log::warn!("eth_requestAccounts failed: {}", e);
            return;
        }
    };

    log::info!("Wallet authorized {} account(s)", accounts.len());
    if accounts.is_empty() {
        return;
    }
    apply_accounts(&state, accounts);
}

async fn enforce_network(
    transport: Rc<dyn WalletTransport>,
    notifier: Rc<dyn Notifier>,
    config: WalletConfig,
    state: WeakStateStore,
) {
    let reported = transport.network_version();
    log::debug!("Wallet networkVersion: {:?}", reported);

    let target = &config.target;
    if target.matches_network_version(reported.as_deref()) {
        if let Some(state) = state.upgrade() {
            state.set_network(target.chain_id.clone());
        }
        return;
    }

    match transport.request(RpcRequest::switch_chain(&target.chain_id)).await {
        Ok(_) => notifier.notify(&config.switch_notice()),
        Err(e) => log::error!("wallet_switchEthereumChain to {} failed: {}", target.chain_id, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::LogNotifier;
    use crate::testing::{MockTransport, RecordingNotifier};
    use futures::executor::LocalPool;
    use serde_json::json;
    use shared::dto::rpc::{METHOD_REQUEST_ACCOUNTS, METHOD_SWITCH_CHAIN};

    const AAA: &str = "0xAAA0000000000000000000000000000000000001";
    const BBB: &str = "0xBBB0000000000000000000000000000000000002";
    const CCC: &str = "0xCCC0000000000000000000000000000000000003";

    struct Harness {
        transport: Rc<MockTransport>,
        notifier: Rc<RecordingNotifier>,
        provider: WalletConnectionProvider,
        pool: LocalPool,
    }

    impl Harness {
        fn new(transport: MockTransport) -> Self {
            let transport = Rc::new(transport);
            let notifier = Rc::new(RecordingNotifier::new());
            let provider = WalletConnectionProvider::new(
                Some(transport.clone()),
                notifier.clone(),
                WalletConfig::default(),
            );
            Self {
                transport,
                notifier,
                provider,
                pool: LocalPool::new(),
            }
        }

        fn mount(&mut self) -> Mounted {
            let mounted = self.provider.mount(&self.pool.spawner()).unwrap();
            self.pool.run_until_stalled();
            mounted
        }
    }

    #[test]
    fn test_first_account_is_published() {
        let transport = MockTransport::new().with_network_version("4");
        transport.respond(METHOD_REQUEST_ACCOUNTS, json!([AAA, BBB]));
        let mut h = Harness::new(transport);

        let _mounted = h.mount();

        assert_eq!(h.provider.state().current_account(), Some(AAA.to_string()));
    }

    #[test]
    fn test_empty_accounts_leave_account_unset() {
        let transport = MockTransport::new().with_network_version("4");
        transport.respond(METHOD_REQUEST_ACCOUNTS, json!([]));
        let mut h = Harness::new(transport);

        let _mounted = h.mount();

        assert_eq!(h.provider.state().current_account(), None);
    }

    #[test]
    fn test_rejected_account_request_is_silent() {
        let transport = MockTransport::new().with_network_version("4");
        transport.reject(METHOD_REQUEST_ACCOUNTS, 4001, "User rejected the request.");
        let mut h = Harness::new(transport);

        let _mounted = h.mount();

        assert_eq!(h.provider.state().current_account(), None);
        assert!(h.notifier.messages().is_empty());
        assert_eq!(h.transport.requests_for(METHOD_REQUEST_ACCOUNTS).len(), 1);
    }

    #[test]
    fn test_accounts_changed_overwrites_without_dedup() {
        let transport = MockTransport::new().with_network_version("4");
        transport.respond(METHOD_REQUEST_ACCOUNTS, json!([AAA]));
        let mut h = Harness::new(transport);
        let _mounted = h.mount();

        let writes = Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = writes.clone();
        let _watch = h
            .provider
            .state()
            .watch(move |state| sink.borrow_mut().push(state.current_account.clone()));

        h.transport.emit_accounts_changed(&[CCC]);
        h.transport.emit_accounts_changed(&[CCC]);

        assert_eq!(h.provider.state().current_account(), Some(CCC.to_string()));
        assert_eq!(writes.borrow().len(), 2);
    }

    #[test]
    fn test_accounts_changed_to_empty_clears_account() {
        let transport = MockTransport::new().with_network_version("4");
        transport.respond(METHOD_REQUEST_ACCOUNTS, json!([AAA]));
        let mut h = Harness::new(transport);
        let _mounted = h.mount();

        h.transport.emit_accounts_changed(&[]);

        assert_eq!(h.provider.state().current_account(), None);
    }

    #[test]
    fn test_matching_network_publishes_hex_id_without_switch() {
        let transport = MockTransport::new().with_network_version("4");
        transport.respond(METHOD_REQUEST_ACCOUNTS, json!([AAA]));
        let mut h = Harness::new(transport);

        let _mounted = h.mount();

        assert_eq!(h.provider.state().chain_id(), Some("0x4".to_string()));
        assert!(h.transport.requests_for(METHOD_SWITCH_CHAIN).is_empty());
        assert!(h.notifier.messages().is_empty());
    }

    // After a successful switch the chain id is intentionally left unset.
    #[test]
    fn test_switch_success_notifies_and_keeps_chain_unset() {
        let transport = MockTransport::new().with_network_version("1");
        transport.respond(METHOD_REQUEST_ACCOUNTS, json!([AAA]));
        transport.respond(METHOD_SWITCH_CHAIN, json!(null));
        let mut h = Harness::new(transport);

        let _mounted = h.mount();

        let switches = h.transport.requests_for(METHOD_SWITCH_CHAIN);
        assert_eq!(switches.len(), 1);
        assert_eq!(switches[0].params, Some(json!([{ "chainId": "0x4" }])));
        assert_eq!(h.notifier.messages(), vec!["Switch chain to Rinkeby".to_string()]);
        assert_eq!(h.provider.state().chain_id(), None);
    }

    #[test]
    fn test_switch_rejected_is_logged_only() {
        let transport = MockTransport::new().with_network_version("1");
        transport.reject(METHOD_SWITCH_CHAIN, 4001, "User rejected the request.");
        let mut h = Harness::new(transport);

        let _mounted = h.mount();

        assert_eq!(h.transport.requests_for(METHOD_SWITCH_CHAIN).len(), 1);
        assert!(h.notifier.messages().is_empty());
        assert_eq!(h.provider.state().chain_id(), None);
    }

    #[test]
    fn test_missing_network_version_requests_switch() {
        let transport = MockTransport::new();
        transport.respond(METHOD_SWITCH_CHAIN, json!(null));
        let mut h = Harness::new(transport);

        let _mounted = h.mount();

        assert_eq!(h.transport.requests_for(METHOD_SWITCH_CHAIN).len(), 1);
        assert_eq!(h.provider.state().chain_id(), None);
    }

    #[test]
    fn test_hex_network_version_is_not_normalized() {
        let transport = MockTransport::new().with_network_version("0x4");
        transport.respond(METHOD_SWITCH_CHAIN, json!(null));
        let mut h = Harness::new(transport);

        let _mounted = h.mount();

        assert_eq!(h.transport.requests_for(METHOD_SWITCH_CHAIN).len(), 1);
    }

    #[test]
    fn test_no_transport_leaves_everything_unset() {
        let provider = WalletConnectionProvider::new(None, Rc::new(LogNotifier), WalletConfig::default());
        let mut pool = LocalPool::new();

        let mounted = provider.mount(&pool.spawner()).unwrap();
        pool.run_until_stalled();

        let state = provider.state().snapshot();
        assert!(state.current_account.is_none());
        assert!(state.provider.is_none());
        assert!(state.chain_id.is_none());
        assert!(!mounted.is_tracking_accounts());
    }

    #[test]
    fn test_client_present_with_stub_transport() {
        // Nothing scripted: every request rejects and no network version is reported.
        let mut h = Harness::new(MockTransport::new());

        let _mounted = h.mount();

        let client = h.provider.state().provider().expect("client handle");
        assert!(h.provider.state().current_account().is_none());
        assert!(h.provider.state().chain_id().is_none());

        let again = h.provider.state().provider().unwrap();
        assert!(client.same_transport(&again));
    }

    #[test]
    fn test_client_is_set_before_tasks_run() {
        let h = Harness::new(MockTransport::new().with_network_version("4"));

        let _mounted = h.provider.mount(&h.pool.spawner()).unwrap();

        assert!(h.provider.state().provider().is_some());
        assert!(h.provider.state().chain_id().is_none());
    }

    #[test]
    fn test_hanging_wallet_keeps_initial_values() {
        let transport = MockTransport::new();
        transport.hang(METHOD_REQUEST_ACCOUNTS);
        transport.hang(METHOD_SWITCH_CHAIN);
        let mut h = Harness::new(transport);

        let _mounted = h.mount();

        assert!(h.provider.state().current_account().is_none());
        assert!(h.provider.state().chain_id().is_none());
        assert!(h.notifier.messages().is_empty());
    }

    #[test]
    fn test_unmount_releases_account_listener() {
        let transport = MockTransport::new().with_network_version("4");
        transport.respond(METHOD_REQUEST_ACCOUNTS, json!([AAA]));
        let mut h = Harness::new(transport);

        let mounted = h.mount();
        assert!(mounted.is_tracking_accounts());
        assert_eq!(h.transport.listener_count(), 1);

        drop(mounted);
        assert_eq!(h.transport.listener_count(), 0);

        h.transport.emit_accounts_changed(&[CCC]);
        assert_eq!(h.provider.state().current_account(), Some(AAA.to_string()));
    }

    #[test]
    fn test_listener_refusal_does_not_stop_discovery() {
        let transport = MockTransport::new().with_network_version("4");
        transport.respond(METHOD_REQUEST_ACCOUNTS, json!([BBB]));
        transport.refuse_listeners();
        let mut h = Harness::new(transport);

        let mounted = h.mount();

        assert!(!mounted.is_tracking_accounts());
        assert_eq!(h.provider.state().current_account(), Some(BBB.to_string()));
    }

    #[test]
    fn test_results_after_provider_drop_are_discarded() {
        let transport = Rc::new(MockTransport::new().with_network_version("4"));
        transport.respond(METHOD_REQUEST_ACCOUNTS, json!([AAA]));
        let provider = WalletConnectionProvider::new(
            Some(transport.clone()),
            Rc::new(LogNotifier),
            WalletConfig::default(),
        );
        let mut pool = LocalPool::new();

        let mounted = provider.mount(&pool.spawner()).unwrap();
        let store = provider.state().downgrade();
        drop(mounted);
        drop(provider);

        // Spawned tasks must not keep the store alive.
        assert!(store.upgrade().is_none());

        pool.run_until_stalled();

        assert!(store.upgrade().is_none());
        assert_eq!(transport.requests_for(METHOD_REQUEST_ACCOUNTS).len(), 1);
    }

    #[test]
    fn test_config_is_kept_as_given() {
        let config = WalletConfig::default()
            .with_target(shared::dto::network::TargetNetwork::new("Goerli", "5", "0x5"));
        let provider = WalletConnectionProvider::new(None, Rc::new(LogNotifier), config);

        assert_eq!(provider.config().target.name, "Goerli");
        assert_eq!(provider.config().target.chain_id, "0x5");
    }

    #[test]
    fn test_second_mount_is_inert() {
        let transport = MockTransport::new().with_network_version("1");
        transport.respond(METHOD_REQUEST_ACCOUNTS, json!([AAA]));
        transport.respond(METHOD_SWITCH_CHAIN, json!(null));
        let mut h = Harness::new(transport);

        let first = h.mount();
        let second = h.mount();

        assert!(first.is_tracking_accounts());
        assert!(!second.is_tracking_accounts());
        assert_eq!(h.transport.listener_count(), 1);
        assert_eq!(h.transport.requests_for(METHOD_REQUEST_ACCOUNTS).len(), 1);
        assert_eq!(h.transport.requests_for(METHOD_SWITCH_CHAIN).len(), 1);
        assert_eq!(h.notifier.messages().len(), 1);

        // Dropping the inert guard leaves the live listener in place.
        drop(second);
        assert_eq!(h.transport.listener_count(), 1);
        h.transport.emit_accounts_changed(&[CCC]);
        assert_eq!(h.provider.state().current_account(), Some(CCC.to_string()));
    }
}
