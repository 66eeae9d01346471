//! Blockchain context: the wallet connector exposed to descendant components

use std::rc::Rc;

use leptos::prelude::*;
use lib_wallet::{
    BlockchainClient, ProviderState, WalletConfig, WalletConnectionProvider, WalletTransport,
};
use shared::dto::network::TargetNetwork;

use crate::services::{BrowserAlert, BrowserSpawner, EthereumTransport};

/// Read-only view of the connector state.
///
/// Getters track the underlying signal, so calling them inside a reactive
/// closure re-renders on change.
#[derive(Clone, Copy)]
pub struct BlockchainContext {
    state: ReadSignal<ProviderState, LocalStorage>,
    target: StoredValue<TargetNetwork>,
}

impl BlockchainContext {
    pub fn current_account(&self) -> Option<String> {
        self.state.with(|state| state.current_account.clone())
    }

    pub fn provider(&self) -> Option<BlockchainClient> {
        self.state.with(|state| state.provider.clone())
    }

    pub fn chain_id(&self) -> Option<String> {
        self.state.with(|state| state.chain_id.clone())
    }

    pub fn is_connected(&self) -> bool {
        self.state.with(ProviderState::is_connected)
    }

    pub fn has_wallet(&self) -> bool {
        self.state.with(ProviderState::has_wallet)
    }

    pub fn target(&self) -> TargetNetwork {
        self.target.get_value()
    }
}

/// Mounts the wallet connector and provides [`BlockchainContext`] to `children`.
///
/// The connector, its account listener and the signal bridge live until this
/// component's owner is cleaned up.
#[component]
pub fn BlockchainContextProvider(children: Children) -> impl IntoView {
    let config = WalletConfig::default();
    if let Err(e) = config.validate() {
        log::error!("Invalid wallet configuration: {}", e);
    }

    let transport = match EthereumTransport::detect() {
        Ok(transport) => Some(Rc::new(transport) as Rc<dyn WalletTransport>),
        Err(e) => {
            log::warn!("{}, wallet features disabled", e.user_message());
            None
        }
    };

    let connector = WalletConnectionProvider::new(transport, Rc::new(BrowserAlert), config);
    let target = connector.config().target.clone();

    let state = RwSignal::new_local(connector.state().snapshot());
    let bridge = connector.state().watch(move |snapshot| state.set(snapshot.clone()));

    match connector.mount(&BrowserSpawner) {
        Ok(mounted) => {
            let held = StoredValue::new_local(Some((connector, mounted, bridge)));
            on_cleanup(move || {
                held.update_value(|held| {
                    held.take();
                });
            });
        }
        Err(e) => log::error!("Failed to start wallet connector: {}", e),
    }

    provide_context(BlockchainContext {
        state: state.read_only(),
        target: StoredValue::new(target),
    });

    children()
}

pub fn use_blockchain_context() -> BlockchainContext {
    expect_context::<BlockchainContext>()
}
