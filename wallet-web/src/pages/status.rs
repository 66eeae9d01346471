//! Wallet Status Page - account, network and balance from the blockchain context

use leptos::prelude::*;
use shared::utils::truncate_address;

use crate::state::blockchain::use_blockchain_context;
use crate::utils::format::{format_chain, format_wei_to_eth};
use crate::utils::latest::LatestRequest;

#[component]
pub fn StatusPage() -> impl IntoView {
    let ctx = use_blockchain_context();
    let target = ctx.target();
    let (balance, set_balance) = signal(None::<String>);
    let balance_requests = LatestRequest::new();

    // Refetch whenever the account or client changes. Only the newest fetch
    // may write, so a slow reply for a previous account is dropped.
    Effect::new(move || {
        let ticket = balance_requests.begin();
        set_balance.set(None);

        let (Some(client), Some(account)) = (ctx.provider(), ctx.current_account()) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = client.balance(&account).await;
            if !ticket.is_latest() {
                log::debug!("Dropping stale balance for {}", account);
                return;
            }
            match result {
                Ok(wei) => set_balance.set(Some(format_wei_to_eth(wei, 4))),
                Err(e) => log::warn!("eth_getBalance failed: {}", e),
            }
        });
    });

    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px); background: #000000;">
            <div class="card" style="width: 100%; max-width: 500px; padding: var(--spacing-xl); background: #000000; border: 1px solid #333333;">
                <h1 class="card-title" style="text-align: center; margin-bottom: var(--spacing-md);">
                    "Wallet Status"
                </h1>

                {move || {
                    let target = target.clone();
                    if !ctx.has_wallet() {
                        return view! {
                            <p style="text-align: center; color: var(--text-secondary);">
                                "No browser wallet detected. Install MetaMask to continue."
                            </p>
                        }.into_any();
                    }

                    let account = ctx.current_account();
                    let chain = ctx.chain_id();
                    let status = if account.is_some() { "Connected" } else { "Waiting for approval" };
                    let account_text = account
                        .as_deref()
                        .map(truncate_address)
                        .unwrap_or_else(|| "-".to_string());
                    let chain_text = chain
                        .as_deref()
                        .map(|id| format_chain(id, &target))
                        .unwrap_or_else(|| "-".to_string());
                    let wrong_network = chain.is_none();

                    view! {
                        <div style="background: var(--bg-card); padding: var(--spacing-lg); border-radius: var(--border-radius); border: 1px solid var(--border-color);">
                            <p style="color: var(--text-secondary); margin-bottom: var(--spacing-sm);">"Status"</p>
                            <p style="color: var(--price-up); font-weight: bold; margin-bottom: var(--spacing-lg);">{status}</p>

                            <p style="color: var(--text-secondary); margin-bottom: var(--spacing-sm);">"Account"</p>
                            <p style="font-family: monospace; color: var(--text-primary); margin-bottom: var(--spacing-lg);" title=account.clone().unwrap_or_default()>
                                {account_text}
                            </p>

                            <p style="color: var(--text-secondary); margin-bottom: var(--spacing-sm);">"Network"</p>
                            <p style="font-family: monospace; color: var(--text-primary); margin-bottom: var(--spacing-lg);">
                                {chain_text}
                            </p>

                            <p style="color: var(--text-secondary); margin-bottom: var(--spacing-sm);">"Balance"</p>
                            <p style="font-family: monospace; color: var(--text-primary);">
                                {move || balance.get().map(|b| format!("{} ETH", b)).unwrap_or_else(|| "-".to_string())}
                            </p>

                            <Show when=move || wrong_network>
                                <p style="color: var(--text-secondary); margin-top: var(--spacing-lg); font-size: 0.9em;">
                                    {format!("Switch your wallet to {} and reload this page.", target.name)}
                                </p>
                            </Show>
                        </div>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
