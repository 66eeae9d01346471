//! About Page

use leptos::prelude::*;

use crate::state::blockchain::use_blockchain_context;

#[component]
pub fn AboutPage() -> impl IntoView {
    let target = use_blockchain_context().target();

    view! {
        <div class="app-container" style="display: flex; flex-direction: column; min-height: calc(100vh - 60px);">
            <div style="flex: 1; display: flex; justify-content: center; align-items: center; padding: 48px 24px;">
                <div class="about-container">
                    <div class="card">
                        <h1 class="card-title" style="text-align: center; margin-bottom: 32px; color: #ffffff; font-size: 32px; font-weight: 700;">
                            "About"
                        </h1>

                        <div style="color: #ffffff; line-height: 1.8; font-size: 16px;">
                            <p style="margin-bottom: 24px; color: #cccccc;">
                                "This page connects to the wallet extension injected into your browser. It asks for
                                access to your account, follows account changes made in the wallet, and checks
                                that the wallet is on the expected network."
                            </p>

                            <h2 style="color: #ffffff; font-size: 24px; margin-top: 32px; margin-bottom: 16px; font-weight: 600;">
                                "Network"
                            </h2>
                            <p style="margin-bottom: 24px; color: #cccccc;">
                                {format!(
                                    "Only {} (chain id {}) is supported. If your wallet is on another network you will be asked to switch.",
                                    target.name,
                                    target.chain_id,
                                )}
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
