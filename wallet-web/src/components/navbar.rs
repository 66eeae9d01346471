//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use shared::utils::truncate_address;

use crate::state::blockchain::use_blockchain_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_blockchain_context();

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">"Wallet"</span>
                </A>
                <A href="/about" attr:class="nav-link-clean">"About"</A>
                <span class="nav-account" style="font-family: monospace;">
                    {move || ctx.current_account().as_deref().map(truncate_address).unwrap_or_default()}
                </span>
            </div>
        </nav>
    }
}
