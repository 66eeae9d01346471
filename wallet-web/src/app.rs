//! Wallet Web App - Leptos Frontend
//!
//! The blockchain context wraps the router so every page can read the
//! connected account and network.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::Navbar;
use crate::pages::{AboutPage, StatusPage};
use crate::state::blockchain::BlockchainContextProvider;

#[component]
pub fn App() -> impl IntoView {
    Effect::new(move || {
        log::debug!("App mounted");
        crate::hide_loading_screen();
    });

    view! {
        <BlockchainContextProvider>
            <Router>
                <div class="app-container">
                    <Navbar/>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=StatusPage/>
                        <Route path=path!("/about") view=AboutPage/>
                    </Routes>
                </div>
            </Router>
        </BlockchainContextProvider>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="color: #ffffff; margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
                <p style="color: #cccccc; margin-bottom: 24px;">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Go to Home"
                    </span>
                </A>
            </div>
        </div>
    }
}
