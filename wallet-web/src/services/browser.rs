//! Browser notifier and task spawner

use futures::future::LocalFutureObj;
use futures::task::{LocalSpawn, SpawnError};
use lib_wallet::Notifier;

/// Shows notices with `window.alert`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn notify(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window for alert: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::error!("window.alert failed: {:?}", e);
        }
    }
}

/// Runs connector tasks on the browser's microtask queue.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSpawner;

impl LocalSpawn for BrowserSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}
