//! Tokio Runtime Bridge
//!
//! Reducers are synchronous; the only async work is loading translation
//! documents. Hosts without their own executor (the CLI, tests) drive that
//! work on one lazily created runtime. Browser builds have no tokio and
//! spawn loads with `wasm_bindgen_futures::spawn_local` instead.
//!
//! ```text
//! HubContext::switch_language
//!       │
//!       ▼
//! spawn_named_in_tokio("language-switch", ...)
//!       │
//!       ▼
//! spawn_blocking(decode) ──► commit(ticket)
//! ```

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create tokio runtime"))
}

/// Spawn a named task; start and completion are logged at debug level
pub fn spawn_named_in_tokio<F>(name: &'static str, future: F) -> JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::debug!(task = name, "Spawning tokio task");
    get_runtime().spawn(async move {
        future.await;
        tracing::debug!(task = name, "Tokio task completed");
    })
}

/// Block the current thread on a future (startup only)
pub fn block_on<F, T>(future: F) -> T
where
    F: Future<Output = T>,
{
    get_runtime().block_on(future)
}
