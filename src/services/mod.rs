//! Service Layer
//!
//! Session wiring and the asynchronous side of the app.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  HubContext                  │
//! │  ┌────────────┐ ┌──────────────┐ ┌────────┐  │
//! │  │ HubConfig  │ │ SafeStorage  │ │Progress│  │
//! │  └────────────┘ └──────────────┘ └────────┘  │
//! │  ┌────────────────────────────────────────┐  │
//! │  │ Arc<RwLock<LanguageContext>>           │  │
//! │  └────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────┘
//!                        │
//!                        ▼ SwapTicket
//!          document_swap (tokio spawn_blocking, or spawn_local in the browser)
//! ```

mod document_swap;
mod hub;
#[cfg(not(target_arch = "wasm32"))]
mod runtime;

pub use document_swap::*;
pub use hub::*;
#[cfg(not(target_arch = "wasm32"))]
pub use runtime::*;
