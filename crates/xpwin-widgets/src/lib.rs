//! Dashboard widgets for the XP Pool overlay
//!
//! Three independent collaborators of the overlay window, sharing only
//! its session-scoped store namespace:
//!
//! - [`chart`]: rolling hashrate history per wallet, persisted under
//!   `xpHashrate:<walletId>` and drawn as a canvas polyline
//! - [`workers`]: paginated worker-list fetching for the modal dialog
//! - [`poll`]: the fixed 15 s / 60 s cadence driving the data fetches
//!
//! Each model is pure Rust; the `wasm` feature adds the browser-facing
//! bindings (canvas drawing, fetch, interval timers).

pub mod chart;
pub mod error;
pub mod poll;
pub mod workers;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use chart::{history_key, ChartOptions, HashrateChart, Sample};
pub use error::{WidgetError, WidgetResult};
pub use poll::{PollDue, PollSchedule, FAST_INTERVAL_MS, SLOW_INTERVAL_MS};
pub use workers::{
    WorkerEntry, WorkerListPage, WorkerListState, WorkerQuery, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
