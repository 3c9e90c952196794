//! State persistence for the overlay window
//!
//! The controller reads its saved state once at construction and writes
//! it back after every completed interaction or mode transition. The
//! store itself is injectable so the state machine can be tested against
//! an in-memory fake.

mod state;
mod store;

pub use state::{
    PersistedState, MAXIMIZED_KEY, MINIMIZED_KEY, RECT_KEY, Z_TOP_KEY,
};
pub use store::{MemoryStore, StateStore};
