//! Persisted window state codec
//!
//! Storage layout (all values are strings):
//! - `xpwin:rect`: JSON-encoded rectangle `{left, top, width, height}`
//! - `xpwin:isMax`: `"1"` / `"0"`
//! - `xpwin:isMin`: `"1"` / `"0"`
//! - `xpwin:zTop`: decimal stacking counter

use crate::math::Rect;
use crate::window::Mode;
use super::store::StateStore;

/// Storage key for the normal rectangle
pub const RECT_KEY: &str = "xpwin:rect";
/// Storage key for the maximized flag
pub const MAXIMIZED_KEY: &str = "xpwin:isMax";
/// Storage key for the minimized flag
pub const MINIMIZED_KEY: &str = "xpwin:isMin";
/// Storage key for the stacking counter
pub const Z_TOP_KEY: &str = "xpwin:zTop";

/// Window state reconstructed from the store at startup
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PersistedState {
    /// Last saved normal rectangle, if it decoded
    pub rect: Option<Rect>,
    /// Saved display mode
    pub mode: Mode,
}

impl PersistedState {
    /// Read saved state, treating malformed or absent values as unset
    pub fn load(store: &dyn StateStore) -> Self {
        let rect = store
            .get(RECT_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok());
        let mode = Mode::from_flags(flag(store, MAXIMIZED_KEY), flag(store, MINIMIZED_KEY));
        Self { rect, mode }
    }

    /// Write the normal rectangle and mode flags back to the store
    pub fn save(store: &mut dyn StateStore, rect: &Rect, mode: Mode) {
        if let Ok(json) = serde_json::to_string(rect) {
            store.set(RECT_KEY, &json);
        }
        let (is_max, is_min) = mode.flags();
        store.set(MAXIMIZED_KEY, flag_str(is_max));
        store.set(MINIMIZED_KEY, flag_str(is_min));
    }

    /// Read the stacking counter, if present and parseable
    pub fn load_z_top(store: &dyn StateStore) -> Option<u64> {
        store.get(Z_TOP_KEY).and_then(|raw| raw.trim().parse().ok())
    }

    /// Write the stacking counter
    pub fn save_z_top(store: &mut dyn StateStore, z_top: u64) {
        store.set(Z_TOP_KEY, &z_top.to_string());
    }
}

fn flag(store: &dyn StateStore, key: &str) -> bool {
    store.get(key).as_deref() == Some("1")
}

fn flag_str(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}
