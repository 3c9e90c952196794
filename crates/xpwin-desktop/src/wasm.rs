//! WASM exports for the overlay window
//!
//! This module binds the [`WindowController`] to an actual DOM surface.
//! The host page owns event capture: it attaches pointer/click listeners
//! to the surface, title bar and resize handles, and forwards the event
//! data through the methods below. After every event the wrapper mirrors
//! the controller's state into the element's inline style and toggles
//! `touch-action` on the document root and body per the suppression
//! counter.
//!
//! Control buttons are wired by the host too; a page without a minimize
//! or maximize button simply never calls the matching method. The eight
//! resize-handle child elements are created on demand if the surface
//! does not already contain them, tagged with `data-direction`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Storage};

use crate::error::{OverlayError, OverlayResult};
use crate::input::{InputResult, ResizeDirection};
use crate::math::Vec2;
use crate::persistence::{MemoryStore, StateStore};
use crate::viewport::Viewport;
use crate::window::WindowController;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Store backed by the browser's session storage
///
/// Write failures (quota, security) are logged and absorbed: the session
/// continues with whatever state is in memory.
pub struct SessionStore {
    storage: Storage,
}

impl SessionStore {
    /// Open the page's session storage
    pub fn open() -> OverlayResult<Self> {
        let storage = web_sys::window()
            .and_then(|w| w.session_storage().ok().flatten())
            .ok_or_else(|| OverlayError::Dom("sessionStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl StateStore for SessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if self.storage.set_item(key, value).is_err() {
            log(&format!("[xpwin] storage write failed for {}", key));
        }
    }
}

/// Overlay window bound to a DOM surface element
#[wasm_bindgen]
pub struct OverlayWindow {
    controller: WindowController,
    root: HtmlElement,
    /// Last touch-action state applied to the document
    suppressed: bool,
}

#[wasm_bindgen]
impl OverlayWindow {
    /// Bind a controller to the given surface element
    #[wasm_bindgen(constructor)]
    pub fn new(root: HtmlElement) -> Result<OverlayWindow, JsValue> {
        let store: Box<dyn StateStore> = match SessionStore::open() {
            Ok(store) => Box::new(store),
            Err(err) => {
                log(&format!("[xpwin] {}; layout will not survive reloads", err));
                Box::new(MemoryStore::new())
            }
        };
        ensure_resize_handles(&root)?;
        let viewport = current_viewport().map_err(js_err)?;
        let controller = WindowController::new(store, viewport);

        let mut overlay = Self {
            controller,
            root,
            suppressed: false,
        };
        overlay.sync_surface();
        Ok(overlay)
    }

    // =========================================================================
    // Pointer events (forwarded by the host page)
    // =========================================================================

    /// Capture-phase pointer-down anywhere on the surface: raise it
    #[wasm_bindgen]
    pub fn surface_pointer_down(&mut self) {
        self.controller.pointer_down_surface();
        self.sync_surface();
    }

    /// Pointer-down on the title bar (outside the button cluster)
    #[wasm_bindgen]
    pub fn title_pointer_down(&mut self, x: f64, y: f64, pointer_id: i32, button: i16) -> String {
        let result = self
            .controller
            .press_title_bar(Vec2::new(x, y), pointer_id, button == 0);
        self.sync_surface();
        to_json(&result)
    }

    /// Pointer-down on a resize handle, identified by its direction token
    #[wasm_bindgen]
    pub fn resize_pointer_down(
        &mut self,
        direction: &str,
        x: f64,
        y: f64,
        pointer_id: i32,
        button: i16,
    ) -> String {
        let result = match ResizeDirection::from_token(direction) {
            Ok(direction) => {
                self.controller
                    .press_resize_handle(direction, Vec2::new(x, y), pointer_id, button == 0)
            }
            Err(err) => {
                log(&format!("[xpwin] {}", err));
                InputResult::Unhandled
            }
        };
        self.sync_surface();
        to_json(&result)
    }

    /// Pointer movement
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f64, y: f64, pointer_id: i32) -> String {
        let result = self.controller.pointer_move(Vec2::new(x, y), pointer_id);
        self.sync_surface();
        to_json(&result)
    }

    /// Pointer release
    #[wasm_bindgen]
    pub fn pointer_up(&mut self, pointer_id: i32) -> String {
        let result = self.controller.pointer_up(pointer_id);
        self.sync_surface();
        to_json(&result)
    }

    /// Pointer cancellation, handled like a release
    #[wasm_bindgen]
    pub fn pointer_cancel(&mut self, pointer_id: i32) -> String {
        let result = self.controller.pointer_cancel(pointer_id);
        self.sync_surface();
        to_json(&result)
    }

    /// Check if the host should preventDefault touch/gesture events
    #[wasm_bindgen]
    pub fn gestures_suppressed(&self) -> bool {
        self.controller.gestures_suppressed()
    }

    // =========================================================================
    // Chrome
    // =========================================================================

    /// Minimize button
    #[wasm_bindgen]
    pub fn minimize(&mut self) {
        self.controller.minimize_clicked();
        self.sync_surface();
    }

    /// Maximize button
    #[wasm_bindgen]
    pub fn maximize(&mut self) {
        self.controller.maximize_clicked();
        self.sync_surface();
    }

    /// Restore to the last normal rectangle
    #[wasm_bindgen]
    pub fn restore(&mut self) {
        self.controller.restore();
        self.sync_surface();
    }

    /// Double-click on the title bar
    #[wasm_bindgen]
    pub fn title_double_click(&mut self) {
        self.controller.title_bar_double_click();
        self.sync_surface();
    }

    /// Close button: hides the surface, keeping the saved layout
    #[wasm_bindgen]
    pub fn close(&mut self) {
        self.controller.close();
        self.sync_surface();
    }

    /// Show the surface again
    #[wasm_bindgen]
    pub fn show(&mut self) {
        self.controller.show();
        self.sync_surface();
    }

    /// Viewport resize or orientation change
    #[wasm_bindgen]
    pub fn viewport_resized(&mut self) {
        if let Ok(viewport) = current_viewport() {
            self.controller.viewport_resized(viewport);
            self.sync_surface();
        }
    }

    /// Current window state as JSON
    #[wasm_bindgen]
    pub fn state_json(&self) -> String {
        serde_json::to_string(&serde_json::json!({
            "mode": self.controller.mode(),
            "rect": self.controller.applied_rect(),
            "zIndex": self.controller.z_index(),
            "visible": self.controller.is_visible(),
            "interacting": self.controller.is_interacting(),
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }

    // =========================================================================
    // Surface mirroring
    // =========================================================================

    /// Mirror controller state into the surface element's style
    fn sync_surface(&mut self) {
        let rect = self.controller.applied_rect();
        let style = self.root.style();
        let _ = style.set_property("left", &format!("{}px", rect.left));
        let _ = style.set_property("top", &format!("{}px", rect.top));
        let _ = style.set_property("width", &format!("{}px", rect.width));
        let _ = style.set_property("height", &format!("{}px", rect.height));
        let _ = style.set_property("z-index", &self.controller.z_index().to_string());
        let _ = style.set_property(
            "display",
            if self.controller.is_visible() { "block" } else { "none" },
        );
        self.sync_gestures();
    }

    /// Apply the suppression counter's state to the host document
    fn sync_gestures(&mut self) {
        let active = self.controller.gestures_suppressed();
        if active == self.suppressed {
            return;
        }
        self.suppressed = active;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let mut targets = Vec::new();
        if let Some(element) = document.document_element() {
            if let Ok(html) = element.dyn_into::<HtmlElement>() {
                targets.push(html);
            }
        }
        if let Some(body) = document.body() {
            targets.push(body);
        }
        for target in targets {
            if active {
                let _ = target.style().set_property("touch-action", "none");
            } else {
                let _ = target.style().remove_property("touch-action");
            }
        }
    }
}

/// Read the current viewport dimensions
fn current_viewport() -> OverlayResult<Viewport> {
    let window =
        web_sys::window().ok_or_else(|| OverlayError::Dom("no window object".to_string()))?;
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .ok_or_else(|| OverlayError::Dom("viewport width unavailable".to_string()))?;
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .ok_or_else(|| OverlayError::Dom("viewport height unavailable".to_string()))?;
    Ok(Viewport::new(width, height))
}

/// Create any of the eight resize handles the surface is missing
fn ensure_resize_handles(root: &HtmlElement) -> Result<(), JsValue> {
    let document = root
        .owner_document()
        .ok_or_else(|| JsValue::from_str("surface element is detached"))?;
    for direction in ResizeDirection::ALL {
        let selector = format!("[data-direction=\"{}\"]", direction.token());
        if root.query_selector(&selector)?.is_some() {
            continue;
        }
        let handle = document.create_element("div")?;
        handle.set_class_name("xpwin-resize");
        handle.set_attribute("data-direction", direction.token())?;
        root.append_child(&handle)?;
    }
    Ok(())
}

fn to_json(result: &InputResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
}

fn js_err(err: OverlayError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
