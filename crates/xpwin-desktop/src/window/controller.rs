//! Overlay window controller
//!
//! A state machine bound to one on-screen surface. Every transition is a
//! total function of (current state, input event); the rendering layer
//! mirrors `applied_rect`/`z_index`/`is_visible` into the substrate after
//! each event. The store is injected so the machine runs unchanged
//! against session storage in the browser and an in-memory fake in tests.
//!
//! ## Key invariants
//!
//! - At most one interaction session exists at a time, and only events
//!   from the pointer that opened it are applied.
//! - The normal rectangle is only overwritten when an interaction
//!   completes in normal mode or when leaving normal mode by a user
//!   action; replaying persisted state never clobbers it.
//! - Maximized and minimized are mutually exclusive by construction.

use crate::input::{
    apply_resize, GestureSuppression, InputResult, InteractionSession, PointerId, ResizeDirection,
};
use crate::math::{Rect, Vec2};
use crate::persistence::{PersistedState, StateStore};
use crate::viewport::Viewport;
use super::Mode;

/// Stacking index used when the store carries no counter yet
const Z_TOP_BASE: u64 = 1000;

/// State machine for the overlay window surface
pub struct WindowController {
    viewport: Viewport,
    mode: Mode,
    /// Last known rectangle in normal mode
    normal_rect: Rect,
    /// Rectangle currently applied to the surface
    applied: Rect,
    visible: bool,
    z_index: u64,
    session: Option<InteractionSession>,
    suppress: GestureSuppression,
    store: Box<dyn StateStore>,
}

impl WindowController {
    /// Create a controller, reconstructing saved state from the store
    ///
    /// Malformed or absent saved geometry falls back to the computed
    /// initial placement. A saved maximized/minimized mode is replayed
    /// without overwriting the rectangle that was just loaded.
    pub fn new(store: Box<dyn StateStore>, viewport: Viewport) -> Self {
        let persisted = PersistedState::load(store.as_ref());
        let z_index = PersistedState::load_z_top(store.as_ref()).unwrap_or(Z_TOP_BASE);
        let normal_rect = persisted.rect.unwrap_or_else(|| viewport.initial_rect());

        let mut controller = Self {
            viewport,
            mode: Mode::Normal,
            normal_rect,
            applied: viewport.floor_rect(normal_rect),
            visible: true,
            z_index,
            session: None,
            suppress: GestureSuppression::new(),
            store,
        };
        match persisted.mode {
            Mode::Maximized => controller.enter_maximized(true),
            Mode::Minimized => controller.enter_minimized(true),
            Mode::Normal => {}
        }
        controller
    }

    // =========================================================================
    // Surface state
    // =========================================================================

    /// Current display mode
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Rectangle currently applied to the surface
    #[inline]
    pub fn applied_rect(&self) -> Rect {
        self.applied
    }

    /// Last known normal-mode rectangle
    #[inline]
    pub fn normal_rect(&self) -> Rect {
        self.normal_rect
    }

    /// Current stacking index
    #[inline]
    pub fn z_index(&self) -> u64 {
        self.z_index
    }

    /// Check if the surface is shown
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Check if a drag or resize is in progress
    #[inline]
    pub fn is_interacting(&self) -> bool {
        self.session.is_some()
    }

    /// Check if native touch gestures should currently be suppressed
    #[inline]
    pub fn gestures_suppressed(&self) -> bool {
        self.suppress.is_active()
    }

    /// Current viewport dimensions
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // =========================================================================
    // Z-order
    // =========================================================================

    /// Promote the surface above every other surface sharing the counter
    ///
    /// Wired to pointer-down at the outermost capture phase so any press
    /// on the window raises it before child handlers run. The counter is
    /// persisted on each bump to keep ordering stable across reloads.
    pub fn pointer_down_surface(&mut self) -> u64 {
        self.z_index += 1;
        PersistedState::save_z_top(self.store.as_mut(), self.z_index);
        self.z_index
    }

    // =========================================================================
    // Drag
    // =========================================================================

    /// Primary pointer press on the title bar, outside the buttons
    pub fn press_title_bar(&mut self, pos: Vec2, pointer: PointerId, primary: bool) -> InputResult {
        if !primary || self.session.is_some() {
            return InputResult::Unhandled;
        }
        if self.mode.is_maximized() {
            self.pop_out_under_pointer(pos);
        }
        self.session = Some(InteractionSession::Drag {
            start: pos,
            origin: self.applied.origin(),
            pointer,
        });
        self.suppress.acquire();
        InputResult::Handled
    }

    /// Leave maximized mode so the restored window sits under the cursor
    ///
    /// The pointer's fraction of the viewport equals its fraction within
    /// the maximized window, so placing the restored rectangle at that
    /// same internal fraction makes the window pop out under the pointer
    /// instead of jumping.
    fn pop_out_under_pointer(&mut self, pos: Vec2) {
        let fx = pos.x / self.viewport.width;
        let fy = (pos.y / self.viewport.height).clamp(0.0, 1.0);
        let restored = self.viewport.floor_rect(self.normal_rect);
        let origin = Vec2::new(pos.x - fx * restored.width, pos.y - fy * restored.height);
        self.mode = Mode::Normal;
        self.normal_rect = restored.at(origin);
        self.applied = self.normal_rect;
        self.persist();
    }

    // =========================================================================
    // Resize
    // =========================================================================

    /// Primary pointer press on a resize handle; inert outside normal mode
    pub fn press_resize_handle(
        &mut self,
        direction: ResizeDirection,
        pos: Vec2,
        pointer: PointerId,
        primary: bool,
    ) -> InputResult {
        if !primary || self.session.is_some() || !self.mode.is_normal() {
            return InputResult::Unhandled;
        }
        self.session = Some(InteractionSession::Resize {
            start: pos,
            origin: self.applied,
            direction,
            pointer,
        });
        self.suppress.acquire();
        InputResult::Handled
    }

    // =========================================================================
    // Pointer tracking
    // =========================================================================

    /// Pointer movement; only the session's own pointer drives geometry
    pub fn pointer_move(&mut self, pos: Vec2, pointer: PointerId) -> InputResult {
        let Some(session) = self.session else {
            return InputResult::Unhandled;
        };
        if session.pointer() != pointer {
            return InputResult::Unhandled;
        }
        match session {
            InteractionSession::Drag { start, origin, .. } => {
                // Applied verbatim: the window may leave the viewport
                self.applied = self.applied.at(origin + (pos - start));
            }
            InteractionSession::Resize {
                start,
                origin,
                direction,
                ..
            } => {
                self.applied = apply_resize(direction, origin, pos - start, self.viewport.min_size());
            }
        }
        InputResult::Handled
    }

    /// Pointer release; completes the session and persists the result
    pub fn pointer_up(&mut self, pointer: PointerId) -> InputResult {
        match self.session {
            Some(session) if session.pointer() == pointer => {}
            _ => return InputResult::Unhandled,
        }
        self.session = None;
        if self.mode.is_normal() {
            self.normal_rect = self.applied;
        }
        self.persist();
        self.suppress.release();
        InputResult::Handled
    }

    /// Pointer cancellation is handled exactly like a release
    pub fn pointer_cancel(&mut self, pointer: PointerId) -> InputResult {
        self.pointer_up(pointer)
    }

    // =========================================================================
    // Mode transitions
    // =========================================================================

    /// Minimize button: toggles minimized ⇄ normal, inert while maximized
    pub fn minimize_clicked(&mut self) {
        match self.mode {
            Mode::Normal => self.enter_minimized(false),
            Mode::Minimized => self.restore(),
            Mode::Maximized => {}
        }
    }

    /// Maximize button: toggles maximized ⇄ normal, inert while minimized
    pub fn maximize_clicked(&mut self) {
        match self.mode {
            Mode::Normal => self.enter_maximized(false),
            Mode::Maximized => self.restore(),
            Mode::Minimized => {}
        }
    }

    /// Double-click on the title bar toggles maximized ⇄ normal only
    pub fn title_bar_double_click(&mut self) {
        match self.mode {
            Mode::Maximized => self.restore(),
            _ => self.enter_maximized(false),
        }
    }

    /// Re-apply the last normal rectangle; no-op when already normal
    pub fn restore(&mut self) {
        if self.mode.is_normal() {
            return;
        }
        self.mode = Mode::Normal;
        self.applied = self.viewport.floor_rect(self.normal_rect);
        self.persist();
    }

    fn enter_maximized(&mut self, from_restore: bool) {
        if self.mode.is_normal() && !from_restore {
            self.normal_rect = self.applied;
        }
        self.mode = Mode::Maximized;
        self.applied = self.viewport.floor_rect(self.viewport.maximized_rect());
        self.persist();
    }

    fn enter_minimized(&mut self, from_restore: bool) {
        if self.mode.is_normal() && !from_restore {
            self.normal_rect = self.applied;
        }
        self.mode = Mode::Minimized;
        // The dock has a fixed size; the responsive floors do not apply
        self.applied = self.viewport.dock_rect();
        self.persist();
    }

    // =========================================================================
    // Viewport and visibility
    // =========================================================================

    /// Viewport resize: re-fill when maximized, re-anchor the dock when
    /// minimized. Normal-mode windows are left alone and may end up
    /// partially off-screen, matching the drag policy.
    pub fn viewport_resized(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        match self.mode {
            Mode::Maximized => self.applied = viewport.floor_rect(viewport.maximized_rect()),
            Mode::Minimized => self.applied = viewport.dock_rect(),
            Mode::Normal => {}
        }
    }

    /// Hide the surface; persisted geometry is untouched
    pub fn close(&mut self) {
        if self.session.take().is_some() {
            self.suppress.release();
        }
        self.visible = false;
    }

    /// Show the surface again
    pub fn show(&mut self) {
        self.visible = true;
    }

    fn persist(&mut self) {
        PersistedState::save(self.store.as_mut(), &self.normal_rect, self.mode);
    }
}
