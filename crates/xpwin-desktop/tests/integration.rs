//! Integration tests for the overlay window controller
//!
//! These tests drive full workflows through the public API:
//! - Drag, resize, minimize, maximize, restore, close
//! - Layout persistence across simulated page reloads
//! - Multi-touch safety of interaction sessions

use std::cell::RefCell;
use std::rc::Rc;

use xpwin_desktop::{
    MemoryStore, Mode, Rect, ResizeDirection, StateStore, Vec2, Viewport, WindowController,
};

/// Store handle shared between "reloads" of the controller
#[derive(Clone, Default)]
struct SharedStore(Rc<RefCell<MemoryStore>>);

impl StateStore for SharedStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.0.borrow_mut().set(key, value);
    }
}

fn assert_rect_eq(a: Rect, b: Rect) {
    assert!((a.left - b.left).abs() < 0.001, "left {} != {}", a.left, b.left);
    assert!((a.top - b.top).abs() < 0.001, "top {} != {}", a.top, b.top);
    assert!((a.width - b.width).abs() < 0.001, "width {} != {}", a.width, b.width);
    assert!((a.height - b.height).abs() < 0.001, "height {} != {}", a.height, b.height);
}

// =============================================================================
// Full lifecycle
// =============================================================================

#[test]
fn test_window_lifecycle_full() {
    let viewport = Viewport::new(1280.0, 900.0);
    let mut c = WindowController::new(Box::new(SharedStore::default()), viewport);
    assert_eq!(c.mode(), Mode::Normal);

    // Drag by the title bar
    let before = c.applied_rect();
    c.press_title_bar(Vec2::new(400.0, 80.0), 1, true);
    c.pointer_move(Vec2::new(460.0, 140.0), 1);
    c.pointer_up(1);
    assert_rect_eq(
        c.applied_rect(),
        Rect::new(before.left + 60.0, before.top + 60.0, before.width, before.height),
    );

    // Grow from the south-east corner
    let before = c.applied_rect();
    c.press_resize_handle(ResizeDirection::SE, Vec2::new(900.0, 600.0), 1, true);
    c.pointer_move(Vec2::new(950.0, 640.0), 1);
    c.pointer_up(1);
    assert!((c.applied_rect().width - (before.width + 50.0)).abs() < 0.001);
    assert!((c.applied_rect().height - (before.height + 40.0)).abs() < 0.001);

    // Minimize and restore
    let normal = c.applied_rect();
    c.minimize_clicked();
    assert_eq!(c.mode(), Mode::Minimized);
    assert_rect_eq(c.applied_rect(), viewport.dock_rect());
    c.minimize_clicked();
    assert_eq!(c.mode(), Mode::Normal);
    assert_rect_eq(c.applied_rect(), normal);

    // Maximize and restore
    c.maximize_clicked();
    assert_eq!(c.mode(), Mode::Maximized);
    assert_rect_eq(c.applied_rect(), Rect::new(0.0, 0.0, 1280.0, 900.0));
    c.maximize_clicked();
    assert_eq!(c.mode(), Mode::Normal);
    assert_rect_eq(c.applied_rect(), normal);

    // Close hides but remembers
    c.close();
    assert!(!c.is_visible());
    c.show();
    assert_rect_eq(c.applied_rect(), normal);
}

// =============================================================================
// Persistence across reloads
// =============================================================================

#[test]
fn test_layout_survives_reload() {
    let viewport = Viewport::new(540.0, 700.0);
    let store = SharedStore::default();

    let mut c = WindowController::new(Box::new(store.clone()), viewport);
    c.press_title_bar(Vec2::new(300.0, 80.0), 1, true);
    c.pointer_move(Vec2::new(330.0, 95.0), 1);
    c.pointer_up(1);
    let saved = c.normal_rect();
    c.maximize_clicked();
    c.pointer_down_surface();
    let z = c.z_index();

    // Page reload: fresh controller over the same session store
    let mut again = WindowController::new(Box::new(store), viewport);
    assert_eq!(again.mode(), Mode::Maximized);
    assert_rect_eq(again.applied_rect(), viewport.maximized_rect());
    assert_eq!(again.z_index(), z);

    again.restore();
    assert_rect_eq(again.applied_rect(), saved);
}

#[test]
fn test_reload_under_changed_viewport_widens_window() {
    let store = SharedStore::default();

    // Saved under a roomy viewport
    let mut c = WindowController::new(Box::new(store.clone()), Viewport::new(540.0, 700.0));
    c.press_title_bar(Vec2::new(300.0, 80.0), 1, true);
    c.pointer_up(1);
    let saved = c.normal_rect();

    // Reloaded under a much larger one, where the responsive floors grow
    let big = Viewport::new(2000.0, 1400.0);
    let again = WindowController::new(Box::new(store), big);
    let r = again.applied_rect();
    assert!((r.left - saved.left).abs() < 0.001);
    assert!((r.top - saved.top).abs() < 0.001);
    assert!(r.width >= big.min_width());
    assert!(r.height >= big.min_height());
}

// =============================================================================
// Multi-touch safety
// =============================================================================

#[test]
fn test_second_touch_point_cannot_steal_resize() {
    let mut c = WindowController::new(
        Box::new(SharedStore::default()),
        Viewport::new(1280.0, 900.0),
    );

    c.press_resize_handle(ResizeDirection::E, Vec2::new(900.0, 400.0), 11, true);
    let mid = {
        c.pointer_move(Vec2::new(940.0, 400.0), 11);
        c.applied_rect()
    };

    // Second finger lands and wanders; geometry must not move
    assert!(!c.press_title_bar(Vec2::new(500.0, 80.0), 22, true).is_handled());
    assert!(!c.pointer_move(Vec2::new(100.0, 100.0), 22).is_handled());
    assert_rect_eq(c.applied_rect(), mid);

    // Releasing the second finger does not end the session
    assert!(!c.pointer_up(22).is_handled());
    assert!(c.is_interacting());

    c.pointer_up(11);
    assert!(!c.is_interacting());
    assert_rect_eq(c.normal_rect(), mid);
}
