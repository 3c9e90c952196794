//! WASM exports for the dashboard widgets
//!
//! Binds the widget models to the browser: canvas drawing for the
//! hashrate chart, `fetch` for the worker list, and interval timers for
//! the polling loop. The chart redraws on the next animation frame, so
//! pushes arriving inside one frame coalesce into a single draw.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, Request, RequestInit, RequestMode, Response,
};

use xpwin_desktop::{SessionStore, Vec2};

use crate::chart::{ChartOptions, HashrateChart};
use crate::error::WidgetError;
use crate::poll::{FAST_INTERVAL_MS, SLOW_INTERVAL_MS};
use crate::workers::{WorkerListPage, WorkerListState, WorkerQuery};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

// =============================================================================
// Hashrate chart
// =============================================================================

/// Hashrate chart bound to a canvas element
#[wasm_bindgen]
pub struct HashrateChartView {
    chart: HashrateChart,
    canvas: HtmlCanvasElement,
}

#[wasm_bindgen]
impl HashrateChartView {
    /// Bind a chart to the canvas matching `selector`
    #[wasm_bindgen(constructor)]
    pub fn new(
        selector: &str,
        wallet_id: &str,
        options_json: Option<String>,
    ) -> Result<HashrateChartView, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document object"))?;
        let canvas = document
            .query_selector(selector)?
            .ok_or_else(|| JsValue::from_str("chart canvas not found"))?
            .dyn_into::<HtmlCanvasElement>()?;

        // Malformed options fall back to the defaults
        let options: ChartOptions = options_json
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        let mut chart = HashrateChart::new(wallet_id, options);
        if let Ok(store) = SessionStore::open() {
            chart.load(&store);
        }

        let view = Self { chart, canvas };
        view.request_draw();
        Ok(view)
    }

    /// Append a rate sample, persist, and schedule a redraw
    #[wasm_bindgen]
    pub fn push(&mut self, rate_value: f64) {
        let now_ts = (js_sys::Date::now() / 1000.0) as i64;
        self.chart.push(rate_value, now_ts);
        if let Ok(mut store) = SessionStore::open() {
            self.chart.save(&mut store);
        }
        self.request_draw();
    }

    /// Reload history from the store, optionally from an explicit key
    #[wasm_bindgen]
    pub fn load(&mut self, key: Option<String>) {
        let Ok(store) = SessionStore::open() else {
            return;
        };
        match key {
            Some(key) => self.chart.load_key(&store, &key),
            None => self.chart.load(&store),
        }
        self.request_draw();
    }

    /// Number of retained samples
    #[wasm_bindgen]
    pub fn sample_count(&self) -> usize {
        self.chart.len()
    }

    /// Redraw synchronously
    #[wasm_bindgen]
    pub fn draw(&self) {
        let points = self.current_polyline();
        if let Err(err) = draw_polyline(&self.canvas, &points) {
            log(&format!("[xpwin] chart draw failed: {:?}", err));
        }
    }

    /// Schedule a redraw on the next animation frame
    fn request_draw(&self) {
        let canvas = self.canvas.clone();
        let points = self.current_polyline();
        let frame = Closure::once_into_js(move || {
            if let Err(err) = draw_polyline(&canvas, &points) {
                log(&format!("[xpwin] chart draw failed: {:?}", err));
            }
        });
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(frame.unchecked_ref());
        }
    }

    fn current_polyline(&self) -> Vec<Vec2> {
        let now_ts = (js_sys::Date::now() / 1000.0) as i64;
        let cutoff = now_ts - self.chart.options().window_secs;
        self.chart.polyline(
            cutoff,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        )
    }
}

/// Stroke a polyline onto the canvas
fn draw_polyline(canvas: &HtmlCanvasElement, points: &[Vec2]) -> Result<(), JsValue> {
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or_else(|| widget_err(WidgetError::Canvas("2d context unavailable".to_string())))?;

    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    if points.len() < 2 {
        return Ok(());
    }

    ctx.begin_path();
    ctx.set_line_width(1.5);
    ctx.set_stroke_style_str("#3fa9f5");
    ctx.move_to(points[0].x, points[0].y);
    for p in &points[1..] {
        ctx.line_to(p.x, p.y);
    }
    ctx.stroke();
    Ok(())
}

// =============================================================================
// Worker list
// =============================================================================

/// Fetch one page of a wallet's worker list
///
/// The payload is validated against the expected shape before being
/// returned, so a decode failure surfaces here instead of in the dialog.
#[wasm_bindgen]
pub async fn fetch_worker_page(
    base_url: String,
    wallet: String,
    limit: u32,
    offset: u32,
) -> Result<String, JsValue> {
    let query = WorkerQuery::new(limit, offset);
    let url = format!(
        "{}/api/wallet/{}/workers?{}",
        base_url.trim_end_matches('/'),
        js_sys::encode_uri_component(&wallet),
        query.query_string(),
    );

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(&url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window object"))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| widget_err(WidgetError::Fetch(format!("{:?}", err))))?
        .dyn_into()?;
    if !response.ok() {
        return Err(widget_err(WidgetError::Http {
            status: response.status(),
        }));
    }

    let text = JsFuture::from(response.text()?).await?;
    let body = text.as_string().unwrap_or_default();
    serde_json::from_str::<WorkerListPage>(&body)
        .map_err(|err| widget_err(WidgetError::Decode(err.to_string())))?;
    Ok(body)
}

/// Pagination state for the worker-list dialog
#[wasm_bindgen]
pub struct WorkerListModal {
    state: WorkerListState,
}

#[wasm_bindgen]
impl WorkerListModal {
    /// Create an empty modal with the given page size
    #[wasm_bindgen(constructor)]
    pub fn new(page_size: u32) -> Self {
        Self {
            state: WorkerListState::new(page_size),
        }
    }

    /// Apply a page previously returned by [`fetch_worker_page`]
    #[wasm_bindgen]
    pub fn apply_page(&mut self, json: &str) -> Result<(), JsValue> {
        let page: WorkerListPage = serde_json::from_str(json)
            .map_err(|err| widget_err(WidgetError::Decode(err.to_string())))?;
        self.state.apply(page);
        Ok(())
    }

    /// Advance to the next page; false when already on the last one
    #[wasm_bindgen]
    pub fn next(&mut self) -> bool {
        self.state.next()
    }

    /// Go back one page; false when already on the first one
    #[wasm_bindgen]
    pub fn prev(&mut self) -> bool {
        self.state.prev()
    }

    /// Page size for requests
    #[wasm_bindgen]
    pub fn limit(&self) -> u32 {
        self.state.query().limit
    }

    /// Offset for the current page
    #[wasm_bindgen]
    pub fn offset(&self) -> u32 {
        self.state.query().offset
    }

    /// Zero-based index of the current page
    #[wasm_bindgen]
    pub fn page(&self) -> u32 {
        self.state.page()
    }

    /// Number of pages implied by the last applied total
    #[wasm_bindgen]
    pub fn page_count(&self) -> u32 {
        self.state.page_count()
    }

    /// The current page's rows as JSON
    #[wasm_bindgen]
    pub fn entries_json(&self) -> String {
        serde_json::to_string(self.state.entries()).unwrap_or_else(|_| "[]".to_string())
    }
}

// =============================================================================
// Polling loop
// =============================================================================

/// Interval driver for the two dashboard fetch functions
#[wasm_bindgen]
pub struct Poller {
    fast_id: Option<i32>,
    slow_id: Option<i32>,
    fast_cb: Option<Closure<dyn FnMut()>>,
    slow_cb: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl Poller {
    /// Create an idle poller
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            fast_id: None,
            slow_id: None,
            fast_cb: None,
            slow_cb: None,
        }
    }

    /// Start both cadences; each fetch also fires once immediately
    #[wasm_bindgen]
    pub fn start(&mut self, fast: js_sys::Function, slow: js_sys::Function) -> Result<(), JsValue> {
        self.stop();
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window object"))?;

        let _ = fast.call0(&JsValue::NULL);
        let _ = slow.call0(&JsValue::NULL);

        let fast_cb = Closure::<dyn FnMut()>::new(move || {
            let _ = fast.call0(&JsValue::NULL);
        });
        self.fast_id = Some(window.set_interval_with_callback_and_timeout_and_arguments_0(
            fast_cb.as_ref().unchecked_ref(),
            FAST_INTERVAL_MS as i32,
        )?);
        self.fast_cb = Some(fast_cb);

        let slow_cb = Closure::<dyn FnMut()>::new(move || {
            let _ = slow.call0(&JsValue::NULL);
        });
        self.slow_id = Some(window.set_interval_with_callback_and_timeout_and_arguments_0(
            slow_cb.as_ref().unchecked_ref(),
            SLOW_INTERVAL_MS as i32,
        )?);
        self.slow_cb = Some(slow_cb);

        Ok(())
    }

    /// Stop both cadences
    #[wasm_bindgen]
    pub fn stop(&mut self) {
        if let Some(window) = web_sys::window() {
            if let Some(id) = self.fast_id.take() {
                window.clear_interval_with_handle(id);
            }
            if let Some(id) = self.slow_id.take() {
                window.clear_interval_with_handle(id);
            }
        }
        self.fast_cb = None;
        self.slow_cb = None;
    }

    /// Check if the poller is running
    #[wasm_bindgen]
    pub fn is_running(&self) -> bool {
        self.fast_id.is_some() || self.slow_id.is_some()
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Default for Poller {
    fn default() -> Self {
        Self::new()
    }
}

fn widget_err(err: WidgetError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
