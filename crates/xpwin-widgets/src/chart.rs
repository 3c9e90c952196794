//! Hashrate history chart model
//!
//! A bounded rolling window of `(timestamp, rate)` samples per wallet,
//! persisted under `xpHashrate:<walletId>` so the curve survives page
//! reloads within a session. Samples serialize as `[ts, value]` pairs,
//! the same shape the history endpoint emits.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use xpwin_desktop::persistence::StateStore;
use xpwin_desktop::Vec2;

/// Default rolling window: 24 hours
pub const HISTORY_WINDOW_SECS: i64 = 24 * 3600;
/// Default sampling interval: 30 seconds
pub const SAMPLE_EVERY_SECS: i64 = 30;

/// Storage key for a wallet's sample history
pub fn history_key(wallet_id: &str) -> String {
    format!("xpHashrate:{}", wallet_id)
}

/// One sampled rate value
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(i64, f64)", into = "(i64, f64)")]
pub struct Sample {
    /// Unix timestamp in seconds
    pub ts: i64,
    /// Sampled rate
    pub value: f64,
}

impl Sample {
    /// Create a new sample
    #[inline]
    pub const fn new(ts: i64, value: f64) -> Self {
        Self { ts, value }
    }
}

impl From<(i64, f64)> for Sample {
    fn from((ts, value): (i64, f64)) -> Self {
        Self { ts, value }
    }
}

impl From<Sample> for (i64, f64) {
    fn from(sample: Sample) -> Self {
        (sample.ts, sample.value)
    }
}

/// Configuration for a chart's sampling window
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Seconds of history to retain
    pub window_secs: i64,
    /// Seconds between samples
    pub sample_every_secs: i64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            window_secs: HISTORY_WINDOW_SECS,
            sample_every_secs: SAMPLE_EVERY_SECS,
        }
    }
}

impl ChartOptions {
    /// Maximum number of retained samples
    pub fn capacity(&self) -> usize {
        (self.window_secs / self.sample_every_secs.max(1)).max(1) as usize
    }
}

/// Rolling hashrate history for one wallet
pub struct HashrateChart {
    wallet_id: String,
    options: ChartOptions,
    samples: VecDeque<Sample>,
}

impl HashrateChart {
    /// Create an empty chart for a wallet
    pub fn new(wallet_id: impl Into<String>, options: ChartOptions) -> Self {
        Self {
            wallet_id: wallet_id.into(),
            options,
            samples: VecDeque::with_capacity(options.capacity()),
        }
    }

    /// The wallet this chart tracks
    #[inline]
    pub fn wallet_id(&self) -> &str {
        &self.wallet_id
    }

    /// The chart's sampling options
    #[inline]
    pub fn options(&self) -> ChartOptions {
        self.options
    }

    /// Number of retained samples
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if no samples are retained
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate over the retained samples, oldest first
    pub fn samples(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// Append a sample, dropping the oldest once capacity is reached
    pub fn push(&mut self, value: f64, now_ts: i64) {
        self.samples.push_back(Sample::new(now_ts, value));
        while self.samples.len() > self.options.capacity() {
            self.samples.pop_front();
        }
    }

    /// Load this wallet's history from the store
    ///
    /// A corrupt or absent payload loads as an empty history.
    pub fn load(&mut self, store: &dyn StateStore) {
        let key = history_key(&self.wallet_id);
        self.load_key(store, &key);
    }

    /// Load history from an explicit storage key
    pub fn load_key(&mut self, store: &dyn StateStore, key: &str) {
        self.samples = store
            .get(key)
            .and_then(|raw| serde_json::from_str::<Vec<Sample>>(&raw).ok())
            .map(VecDeque::from)
            .unwrap_or_default();
        while self.samples.len() > self.options.capacity() {
            self.samples.pop_front();
        }
    }

    /// Save this wallet's history to the store
    pub fn save(&self, store: &mut dyn StateStore) {
        let points: Vec<Sample> = self.samples.iter().copied().collect();
        if let Ok(json) = serde_json::to_string(&points) {
            store.set(&history_key(&self.wallet_id), &json);
        }
    }

    /// Samples at or after the cutoff timestamp, oldest first
    pub fn points_since(&self, cutoff_ts: i64) -> Vec<Sample> {
        self.samples
            .iter()
            .copied()
            .filter(|s| s.ts >= cutoff_ts)
            .collect()
    }

    /// Map the samples after `cutoff_ts` onto a canvas of the given size
    ///
    /// X spans the sampled time range, y is inverted so larger rates sit
    /// higher. Degenerate ranges (single sample, flat curve) center on
    /// the collapsed axis.
    pub fn polyline(&self, cutoff_ts: i64, width: f64, height: f64) -> Vec<Vec2> {
        let points = self.points_since(cutoff_ts);
        if points.is_empty() {
            return Vec::new();
        }

        let t0 = points.first().map(|s| s.ts).unwrap_or(0) as f64;
        let t1 = points.last().map(|s| s.ts).unwrap_or(0) as f64;
        let span = t1 - t0;

        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for s in &points {
            lo = lo.min(s.value);
            hi = hi.max(s.value);
        }
        let range = hi - lo;

        points
            .iter()
            .map(|s| {
                let x = if span > 0.0 {
                    (s.ts as f64 - t0) / span * width
                } else {
                    width / 2.0
                };
                let y = if range > 0.0 {
                    height - (s.value - lo) / range * height
                } else {
                    height / 2.0
                };
                Vec2::new(x, y)
            })
            .collect()
    }
}
