//! Integration tests for the dashboard widgets
//!
//! These tests drive the widget models together the way the dashboard
//! uses them: the polling cadence feeding chart samples, persistence
//! through the shared store namespace, and worker-list paging.

use xpwin_desktop::{MemoryStore, StateStore};
use xpwin_widgets::{
    history_key, ChartOptions, HashrateChart, PollSchedule, WorkerListPage, WorkerListState,
};

#[test]
fn test_poll_driven_sampling_session() {
    let mut store = MemoryStore::new();
    let mut schedule = PollSchedule::new();
    let mut chart = HashrateChart::new("bc1qwallet", ChartOptions::default());

    // One simulated hour of ticks every 5 seconds; the fast cadence
    // samples the rate each time it fires
    let mut fast_fires = 0;
    let mut slow_fires = 0;
    for tick in 0..=720 {
        let now_ms = tick as f64 * 5_000.0;
        let due = schedule.due(now_ms);
        if due.fast {
            fast_fires += 1;
            chart.push(12.0 + (tick % 7) as f64, (now_ms / 1000.0) as i64);
        }
        if due.slow {
            slow_fires += 1;
        }
    }

    // 15 s and 60 s cadences over 3600 s, including the immediate fire
    assert_eq!(fast_fires, 241);
    assert_eq!(slow_fires, 61);
    assert_eq!(chart.len(), 241);

    // Persist and reload as a fresh chart instance
    chart.save(&mut store);
    let mut restored = HashrateChart::new("bc1qwallet", ChartOptions::default());
    restored.load(&store);
    assert_eq!(restored.len(), chart.len());
    assert_eq!(restored.points_since(0), chart.points_since(0));
}

#[test]
fn test_chart_store_namespace_is_per_wallet() {
    let mut store = MemoryStore::new();

    let mut a = HashrateChart::new("walletA", ChartOptions::default());
    a.push(1.0, 100);
    a.save(&mut store);

    let mut b = HashrateChart::new("walletB", ChartOptions::default());
    b.push(2.0, 100);
    b.save(&mut store);

    assert!(store.get(&history_key("walletA")).is_some());
    assert!(store.get(&history_key("walletB")).is_some());

    let mut check = HashrateChart::new("walletA", ChartOptions::default());
    check.load(&store);
    assert_eq!(check.points_since(0)[0].value, 1.0);
}

#[test]
fn test_worker_modal_paging_flow() {
    let mut state = WorkerListState::new(50);

    // First page arrives
    let page: WorkerListPage = serde_json::from_str(
        r#"{"wallet":"bc1qwallet","total":130,"active":130,"workers":[{"name":"rig1","last_seen":1719243600}]}"#,
    )
    .unwrap();
    state.apply(page);

    assert_eq!(state.total(), 130);
    assert_eq!(state.page_count(), 3);
    assert_eq!(state.entries().len(), 1);

    // Walk to the end and back
    assert!(state.next());
    assert!(state.next());
    assert!(!state.next());
    assert_eq!(state.query().offset, 100);

    assert!(state.prev());
    assert!(state.prev());
    assert!(!state.prev());
    assert_eq!(state.query().offset, 0);
}
