use std::sync::{Arc, Mutex};

use tabular_data_analysis::ingestion::{
    LoadContext, LoadObserver, LoadOptions, LoadSeverity, LoadStats, load_table_with_options,
};
use tabular_data_analysis::TableError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<LoadStats>>,
    contexts: Mutex<Vec<LoadContext>>,
    failures: Mutex<Vec<LoadSeverity>>,
    alerts: Mutex<Vec<LoadSeverity>>,
}

impl LoadObserver for RecordingObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.successes.lock().unwrap().push(stats);
        self.contexts.lock().unwrap().push(ctx.clone());
    }

    fn on_failure(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &TableError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &TableError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

#[test]
fn observer_receives_success_stats() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        ignore_rows: vec![0],
        observer: Some(obs.clone()),
        ..Default::default()
    };

    assert!(load_table_with_options("tests/fixtures/sales_data.csv", &opts).is_some());

    let successes = obs.successes.lock().unwrap().clone();
    assert_eq!(
        successes,
        vec![LoadStats {
            records_read: 8,
            rows: 7,
            cols: 7,
        }]
    );
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_missing_file() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: LoadSeverity::Critical,
        ..Default::default()
    };

    assert!(load_table_with_options("tests/fixtures/does_not_exist.csv", &opts).is_none());

    assert_eq!(obs.failures.lock().unwrap().clone(), vec![LoadSeverity::Critical]);
    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![LoadSeverity::Critical]);
}

#[test]
fn invalid_options_fail_without_alert() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        delimiter: b'"',
        observer: Some(obs.clone()),
        ..Default::default()
    };

    assert!(load_table_with_options("tests/fixtures/sales_data.csv", &opts).is_none());

    assert_eq!(obs.failures.lock().unwrap().clone(), vec![LoadSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn context_and_stats_report_applied_ignore_lists() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        ignore_rows: vec![0, 7, 40],
        ignore_cols: vec![0, 6],
        observer: Some(obs.clone()),
        ..Default::default()
    };

    let loaded = load_table_with_options("tests/fixtures/sales_data.csv", &opts).unwrap();
    assert_eq!((loaded.total_rows, loaded.total_cols), (6, 5));

    let ctx = obs.contexts.lock().unwrap()[0].clone();
    assert!(ctx.path.ends_with("sales_data.csv"));
    assert_eq!(ctx.ignore_rows, vec![0, 7, 40]);
    assert_eq!(ctx.ignore_cols, vec![0, 6]);

    let stats = obs.successes.lock().unwrap()[0];
    assert_eq!(stats.records_read, 8);
    // index 40 is past the end and drops nothing
    assert_eq!(stats.rows_dropped(), 2);
}
