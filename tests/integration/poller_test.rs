use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use shakewatch::core::{
    AlertConfig, AlertDispatcher, AlertLevel, AlertSink, ErrorLog, PollState, Poller,
    PollerConfig, Reading, ReadingSource,
};
use tempfile::TempDir;

use super::support::reading;

/// Hands out one scripted outcome per call, in call order.
struct ScriptedSource {
    script: Vec<(Duration, Option<Reading>)>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    fn new(script: Vec<(Duration, Option<Reading>)>) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
        }
    }
}

impl ReadingSource for ScriptedSource {
    fn fetch_reading(&self) -> Option<Reading> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let (delay, outcome) = self.script.get(call)?.clone();
        thread::sleep(delay);
        outcome
    }
}

#[derive(Default)]
struct CountingSink {
    played: Arc<Mutex<Vec<AlertLevel>>>,
}

impl AlertSink for CountingSink {
    fn play(&self, level: AlertLevel) -> shakewatch::Result<()> {
        self.played.lock().push(level);
        Ok(())
    }
}

fn seeded_state(last: i64) -> Arc<PollState> {
    let state = Arc::new(PollState::new());
    if last > 0 {
        assert!(state.admit(&reading("AM.R1B7B", last)));
    }
    state
}

fn config(fanout: usize) -> PollerConfig {
    PollerConfig {
        fanout,
        interval: Duration::from_millis(1),
    }
}

#[test]
fn test_one_fresh_among_failures_and_stale_alerts_once() {
    let dir = TempDir::new().unwrap();
    let fresh = reading("AM.R1B7B", 2000);
    let source = Arc::new(ScriptedSource::new(vec![
        (Duration::ZERO, None),
        (Duration::ZERO, Some(reading("AM.R1B7B", 500))),
        (Duration::ZERO, Some(fresh.clone())),
        (Duration::ZERO, Some(reading("AM.R1B7B", 1000))),
        (Duration::ZERO, None),
    ]));
    let poller = Poller::new(source.clone(), seeded_state(1000), config(5)).unwrap();

    let played = Arc::new(Mutex::new(Vec::new()));
    let dispatcher = AlertDispatcher::new(
        AlertConfig::default(),
        Box::new(CountingSink {
            played: Arc::clone(&played),
        }),
        Arc::new(ErrorLog::new(dir.path().join("sensor.log"))),
    );

    let mut rendered = Vec::new();
    for _ in 0..3 {
        if let Some(admitted) = poller.run_cycle() {
            dispatcher.dispatch(&admitted);
            rendered.push(admitted);
        }
    }

    assert_eq!(rendered, vec![fresh]);
    assert_eq!(played.lock().len(), 1);
    assert_eq!(poller.state().last_timestamp_millis(), 2000);
}

#[test]
fn test_slow_fresh_reading_still_wins_over_fast_stale_ones() {
    let stale = Some(reading("AM.R1B7B", 100));
    let source = Arc::new(ScriptedSource::new(vec![
        (Duration::ZERO, stale.clone()),
        (Duration::ZERO, stale.clone()),
        (Duration::from_millis(100), Some(reading("AM.R1B7B", 300))),
        (Duration::ZERO, stale.clone()),
        (Duration::ZERO, stale),
    ]));
    let poller = Poller::new(source, seeded_state(100), config(5)).unwrap();

    let admitted = poller.run_cycle().expect("fresh reading admitted");

    assert_eq!(admitted.timestamp_millis, 300);
}

#[test]
fn test_first_arrival_wins_and_later_arrivals_are_dropped() {
    let source = Arc::new(ScriptedSource::new(vec![
        (Duration::ZERO, Some(reading("AM.R1B7B", 50))),
        (Duration::from_millis(150), Some(reading("AM.R1B7B", 90))),
        (Duration::from_millis(150), Some(reading("AM.R1B7B", 80))),
    ]));
    let poller = Poller::new(source.clone(), seeded_state(0), config(3)).unwrap();

    let admitted = poller.run_cycle().unwrap();
    assert_eq!(admitted.timestamp_millis, 50);

    // The slower, newer results were never offered for admission.
    assert_eq!(poller.state().last_timestamp_millis(), 50);
}

#[test]
fn test_cycles_never_go_backwards() {
    // One fetch per cycle keeps the script in step with the cycles.
    let source = Arc::new(ScriptedSource::new(vec![
        (Duration::ZERO, Some(reading("AM.R1B7B", 3000))),
        (Duration::ZERO, Some(reading("AM.R1B7B", 3000))),
        (Duration::ZERO, Some(reading("AM.R1B7B", 2000))),
        (Duration::ZERO, None),
        (Duration::ZERO, Some(reading("AM.R1B7B", 4000))),
    ]));
    let poller = Poller::new(source, seeded_state(0), config(1)).unwrap();

    let results: Vec<Option<i64>> = (0..5)
        .map(|_| poller.run_cycle().map(|r| r.timestamp_millis))
        .collect();

    assert_eq!(results, vec![Some(3000), None, None, None, Some(4000)]);
}

#[test]
fn test_each_cycle_issues_full_fanout() {
    let source = Arc::new(ScriptedSource::new(vec![(Duration::ZERO, None); 12]));
    let poller = Poller::new(source.clone(), seeded_state(0), config(4)).unwrap();

    for _ in 0..3 {
        assert!(poller.run_cycle().is_none());
    }

    assert_eq!(source.calls.load(Ordering::SeqCst), 12);
}
