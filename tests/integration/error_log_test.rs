use std::fs;
use std::sync::Arc;
use std::thread;

use shakewatch::core::ErrorLog;
use tempfile::TempDir;

#[test]
fn test_concurrent_writers_produce_whole_lines() {
    let dir = TempDir::new().unwrap();
    let log = Arc::new(ErrorLog::new(dir.path().join("sensor.log")));

    let handles: Vec<_> = (0..5)
        .map(|task| {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                for i in 0..20 {
                    log.record(&format!("Error fetching data: task {} attempt {}", task, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let contents = fs::read_to_string(log.path()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 100);
    assert!(lines
        .iter()
        .all(|line| line.contains(" Error fetching data: task ")));
}

#[test]
fn test_rotation_resets_size_below_cap() {
    let dir = TempDir::new().unwrap();
    let cap = 1024;
    let log = ErrorLog::with_max_size(dir.path().join("sensor.log"), cap);
    let message = "Error fetching data: operation timed out";

    let mut previous = 0;
    let mut rotated = false;
    for _ in 0..200 {
        log.record(message);
        let size = fs::metadata(log.path()).unwrap().len();
        if size < previous {
            rotated = true;
            assert!(previous > cap, "rotated before exceeding the cap");
            assert!(size < cap);
            break;
        }
        previous = size;
    }

    assert!(rotated, "log never rotated");
}
