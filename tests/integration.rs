// SPDX-License-Identifier: MPL-2.0
use design_kit::config::{self, Config, Position, UploadConfig};
use design_kit::notification::{
    Countdown, Event, Lifecycle, Manager, Notification, Phase, Severity, Trigger,
};
use design_kit::upload::{FileCandidate, Selection, SizeGuard, UploadError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn config_round_trips_through_override_dir() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut saved = Config::default();
    saved.notifications.duration_ms = 8000;
    saved.notifications.position = Position::BottomLeft;
    saved.upload = UploadConfig {
        max_size_bytes: Some(2048),
        multiple: true,
        required: true,
        accept: Some(vec![".pdf".to_string()]),
    };
    config::save_with_override(&saved, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, saved);
}

#[test]
fn broken_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "notifications = 5")
        .expect("Failed to write broken config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
}

#[test]
fn auto_dismiss_runs_to_completion_exactly_once() {
    let start = Instant::now();
    let closed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&closed);
    let mut lifecycle = Lifecycle::new(
        Notification::info("Saved").with_duration(Duration::from_millis(5000)),
        Duration::from_millis(300),
        start,
    )
    .with_on_close(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert!(lifecycle.advance(start + Duration::from_millis(4999)).is_empty());
    assert_eq!(
        lifecycle.advance(start + Duration::from_millis(5000)),
        vec![Event::Closing(Trigger::Expired)]
    );
    assert!(!lifecycle.request_dismiss(Trigger::CloseButton, start + Duration::from_millis(5100)));
    assert_eq!(
        lifecycle.advance(start + Duration::from_millis(5300)),
        vec![Event::Closed]
    );
    assert!(lifecycle.advance(start + Duration::from_secs(10)).is_empty());
    assert_eq!(closed.load(Ordering::SeqCst), 1);
}

#[test]
fn manager_keeps_instances_independent() {
    let start = Instant::now();
    let mut manager = Manager::new(Duration::from_millis(300));
    let short = manager.push(
        Notification::success("short").with_duration(Duration::from_millis(1000)),
        start,
    );
    let sticky = manager.push(Notification::warning("sticky").persistent(), start);

    let removed = manager.tick(start + Duration::from_millis(1300));
    assert_eq!(removed, vec![short]);
    assert_eq!(manager.visible().map(Lifecycle::id).collect::<Vec<_>>(), vec![sticky]);

    assert!(manager.dismiss(sticky, Trigger::CloseButton, start + Duration::from_secs(2)));
    assert_eq!(manager.tick(start + Duration::from_secs(3)), vec![sticky]);
    assert!(!manager.has_notifications());
}

#[test]
fn guard_rejects_whole_batch_when_any_file_is_too_large() {
    let guard = SizeGuard::new(Some(1000), true);
    let err = guard
        .check(vec![
            FileCandidate::new("a", 500),
            FileCandidate::new("b", 1500),
            FileCandidate::new("c", 200),
        ])
        .expect_err("batch should be rejected");

    assert_eq!(err, UploadError::SizeExceeded { max_size: 1000 });
    assert_eq!(err.to_string(), "File(s) exceed maximum size of 1000 Bytes");
}

#[test]
fn guard_without_ceiling_accepts_anything() {
    let guard = SizeGuard::new(None, false);
    let selection = guard
        .check(vec![FileCandidate::new("huge.iso", u64::MAX)])
        .expect("no ceiling configured");
    assert!(matches!(selection, Selection::Single(Some(_))));
}

#[test]
fn file_candidate_reads_size_from_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, vec![0u8; 1234]).expect("Failed to write file");

    let candidate = FileCandidate::from_path(&path).expect("metadata readable");
    assert_eq!(candidate.name, "notes.txt");
    assert_eq!(candidate.size, 1234);
}

#[tokio::test(start_paused = true)]
async fn countdown_publishes_until_closed() {
    let lifecycle = Lifecycle::new(
        Notification::new(Severity::Error, "Failed").with_duration(Duration::from_millis(500)),
        Duration::from_millis(100),
        Countdown::clock_now(),
    );
    let countdown = Countdown::spawn(lifecycle, Duration::from_millis(50));
    let mut snapshots = countdown.subscribe();

    snapshots
        .wait_for(|snapshot| snapshot.phase == Phase::Closed)
        .await
        .expect("driver alive until closed");

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(countdown.is_finished());
    assert_eq!(countdown.snapshot().remaining_fraction, 0.0);
}

#[tokio::test(start_paused = true)]
async fn dropping_countdown_suppresses_close_callback() {
    let closed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&closed);
    let lifecycle = Lifecycle::new(
        Notification::info("Bye").with_duration(Duration::from_millis(200)),
        Duration::from_millis(100),
        Countdown::clock_now(),
    )
    .with_on_close(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let countdown = Countdown::spawn(lifecycle, Duration::from_millis(10));
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(countdown.snapshot().phase, Phase::Closing);

    drop(countdown);
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(closed.load(Ordering::SeqCst), 0);
}
