// Poller lifecycle tests: timer idempotence, failure resilience, stale
// response discard, and cancellation.

mod common;

use common::{DelayedFirstSource, FakeView, ScriptedSource, snapshot_with};
use panelwatch::models::ResourceStatus;
use panelwatch::poller::{Poller, PollerConfig};
use panelwatch::stats_client::ClientError;
use panelwatch::view::RowField;
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn poller_with(
    source: ScriptedSource,
    interval_ms: u64,
) -> (Arc<ScriptedSource>, Arc<Mutex<FakeView>>, Poller<ScriptedSource, FakeView>) {
    let source = Arc::new(source);
    let view = Arc::new(Mutex::new(FakeView::with_rows(&["abc"])));
    let poller = Poller::new(
        source.clone(),
        view.clone(),
        PollerConfig {
            interval: Duration::from_millis(interval_ms),
            update_gauges: false,
        },
    );
    (source, view, poller)
}

#[tokio::test]
async fn failed_fetch_leaves_view_unchanged() {
    let source = ScriptedSource::new(vec![Err(ClientError::Status(
        reqwest::StatusCode::INTERNAL_SERVER_ERROR,
    ))]);
    let (_, view, poller) = poller_with(source, 1000);

    let before = view.lock().unwrap().clone();
    let applied = poller.poll_once().await;

    assert!(!applied);
    assert_eq!(*view.lock().unwrap(), before);
}

#[tokio::test]
async fn timer_keeps_firing_after_a_failure() {
    let source = ScriptedSource::new(vec![
        Err(ClientError::Status(reqwest::StatusCode::BAD_GATEWAY)),
        Ok(snapshot_with(
            "abc",
            ResourceStatus::Running,
            10.0,
            1024,
            4096,
        )),
    ]);
    let (source, view, poller) = poller_with(source, 20);

    assert!(poller.start());
    tokio::time::sleep(Duration::from_millis(150)).await;
    poller.stop().await;

    assert!(
        source.call_count() >= 2,
        "timer should fire again after a failed tick, got {} calls",
        source.call_count()
    );
    let view = view.lock().unwrap();
    assert_eq!(view.text_of("abc", RowField::Status), Some("running"));
}

#[tokio::test]
async fn start_is_idempotent_while_running() {
    let (source, _, poller) = poller_with(ScriptedSource::new(vec![]), 30);

    assert!(poller.start());
    assert!(!poller.start(), "second start must not spawn a second timer");
    assert!(poller.is_running());

    tokio::time::sleep(Duration::from_millis(100)).await;
    poller.stop().await;
    assert!(!poller.is_running());

    // 100ms at a 30ms cadence: one timer polls ~4 times, two would double it
    assert!(
        source.call_count() <= 6,
        "expected a single timer, got {} calls",
        source.call_count()
    );

    // a stopped poller can be scheduled again
    assert!(poller.start());
    poller.stop().await;
}

#[tokio::test]
async fn stop_cancels_the_timer() {
    let (source, _, poller) = poller_with(ScriptedSource::new(vec![]), 10);

    poller.start();
    tokio::time::sleep(Duration::from_millis(50)).await;
    poller.stop().await;

    let after_stop = source.call_count();
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(
        source.call_count(),
        after_stop,
        "no fetch may be issued after stop"
    );
}

#[tokio::test]
async fn stop_without_start_is_a_no_op() {
    let (_, _, poller) = poller_with(ScriptedSource::new(vec![]), 10);
    poller.stop().await;
    assert!(!poller.is_running());
}

#[tokio::test]
async fn out_of_order_response_is_discarded() {
    let stale = snapshot_with("abc", ResourceStatus::Stopped, 0.0, 0, 0);
    let fresh = snapshot_with("abc", ResourceStatus::Running, 20.0, 2048, 4096);
    let source = Arc::new(DelayedFirstSource::new(
        stale,
        fresh,
        Duration::from_millis(80),
    ));
    let view = Arc::new(Mutex::new(FakeView::with_rows(&["abc"])));
    let poller = Poller::new(
        source,
        view.clone(),
        PollerConfig {
            interval: Duration::from_secs(60),
            update_gauges: false,
        },
    );

    // First request stalls; second is issued later but completes first.
    let (slow, fast) = tokio::join!(poller.poll_once(), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        poller.poll_once().await
    });

    assert!(fast, "the fresh response must be applied");
    assert!(!slow, "the stale response must be discarded");
    let view = view.lock().unwrap();
    assert_eq!(view.text_of("abc", RowField::Status), Some("running"));
}
