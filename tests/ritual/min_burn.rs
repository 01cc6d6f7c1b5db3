use std::time::{Duration, Instant};

use incinerator::ritual::{Incinerator, IncineratorState};

use super::harness::ScriptedSource;

const MIN_BURN: Duration = Duration::from_millis(120);

#[tokio::test]
async fn fast_source_still_burns_for_the_minimum() {
    let mut incinerator = Incinerator::new(
        ScriptedSource::new(vec![Ok("quick".into())]),
        MIN_BURN,
        "en",
    );

    let started = Instant::now();
    incinerator.submit("heavy".into()).await.unwrap();
    assert!(started.elapsed() >= MIN_BURN);
}

#[tokio::test]
async fn slow_source_is_not_padded_further() {
    let slow = Duration::from_millis(200);
    let mut incinerator = Incinerator::new(
        ScriptedSource::new(vec![Ok("slow".into())]).with_delay(slow),
        MIN_BURN,
        "en",
    );

    let started = Instant::now();
    incinerator.submit("heavy".into()).await.unwrap();
    let elapsed = started.elapsed();
    assert!(elapsed >= slow);
    assert!(elapsed < slow + MIN_BURN, "burn and call ran back to back");
}

#[tokio::test]
async fn observers_see_burning_before_the_minimum_elapses() {
    let mut incinerator = Incinerator::new(
        ScriptedSource::new(vec![Ok("ash".into())]),
        MIN_BURN,
        "en",
    );
    let mut snapshots = incinerator.subscribe();

    let observer = tokio::spawn(async move {
        snapshots.changed().await.unwrap();
        let first = snapshots.borrow_and_update().clone();
        let seen_at = Instant::now();
        snapshots.changed().await.unwrap();
        let second = snapshots.borrow_and_update().clone();
        (first, second, seen_at.elapsed())
    });

    incinerator.submit("heavy".into()).await.unwrap();
    let (first, second, gap) = observer.await.unwrap();

    assert_eq!(first.state, IncineratorState::Burning);
    assert!(first.response.is_none());
    assert_eq!(second.state, IncineratorState::Cooling);
    assert_eq!(second.response.as_deref(), Some("ash"));
    assert!(gap >= MIN_BURN / 2);
}
