use std::sync::atomic::Ordering;
use std::time::Duration;

use incinerator::error::RitualError;
use incinerator::ritual::{Incinerator, IncineratorState};

use super::harness::ScriptedSource;

fn incinerator(replies: Vec<anyhow::Result<String>>) -> Incinerator<ScriptedSource> {
    Incinerator::new(
        ScriptedSource::new(replies),
        Duration::from_millis(10),
        "en",
    )
}

#[tokio::test]
async fn full_cycle_returns_to_idle() {
    let mut incinerator = incinerator(vec![Ok("gone like smoke".into())]);

    let response = incinerator.submit("I feel useless".into()).await.unwrap();
    assert_eq!(response, "gone like smoke");
    assert_eq!(incinerator.state(), IncineratorState::Cooling);

    incinerator.reset().unwrap();
    assert_eq!(incinerator.state(), IncineratorState::Idle);
    assert!(incinerator.response().is_none());
}

#[tokio::test]
async fn cooling_rejects_a_second_submission() {
    let source = ScriptedSource::new(vec![Ok("first".into()), Ok("second".into())]);
    let calls = source.calls();
    let mut incinerator = Incinerator::new(source, Duration::from_millis(10), "en");
    incinerator.submit("one".into()).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let err = incinerator.submit("two".into()).await.unwrap_err();
    assert_eq!(
        err,
        RitualError::NotIdle {
            state: IncineratorState::Cooling
        }
    );
    assert_eq!(incinerator.response().as_deref(), Some("first"));
    assert_eq!(calls.load(Ordering::SeqCst), 1, "rejected submit reached the source");
}

#[tokio::test]
async fn blank_submission_never_reaches_the_source() {
    let source = ScriptedSource::new(vec![Ok("ash".into())]);
    let calls = source.calls();
    let mut incinerator = Incinerator::new(source, Duration::from_millis(10), "en");

    let err = incinerator.submit("   ".into()).await.unwrap_err();
    assert_eq!(err, RitualError::EmptySubmission);
    assert_eq!(incinerator.state(), IncineratorState::Idle);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn every_non_blank_submission_ends_with_visible_text() {
    let mut incinerator = incinerator(vec![
        Ok("ash".into()),
        Ok(String::new()),
        Err(anyhow::anyhow!("source went dark")),
        Ok(" \n ".into()),
    ]);

    for thought in ["a", "b", "c", "d"] {
        let response = incinerator.submit(thought.into()).await.unwrap();
        assert!(!response.trim().is_empty(), "blank reply for {thought}");
        assert_eq!(incinerator.response(), Some(response));
        incinerator.reset().unwrap();
    }
}

#[tokio::test]
async fn many_rounds_reuse_one_incinerator() {
    let mut incinerator = incinerator(Vec::new());
    for round in 0..5 {
        let response = incinerator.submit(format!("round {round}")).await.unwrap();
        assert_eq!(response, "the last ember");
        incinerator.reset().unwrap();
    }
}
