use super::*;
use crate::base::lookuperror::LookupError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Default, PartialEq)]
struct TimedResult {
    common: CommonFields,
    values: Vec<String>,
}

impl SetCommonFields for TimedResult {
    fn common_fields_mut(&mut self) -> &mut CommonFields {
        &mut self.common
    }
}

#[tokio::test(start_paused = true)]
async fn test_measure_records_elapsed_time() {
    let result: TimedResult = measure(|| async {
        tokio::time::sleep(Duration::from_millis(250)).await;
        Ok::<_, LookupError>(TimedResult {
            values: vec!["a".into()],
            ..Default::default()
        })
    })
    .await;

    assert!(result.common.is_ok());
    assert_eq!(result.common.duration, Duration::from_millis(250));
    assert_eq!(result.values, vec!["a".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_measure_failure_keeps_duration() {
    let result: TimedResult = measure(|| async {
        tokio::time::sleep(Duration::from_secs(2)).await;
        Err(LookupError::no_such_host("gone.example"))
    })
    .await;

    assert_eq!(result.common.err, "lookup gone.example: no such host");
    assert_eq!(result.common.duration, Duration::from_secs(2));
    assert!(result.values.is_empty());
}

#[tokio::test]
async fn test_measure_invokes_once() {
    let calls = AtomicUsize::new(0);

    let result: TimedResult = measure(|| async {
        calls.fetch_add(1, Ordering::SeqCst);
        Err::<TimedResult, _>("boom")
    })
    .await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(result.common.err, "boom");
}

#[tokio::test]
async fn test_measure_success_leaves_err_empty() {
    let result: CommonFields = measure(|| async { Ok::<_, String>(CommonFields::default()) }).await;
    assert!(result.err.is_empty());
}
