//! Concurrent fan-out over independent items.
//!
//! Every function here creates one future per item in submission order and
//! returns outcomes in that same order, whatever order they complete in.
//! Futures are polled cooperatively on the calling task, so each operation
//! must suspend at its I/O boundary instead of blocking the thread.

use futures::future::{join_all, try_join_all};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::future::Future;

/// Run `operation` on every item concurrently and collect the results in input order.
///
/// Fails fast: the first error observed is returned and the remaining futures
/// are dropped, which cancels whatever they still had in flight. An empty
/// input returns an empty vector without calling `operation`.
pub async fn dispatch<I, T, R, E, F, Fut>(items: I, operation: F) -> Result<Vec<R>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    let pending: Vec<Fut> = items.into_iter().map(operation).collect();
    tracing::debug!("Dispatching {} operations", pending.len());

    try_join_all(pending).await
}

/// Like [`dispatch`], but keeps at most `limit` operations in flight.
///
/// A `limit` of zero is treated as one.
pub async fn dispatch_bounded<I, T, R, E, F, Fut>(
    items: I,
    limit: usize,
    operation: F,
) -> Result<Vec<R>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    let limit = limit.max(1);
    tracing::debug!("Dispatching with at most {} operations in flight", limit);

    stream::iter(items)
        .map(operation)
        .buffered(limit)
        .try_collect()
        .await
}

/// Run every operation to completion and return each outcome in input order.
pub async fn dispatch_settled<I, T, R, E, F, Fut>(items: I, operation: F) -> Vec<Result<R, E>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    join_all(items.into_iter().map(operation)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};
    use tokio::time::sleep;

    const DELAY: Duration = Duration::from_millis(200);

    async fn echo_after(item: &'static str, delay: Duration) -> Result<String, String> {
        sleep(delay).await;
        Ok(item.to_string())
    }

    #[tokio::test]
    async fn test_echo_scenario_runs_concurrently() {
        let items = vec!["test1", "test2", "test3"];

        let start = Instant::now();
        let results = dispatch(items, |item| echo_after(item, DELAY)).await.unwrap();
        let elapsed = start.elapsed();

        assert_eq!(results, vec!["test1", "test2", "test3"]);
        assert!(elapsed >= DELAY);
        // Sequential execution would take 3 * DELAY.
        assert!(elapsed < DELAY * 2, "took {:?}", elapsed);
    }

    #[tokio::test]
    async fn test_results_follow_input_order_not_completion_order() {
        let items = vec![(0usize, 150u64), (1, 100), (2, 50), (3, 0)];
        let finished = Arc::new(std::sync::Mutex::new(Vec::new()));

        let results = dispatch(items, |(index, delay_ms)| {
            let finished = Arc::clone(&finished);
            async move {
                sleep(Duration::from_millis(delay_ms)).await;
                finished.lock().unwrap().push(index);
                Ok::<_, String>(index * 10)
            }
        })
        .await
        .unwrap();

        assert_eq!(*finished.lock().unwrap(), vec![3, 2, 1, 0]);
        assert_eq!(results, vec![0, 10, 20, 30]);
    }

    #[tokio::test]
    async fn test_empty_input_invokes_nothing() {
        let calls = AtomicUsize::new(0);

        let results: Vec<u32> = dispatch(Vec::<u32>::new(), |item| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Ok::<_, String>(item) }
        })
        .await
        .unwrap();

        assert!(results.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_single_failure_fails_whole_batch() {
        let result = dispatch(vec![1, 2, 3], |item| async move {
            if item == 2 {
                Err(format!("item {} failed", item))
            } else {
                Ok(item)
            }
        })
        .await;

        assert_eq!(result, Err("item 2 failed".to_string()));
    }

    #[tokio::test]
    async fn test_failure_cancels_in_flight_siblings() {
        let completed = Arc::new(AtomicUsize::new(0));

        let result = dispatch(vec![0, 1, 2], |item| {
            let completed = Arc::clone(&completed);
            async move {
                if item == 1 {
                    sleep(Duration::from_millis(10)).await;
                    return Err("boom");
                }
                sleep(DELAY).await;
                completed.fetch_add(1, Ordering::SeqCst);
                Ok(item)
            }
        })
        .await;

        assert_eq!(result, Err("boom"));
        sleep(DELAY + Duration::from_millis(100)).await;
        assert_eq!(completed.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_bounded_dispatch_respects_limit_and_order() {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let results = dispatch_bounded(0..6u64, 2, |item| {
            let in_flight = Arc::clone(&in_flight);
            let peak = Arc::clone(&peak);
            async move {
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                // Later items finish faster
                sleep(Duration::from_millis(60 - item * 10)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
                Ok::<_, String>(item)
            }
        })
        .await
        .unwrap();

        assert_eq!(results, vec![0, 1, 2, 3, 4, 5]);
        assert!(peak.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test]
    async fn test_bounded_dispatch_with_zero_limit_still_runs() {
        let results = dispatch_bounded(vec!["a", "b"], 0, |item| async move {
            Ok::<_, String>(item.to_uppercase())
        })
        .await
        .unwrap();

        assert_eq!(results, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_bounded_dispatch_fails_fast() {
        let result = dispatch_bounded(vec![1, 2, 3, 4], 2, |item| async move {
            if item == 3 {
                Err("third failed")
            } else {
                Ok(item)
            }
        })
        .await;

        assert_eq!(result, Err("third failed"));
    }

    #[tokio::test]
    async fn test_settled_dispatch_keeps_every_outcome() {
        let outcomes = dispatch_settled(vec![1, 2, 3], |item| async move {
            sleep(Duration::from_millis(30 / item)).await;
            if item % 2 == 0 {
                Err(item)
            } else {
                Ok(item * 100)
            }
        })
        .await;

        assert_eq!(outcomes, vec![Ok(100), Err(2), Ok(300)]);
    }
}
