//! Elapsed-time measurement for single operations
//!
//! Measurement uses the monotonic clock (`std::time::Instant`), so recorded
//! durations are unaffected by wall-clock adjustments. Fallible variants
//! propagate the operation's error without a timing value: a failed stage
//! never produces a partial measurement.

use std::future::Future;
use std::time::{Duration, Instant};

/// Execute a closure once and return its output together with the elapsed time.
pub fn time_sync<T, F>(op: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let output = op();
    (output, start.elapsed())
}

/// Execute a fallible closure once, timing only the success path.
pub fn try_time_sync<T, E, F>(op: F) -> Result<(T, Duration), E>
where
    F: FnOnce() -> Result<T, E>,
{
    let start = Instant::now();
    let output = op()?;
    Ok((output, start.elapsed()))
}

/// Await a future and return its output together with the elapsed time.
pub async fn time_async<T, Fut>(fut: Fut) -> (T, Duration)
where
    Fut: Future<Output = T>,
{
    let start = Instant::now();
    let output = fut.await;
    (output, start.elapsed())
}

/// Await a fallible future, timing only the success path.
pub async fn try_time_async<T, E, Fut>(fut: Fut) -> Result<(T, Duration), E>
where
    Fut: Future<Output = Result<T, E>>,
{
    let start = Instant::now();
    let output = fut.await?;
    Ok((output, start.elapsed()))
}
