//! Measurement dispatcher.
//!
//! [`measure`] runs a lookup exactly once, times it and folds the outcome
//! into the result's [`CommonFields`] envelope. It never fails: an error
//! becomes the envelope's `err` text and the payload stays at its zero
//! value.

mod envelope;
mod normalize;

pub use envelope::{CommonFields, SetCommonFields};
pub use normalize::{lift, to_strings};

use std::fmt::Display;
use std::future::Future;
use tokio::time::Instant;

/// Times `op` and returns its result with the envelope filled in.
///
/// On error the result is `R::default()`, so no partially built payload
/// can leak out next to an error. The error is recorded with its `Display`
/// form, unwrapped and unclassified.
pub async fn measure<R, E, F, Fut>(op: F) -> R
where
    R: SetCommonFields + Default,
    E: Display,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    let start = Instant::now();
    let outcome = op().await;
    let elapsed = start.elapsed();

    let (mut result, err) = match outcome {
        Ok(result) => (result, None),
        Err(e) => {
            let err = e.to_string();
            tracing::debug!(elapsed = ?elapsed, error = %err, "lookup failed");
            (R::default(), Some(err))
        }
    };

    result.set_common_fields(elapsed, err);
    result
}

#[cfg(test)]
mod tests;
