//! Drivers that consume a sequence by applying a side-effecting action to
//! every element.
//!
//! Three variants with increasingly relaxed ordering:
//!
//! - [`do_each`] — synchronous, strictly in input order, one at a time.
//! - [`do_async`] — asynchronous, same ordering guarantee; at most one
//!   action is ever in flight.
//! - [`parallel_do_async`] — fan-out; every action is started before any
//!   is awaited, completion order is free, and the join never
//!   short-circuits on failure.
//!
//! All three take their sequence and action as `Option`s and fail with
//! [`DriveError::MissingSequence`] / [`DriveError::MissingAction`] before
//! consuming a single element when either is absent.

use std::future::Future;

use futures::future::join_all;

use crate::error::{AggregateError, DriveError};

/// Calls `action` once per element, strictly in sequence order.
///
/// Each call completes before the next begins. The first action failure
/// stops iteration and is returned as [`DriveError::Action`].
///
/// ```
/// use seqkit::do_each;
///
/// let mut total = 0;
/// do_each(Some([1, 2, 4, 8]), Some(|n| {
///     total += n;
///     Ok::<(), String>(())
/// }))?;
/// assert_eq!(total, 15);
/// # Ok::<(), seqkit::DriveError<String>>(())
/// ```
pub fn do_each<I, F, E>(sequence: Option<I>, action: Option<F>) -> Result<(), DriveError<E>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<(), E>,
{
    let sequence = sequence.ok_or(DriveError::MissingSequence)?;
    let mut action = action.ok_or(DriveError::MissingAction)?;

    for item in sequence {
        action(item).map_err(DriveError::Action)?;
    }

    Ok(())
}

/// Calls `action` once per element, awaiting each invocation to completion
/// before invoking the next.
///
/// Ordering is identical to [`do_each`]: start order = completion order =
/// input order. The argument checks run before the first suspension point;
/// the first failed action aborts iteration and is returned as
/// [`DriveError::Action`].
pub async fn do_async<I, F, Fut, E>(
    sequence: Option<I>,
    action: Option<F>,
) -> Result<(), DriveError<E>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let sequence = sequence.ok_or(DriveError::MissingSequence)?;
    let mut action = action.ok_or(DriveError::MissingAction)?;

    for item in sequence {
        action(item).await.map_err(DriveError::Action)?;
    }

    Ok(())
}

/// Invokes `action` for every element without waiting between invocations,
/// then waits for all of them to finish.
///
/// Actions are invoked in input order; their futures are driven together by
/// a single join, so completion order is unconstrained and the fan-out
/// width equals the input size (no hidden throttling). The join never
/// short-circuits: even when some actions fail, every one is awaited to a
/// terminal state, and the failures are reported together as
/// [`DriveError::Aggregate`] with causes in input order. A slow or failing
/// element can never starve or hide the outcomes of the others.
pub async fn parallel_do_async<I, F, Fut, E>(
    sequence: Option<I>,
    action: Option<F>,
) -> Result<(), DriveError<E>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let sequence = sequence.ok_or(DriveError::MissingSequence)?;
    let action = action.ok_or(DriveError::MissingAction)?;

    let pending: Vec<Fut> = sequence.into_iter().map(action).collect();

    let causes: Vec<E> = join_all(pending)
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect();

    if causes.is_empty() {
        Ok(())
    } else {
        Err(DriveError::Aggregate(AggregateError::new(causes)))
    }
}
