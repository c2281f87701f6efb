//! Zero-argument suppliers and runnables that may fail

use crate::{FallibleConsumer, FallibleFunction};
use fallible_core::{check_not_null, Result};
use std::marker::PhantomData;
use tracing::trace;

/// Produces an `A`, may fail with `E`
pub trait FallibleSupplier<A, E> {
    /// Get the supplied value
    fn get(&self) -> std::result::Result<A, E>;

    /// Map the supplied value through `after`
    fn and_then_map<B, G>(self, after: G) -> AndThenMap<Self, G, A>
    where
        Self: Sized,
        G: FallibleFunction<A, B, E>,
    {
        trace!(combinator = "supplier.and_then_map", "composed");
        AndThenMap {
            supplier: self,
            after,
            marker: PhantomData,
        }
    }

    /// Checked form of [`and_then_map`](Self::and_then_map)
    fn try_and_then_map<B, G>(self, after: Option<G>) -> Result<AndThenMap<Self, G, A>>
    where
        Self: Sized,
        G: FallibleFunction<A, B, E>,
    {
        let after = check_not_null("after", after)?;
        Ok(self.and_then_map(after))
    }

    /// Hand the supplied value to `after`
    fn and_then_consume<G>(self, after: G) -> AndThenConsume<Self, G, A>
    where
        Self: Sized,
        G: FallibleConsumer<A, E>,
    {
        trace!(combinator = "supplier.and_then_consume", "composed");
        AndThenConsume {
            supplier: self,
            after,
            marker: PhantomData,
        }
    }

    /// Checked form of [`and_then_consume`](Self::and_then_consume)
    fn try_and_then_consume<G>(self, after: Option<G>) -> Result<AndThenConsume<Self, G, A>>
    where
        Self: Sized,
        G: FallibleConsumer<A, E>,
    {
        let after = check_not_null("after", after)?;
        Ok(self.and_then_consume(after))
    }
}

impl<F, A, E> FallibleSupplier<A, E> for F
where
    F: Fn() -> std::result::Result<A, E>,
{
    fn get(&self) -> std::result::Result<A, E> {
        self()
    }
}

/// A supplier that hands out clones of `value` and never fails
pub fn constant<A, E>(value: A) -> impl FallibleSupplier<A, E>
where
    A: Clone,
{
    move || -> std::result::Result<A, E> { Ok(value.clone()) }
}

/// An operation taking and producing nothing that may fail with `E`
pub trait FallibleRunnable<E> {
    /// Run the operation
    fn run(&self) -> std::result::Result<(), E>;

    /// Run `after` once this operation has succeeded
    fn and_then_run<G>(self, after: G) -> AndThenRun<Self, G>
    where
        Self: Sized,
        G: FallibleRunnable<E>,
    {
        trace!(combinator = "runnable.and_then_run", "composed");
        AndThenRun { first: self, after }
    }

    /// Checked form of [`and_then_run`](Self::and_then_run)
    fn try_and_then_run<G>(self, after: Option<G>) -> Result<AndThenRun<Self, G>>
    where
        Self: Sized,
        G: FallibleRunnable<E>,
    {
        let after = check_not_null("after", after)?;
        Ok(self.and_then_run(after))
    }
}

impl<F, E> FallibleRunnable<E> for F
where
    F: Fn() -> std::result::Result<(), E>,
{
    fn run(&self) -> std::result::Result<(), E> {
        self()
    }
}

/// Supplier returned by [`FallibleSupplier::and_then_map`]
#[must_use = "composed suppliers do nothing until called"]
pub struct AndThenMap<S, G, A> {
    supplier: S,
    after: G,
    marker: PhantomData<fn() -> A>,
}

impl<S, G, A, B, E> FallibleSupplier<B, E> for AndThenMap<S, G, A>
where
    S: FallibleSupplier<A, E>,
    G: FallibleFunction<A, B, E>,
{
    fn get(&self) -> std::result::Result<B, E> {
        self.after.apply(self.supplier.get()?)
    }
}

/// Runnable returned by [`FallibleSupplier::and_then_consume`]
#[must_use = "composed runnables do nothing until run"]
pub struct AndThenConsume<S, G, A> {
    supplier: S,
    after: G,
    marker: PhantomData<fn() -> A>,
}

impl<S, G, A, E> FallibleRunnable<E> for AndThenConsume<S, G, A>
where
    S: FallibleSupplier<A, E>,
    G: FallibleConsumer<A, E>,
{
    fn run(&self) -> std::result::Result<(), E> {
        self.after.accept(self.supplier.get()?)
    }
}

/// Runnable returned by [`FallibleRunnable::and_then_run`]
#[must_use = "composed runnables do nothing until run"]
pub struct AndThenRun<F, G> {
    first: F,
    after: G,
}

impl<F, G, E> FallibleRunnable<E> for AndThenRun<F, G>
where
    F: FallibleRunnable<E>,
    G: FallibleRunnable<E>,
{
    fn run(&self) -> std::result::Result<(), E> {
        self.first.run()?;
        self.after.run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fallible_core::testing::fixtures::{double, MathError};
    use fallible_core::testing::CallLog;
    use fallible_core::Error;

    #[test]
    fn test_and_then_map() {
        let supplier = constant::<i64, MathError>(21).and_then_map(double);
        assert_eq!(supplier.get(), Ok(42));
        // Re-evaluated on every call
        assert_eq!(supplier.get(), Ok(42));
    }

    #[test]
    fn test_and_then_map_short_circuits() {
        let log = CallLog::new();
        let spy = log.clone();
        let supplier = (|| -> std::result::Result<i64, MathError> { Err(MathError::Overflow) })
            .and_then_map(move |r: i64| {
                spy.record("after");
                Ok(r)
            });

        assert_eq!(supplier.get(), Err(MathError::Overflow));
        assert!(log.is_empty());
    }

    #[test]
    fn test_and_then_consume() {
        let log = CallLog::new();
        let spy = log.clone();
        let runnable = constant::<i64, MathError>(5).and_then_consume(move |r: i64| {
            assert_eq!(r, 5);
            spy.record("consumer");
            Ok(())
        });

        assert_eq!(runnable.run(), Ok(()));
        assert_eq!(log.entries(), vec!["consumer"]);
    }

    #[test]
    fn test_and_then_run_stops_on_failure() {
        let log = CallLog::new();
        let first = {
            let log = log.clone();
            move || -> std::result::Result<(), MathError> {
                log.record("first");
                Err(MathError::DivideByZero)
            }
        };
        let second = {
            let log = log.clone();
            move || -> std::result::Result<(), MathError> {
                log.record("second");
                Ok(())
            }
        };

        let chained = first.and_then_run(second);
        assert_eq!(chained.run(), Err(MathError::DivideByZero));
        assert_eq!(log.entries(), vec!["first"]);
    }

    #[test]
    fn test_checked_forms_name_parameter() {
        let map = constant::<i64, MathError>(1)
            .try_and_then_map::<i64, fn(i64) -> std::result::Result<i64, MathError>>(None);
        assert_eq!(map.err(), Some(Error::invalid_argument("after")));

        let run = (|| -> std::result::Result<(), MathError> { Ok(()) })
            .try_and_then_run::<fn() -> std::result::Result<(), MathError>>(None);
        assert_eq!(run.err(), Some(Error::invalid_argument("after")));
    }
}
