//! Two-argument functions that may fail, and the combinators that build
//! pipelines out of them

use crate::{FallibleBiConsumer, FallibleConsumer, FallibleFunction, FallibleSupplier};
use fallible_core::{check_not_null, Result};
use std::marker::PhantomData;
use tracing::trace;

/// A two-argument function which may fail
///
/// Accepts a `T` and a `U`, produces an `R`, and may fail with `E`. Any
/// `Fn(T, U) -> Result<R, E>` implements it, so closures and `fn` items work
/// without wrapping.
///
/// Combinators consume `self` and their arguments and return an adapter value
/// holding them; nothing is evaluated until the result is applied. Evaluation
/// runs strictly left to right and stops at the first failure, which is
/// returned to the caller as is. An adapter is `Send`/`Sync` whenever the parts
/// it holds are.
///
/// Every combinator has a `try_*` form taking `Option` arguments. Those check
/// each argument in declaration order and fail with
/// [`Error::InvalidArgument`](fallible_core::Error::InvalidArgument) naming the
/// first absent one, before anything is built or invoked.
///
/// # Example
///
/// ```rust
/// use fallible_function::prelude::*;
///
/// #[derive(Debug, PartialEq)]
/// struct DivideByZero;
///
/// let divide = |t: i64, u: i64| if u == 0 { Err(DivideByZero) } else { Ok(t / u) };
/// let halve_then_double = divide.and_then_map(|r: i64| Ok(r * 2));
///
/// assert_eq!(halve_then_double.apply(9, 2), Ok(8));
/// assert_eq!(halve_then_double.apply(9, 0), Err(DivideByZero));
/// ```
pub trait FallibleBiFunction<T, U, R, E> {
    /// Apply this function to the given arguments
    fn apply(&self, t: T, u: U) -> std::result::Result<R, E>;

    /// Feed the result of this function into `after`
    ///
    /// The returned function evaluates `self` first. If that fails the failure
    /// is returned and `after` is never invoked; otherwise the result of
    /// `after` is returned, failure included.
    fn and_then_map<R2, G>(self, after: G) -> AndThenMap<Self, G, R>
    where
        Self: Sized,
        G: FallibleFunction<R, R2, E>,
    {
        trace!(combinator = "bi_function.and_then_map", "composed");
        AndThenMap {
            function: self,
            after,
            marker: PhantomData,
        }
    }

    /// Checked form of [`and_then_map`](Self::and_then_map)
    ///
    /// Fails naming `after` when it is absent.
    fn try_and_then_map<R2, G>(self, after: Option<G>) -> Result<AndThenMap<Self, G, R>>
    where
        Self: Sized,
        G: FallibleFunction<R, R2, E>,
    {
        let after = check_not_null("after", after)?;
        Ok(self.and_then_map(after))
    }

    /// Hand the result of this function to `after`
    ///
    /// Same ordering as [`and_then_map`](Self::and_then_map); the composed
    /// consumer yields `()` once `after` has accepted the result.
    fn and_then_consume<G>(self, after: G) -> AndThenConsume<Self, G, R>
    where
        Self: Sized,
        G: FallibleConsumer<R, E>,
    {
        trace!(combinator = "bi_function.and_then_consume", "composed");
        AndThenConsume {
            function: self,
            after,
            marker: PhantomData,
        }
    }

    /// Checked form of [`and_then_consume`](Self::and_then_consume)
    ///
    /// Fails naming `after` when it is absent.
    fn try_and_then_consume<G>(self, after: Option<G>) -> Result<AndThenConsume<Self, G, R>>
    where
        Self: Sized,
        G: FallibleConsumer<R, E>,
    {
        let after = check_not_null("after", after)?;
        Ok(self.and_then_consume(after))
    }

    /// Draw both arguments of this function from suppliers
    ///
    /// The returned supplier calls `before1`, then `before2`, then `self`,
    /// stopping at the first failure.
    fn compose<S1, S2>(self, before1: S1, before2: S2) -> Compose<Self, S1, S2, T, U>
    where
        Self: Sized,
        S1: FallibleSupplier<T, E>,
        S2: FallibleSupplier<U, E>,
    {
        trace!(combinator = "bi_function.compose", "composed");
        Compose {
            function: self,
            before1,
            before2,
            marker: PhantomData,
        }
    }

    /// Checked form of [`compose`](Self::compose)
    ///
    /// `before1` is checked before `before2`; neither supplier is invoked.
    fn try_compose<S1, S2>(
        self,
        before1: Option<S1>,
        before2: Option<S2>,
    ) -> Result<Compose<Self, S1, S2, T, U>>
    where
        Self: Sized,
        S1: FallibleSupplier<T, E>,
        S2: FallibleSupplier<U, E>,
    {
        let before1 = check_not_null("before1", before1)?;
        let before2 = check_not_null("before2", before2)?;
        Ok(self.compose(before1, before2))
    }

    /// Take the arguments in the opposite order
    fn swap(self) -> Swap<Self>
    where
        Self: Sized,
    {
        Swap { function: self }
    }

    /// Bind the first argument, leaving a function of the second
    fn curry(self, t: T) -> Curry<Self, T>
    where
        Self: Sized,
        T: Clone,
    {
        Curry { function: self, t }
    }
}

impl<F, T, U, R, E> FallibleBiFunction<T, U, R, E> for F
where
    F: Fn(T, U) -> std::result::Result<R, E>,
{
    fn apply(&self, t: T, u: U) -> std::result::Result<R, E> {
        self(t, u)
    }
}

/// Function returned by [`FallibleBiFunction::and_then_map`]
#[must_use = "composed functions do nothing until applied"]
pub struct AndThenMap<F, G, R> {
    function: F,
    after: G,
    marker: PhantomData<fn() -> R>,
}

impl<F, G, T, U, R, R2, E> FallibleBiFunction<T, U, R2, E> for AndThenMap<F, G, R>
where
    F: FallibleBiFunction<T, U, R, E>,
    G: FallibleFunction<R, R2, E>,
{
    fn apply(&self, t: T, u: U) -> std::result::Result<R2, E> {
        let result = self.function.apply(t, u)?;
        self.after.apply(result)
    }
}

/// Consumer returned by [`FallibleBiFunction::and_then_consume`]
#[must_use = "composed consumers do nothing until applied"]
pub struct AndThenConsume<F, G, R> {
    function: F,
    after: G,
    marker: PhantomData<fn() -> R>,
}

impl<F, G, T, U, R, E> FallibleBiConsumer<T, U, E> for AndThenConsume<F, G, R>
where
    F: FallibleBiFunction<T, U, R, E>,
    G: FallibleConsumer<R, E>,
{
    fn accept(&self, t: T, u: U) -> std::result::Result<(), E> {
        let result = self.function.apply(t, u)?;
        self.after.accept(result)
    }
}

/// Supplier returned by [`FallibleBiFunction::compose`]
#[must_use = "composed suppliers do nothing until called"]
pub struct Compose<F, S1, S2, T, U> {
    function: F,
    before1: S1,
    before2: S2,
    marker: PhantomData<fn() -> (T, U)>,
}

impl<F, S1, S2, T, U, R, E> FallibleSupplier<R, E> for Compose<F, S1, S2, T, U>
where
    F: FallibleBiFunction<T, U, R, E>,
    S1: FallibleSupplier<T, E>,
    S2: FallibleSupplier<U, E>,
{
    fn get(&self) -> std::result::Result<R, E> {
        let t = self.before1.get()?;
        let u = self.before2.get()?;
        self.function.apply(t, u)
    }
}

/// Function returned by [`FallibleBiFunction::swap`]
#[must_use = "composed functions do nothing until applied"]
pub struct Swap<F> {
    function: F,
}

impl<F, T, U, R, E> FallibleBiFunction<U, T, R, E> for Swap<F>
where
    F: FallibleBiFunction<T, U, R, E>,
{
    fn apply(&self, u: U, t: T) -> std::result::Result<R, E> {
        self.function.apply(t, u)
    }
}

/// Function returned by [`FallibleBiFunction::curry`]
#[must_use = "composed functions do nothing until applied"]
pub struct Curry<F, T> {
    function: F,
    t: T,
}

impl<F, T, U, R, E> FallibleFunction<U, R, E> for Curry<F, T>
where
    F: FallibleBiFunction<T, U, R, E>,
    T: Clone,
{
    fn apply(&self, u: U) -> std::result::Result<R, E> {
        self.function.apply(self.t.clone(), u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fallible_core::testing::fixtures::{divide, double, sum, MathError};
    use fallible_core::testing::{init_test_tracing, CallLog};
    use fallible_core::Error;
    use std::sync::Arc;

    type Step = fn(i64) -> std::result::Result<i64, MathError>;
    type Source = fn() -> std::result::Result<i64, MathError>;

    fn counting_double(
        log: &Arc<CallLog>,
    ) -> impl Fn(i64) -> std::result::Result<i64, MathError> {
        let log = log.clone();
        move |r| {
            log.record("after");
            double(r)
        }
    }

    #[test]
    fn test_sum_then_double() {
        init_test_tracing();

        let composed = sum.and_then_map(double);
        assert_eq!(composed.apply(3, 4), Ok(14));
    }

    #[test]
    fn test_divide_by_zero_skips_after() {
        let log = CallLog::new();
        let composed = divide.and_then_map(counting_double(&log));

        assert_eq!(composed.apply(5, 0), Err(MathError::DivideByZero));
        assert_eq!(log.count("after"), 0);

        assert_eq!(composed.apply(10, 5), Ok(4));
        assert_eq!(log.count("after"), 1);
    }

    #[test]
    fn test_after_failure_propagates() {
        let composed = sum.and_then_map(|r: i64| -> std::result::Result<i64, MathError> {
            Err(MathError::Negative(r))
        });
        assert_eq!(composed.apply(1, 2), Err(MathError::Negative(3)));
    }

    #[test]
    fn test_try_and_then_map_rejects_missing_after() {
        let log = CallLog::new();
        let first = {
            let log = log.clone();
            move |t: i64, u: i64| {
                log.record("self");
                sum(t, u)
            }
        };

        let result = first.try_and_then_map::<i64, Step>(None);
        assert_eq!(result.err(), Some(Error::invalid_argument("after")));
        assert!(log.is_empty());
    }

    #[test]
    fn test_try_and_then_map_with_after() {
        let composed = sum.try_and_then_map(Some(double)).unwrap();
        assert_eq!(composed.apply(1, 1), Ok(4));
    }

    #[test]
    fn test_and_then_consume() {
        let log = CallLog::new();
        let spy = log.clone();
        let consumer = divide.and_then_consume(move |r: i64| {
            assert_eq!(r, 3);
            spy.record("consumer");
            Ok(())
        });

        assert_eq!(consumer.accept(9, 3), Ok(()));
        assert_eq!(consumer.accept(9, 0), Err(MathError::DivideByZero));
        assert_eq!(log.entries(), vec!["consumer"]);
    }

    #[test]
    fn test_try_and_then_consume_rejects_missing_after() {
        let log = CallLog::new();
        let first = {
            let log = log.clone();
            move |t: i64, u: i64| {
                log.record("self");
                sum(t, u)
            }
        };

        let result =
            first.try_and_then_consume::<fn(i64) -> std::result::Result<(), MathError>>(None);
        assert_eq!(result.err(), Some(Error::invalid_argument("after")));
        assert!(log.is_empty());
    }

    #[test]
    fn test_compose_from_suppliers() {
        let supplier = sum.compose(|| Ok(2), || Ok(5));
        assert_eq!(supplier.get(), Ok(7));
    }

    #[test]
    fn test_compose_evaluates_left_to_right() {
        let log = CallLog::new();
        let before1 = {
            let log = log.clone();
            move || -> std::result::Result<i64, MathError> {
                log.record("before1");
                Ok(8)
            }
        };
        let before2 = {
            let log = log.clone();
            move || -> std::result::Result<i64, MathError> {
                log.record("before2");
                Ok(2)
            }
        };
        let function = {
            let log = log.clone();
            move |t: i64, u: i64| {
                log.record("self");
                divide(t, u)
            }
        };

        let supplier = function.compose(before1, before2);
        assert!(log.is_empty());
        assert_eq!(supplier.get(), Ok(4));
        assert_eq!(log.entries(), vec!["before1", "before2", "self"]);
    }

    #[test]
    fn test_compose_short_circuits_on_first_supplier() {
        let log = CallLog::new();
        let before2 = {
            let log = log.clone();
            move || -> std::result::Result<i64, MathError> {
                log.record("before2");
                Ok(1)
            }
        };

        let supplier = sum.compose(|| Err(MathError::Overflow), before2);
        assert_eq!(supplier.get(), Err(MathError::Overflow));
        assert!(log.is_empty());
    }

    #[test]
    fn test_try_compose_names_missing_parameter() {
        let log = CallLog::new();
        let present = {
            let log = log.clone();
            move || -> std::result::Result<i64, MathError> {
                log.record("present");
                Ok(1)
            }
        };

        let missing_first = sum.try_compose::<Source, _>(None, Some(present.clone()));
        assert_eq!(missing_first.err(), Some(Error::invalid_argument("before1")));

        let missing_second = sum.try_compose::<_, Source>(Some(present), None);
        assert_eq!(missing_second.err(), Some(Error::invalid_argument("before2")));

        let missing_both = sum.try_compose::<Source, Source>(None, None);
        assert_eq!(missing_both.err(), Some(Error::invalid_argument("before1")));

        assert!(log.is_empty());
    }

    fn assert_send_sync<V: Send + Sync>(_: &V) {}

    fn assert_adapters_send_sync<F>(function: F)
    where
        F: FallibleBiFunction<i64, i64, i64, MathError> + Clone + Send + Sync,
    {
        assert_send_sync(&function.clone().and_then_map(double));
        assert_send_sync(
            &function
                .clone()
                .and_then_consume(|_: i64| -> std::result::Result<(), MathError> { Ok(()) }),
        );
        assert_send_sync(&function.clone().compose(
            || -> std::result::Result<i64, MathError> { Ok(8) },
            || -> std::result::Result<i64, MathError> { Ok(2) },
        ));
        assert_send_sync(&function.clone().swap());
        assert_send_sync(&function.curry(1));
    }

    #[test]
    fn test_adapters_are_send_and_sync_when_parts_are() {
        assert_adapters_send_sync(divide);
        assert_adapters_send_sync(|t: i64, u: i64| sum(t, u));
    }

    #[test]
    fn test_swap_and_curry() {
        let flipped = divide.swap();
        assert_eq!(flipped.apply(2, 10), Ok(5));

        let ten_over = divide.curry(10);
        assert_eq!(ten_over.apply(5), Ok(2));
        assert_eq!(ten_over.apply(0), Err(MathError::DivideByZero));
    }
}
