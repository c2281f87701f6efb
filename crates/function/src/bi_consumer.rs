//! Two-argument consumers that may fail

use crate::{FallibleRunnable, FallibleSupplier};
use fallible_core::{check_not_null, Result};
use std::marker::PhantomData;
use tracing::trace;

/// Accepts a `T` and a `U`, produces nothing, may fail with `E`
///
/// The consuming end of a pipeline, as built by
/// [`and_then_consume`](crate::FallibleBiFunction::and_then_consume).
pub trait FallibleBiConsumer<T, U, E> {
    /// Perform this operation on the given arguments
    fn accept(&self, t: T, u: U) -> std::result::Result<(), E>;

    /// Run `after` on the same arguments once this consumer has succeeded
    fn and_then_accept<G>(self, after: G) -> AndThenAccept<Self, G>
    where
        Self: Sized,
        T: Clone,
        U: Clone,
        G: FallibleBiConsumer<T, U, E>,
    {
        trace!(combinator = "bi_consumer.and_then_accept", "composed");
        AndThenAccept { first: self, after }
    }

    /// Checked form of [`and_then_accept`](Self::and_then_accept)
    fn try_and_then_accept<G>(self, after: Option<G>) -> Result<AndThenAccept<Self, G>>
    where
        Self: Sized,
        T: Clone,
        U: Clone,
        G: FallibleBiConsumer<T, U, E>,
    {
        let after = check_not_null("after", after)?;
        Ok(self.and_then_accept(after))
    }

    /// Draw both arguments from suppliers, `before1` first
    fn accept_from<S1, S2>(self, before1: S1, before2: S2) -> AcceptFrom<Self, S1, S2, T, U>
    where
        Self: Sized,
        S1: FallibleSupplier<T, E>,
        S2: FallibleSupplier<U, E>,
    {
        trace!(combinator = "bi_consumer.accept_from", "composed");
        AcceptFrom {
            consumer: self,
            before1,
            before2,
            marker: PhantomData,
        }
    }

    /// Checked form of [`accept_from`](Self::accept_from)
    fn try_accept_from<S1, S2>(
        self,
        before1: Option<S1>,
        before2: Option<S2>,
    ) -> Result<AcceptFrom<Self, S1, S2, T, U>>
    where
        Self: Sized,
        S1: FallibleSupplier<T, E>,
        S2: FallibleSupplier<U, E>,
    {
        let before1 = check_not_null("before1", before1)?;
        let before2 = check_not_null("before2", before2)?;
        Ok(self.accept_from(before1, before2))
    }
}

impl<F, T, U, E> FallibleBiConsumer<T, U, E> for F
where
    F: Fn(T, U) -> std::result::Result<(), E>,
{
    fn accept(&self, t: T, u: U) -> std::result::Result<(), E> {
        self(t, u)
    }
}

/// Consumer returned by [`FallibleBiConsumer::and_then_accept`]
#[must_use = "composed consumers do nothing until applied"]
pub struct AndThenAccept<F, G> {
    first: F,
    after: G,
}

impl<F, G, T, U, E> FallibleBiConsumer<T, U, E> for AndThenAccept<F, G>
where
    F: FallibleBiConsumer<T, U, E>,
    G: FallibleBiConsumer<T, U, E>,
    T: Clone,
    U: Clone,
{
    fn accept(&self, t: T, u: U) -> std::result::Result<(), E> {
        self.first.accept(t.clone(), u.clone())?;
        self.after.accept(t, u)
    }
}

/// Runnable returned by [`FallibleBiConsumer::accept_from`]
#[must_use = "composed runnables do nothing until run"]
pub struct AcceptFrom<F, S1, S2, T, U> {
    consumer: F,
    before1: S1,
    before2: S2,
    marker: PhantomData<fn() -> (T, U)>,
}

impl<F, S1, S2, T, U, E> FallibleRunnable<E> for AcceptFrom<F, S1, S2, T, U>
where
    F: FallibleBiConsumer<T, U, E>,
    S1: FallibleSupplier<T, E>,
    S2: FallibleSupplier<U, E>,
{
    fn run(&self) -> std::result::Result<(), E> {
        let t = self.before1.get()?;
        let u = self.before2.get()?;
        self.consumer.accept(t, u)
    }
}
