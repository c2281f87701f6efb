//! Single-argument consumers that may fail

use crate::{FallibleRunnable, FallibleSupplier};
use fallible_core::{check_not_null, Result};
use std::marker::PhantomData;
use tracing::trace;

/// Accepts an `A`, produces nothing, may fail with `E`
pub trait FallibleConsumer<A, E> {
    /// Perform this operation on the given argument
    fn accept(&self, a: A) -> std::result::Result<(), E>;

    /// Run `after` on the same argument once this consumer has succeeded
    ///
    /// This consumer receives a clone; `after` receives the original.
    fn and_then_accept<G>(self, after: G) -> AndThenAccept<Self, G>
    where
        Self: Sized,
        A: Clone,
        G: FallibleConsumer<A, E>,
    {
        trace!(combinator = "consumer.and_then_accept", "composed");
        AndThenAccept { first: self, after }
    }

    /// Checked form of [`and_then_accept`](Self::and_then_accept)
    fn try_and_then_accept<G>(self, after: Option<G>) -> Result<AndThenAccept<Self, G>>
    where
        Self: Sized,
        A: Clone,
        G: FallibleConsumer<A, E>,
    {
        let after = check_not_null("after", after)?;
        Ok(self.and_then_accept(after))
    }

    /// Draw the argument of this consumer from `before`
    fn accept_from<S>(self, before: S) -> AcceptFrom<Self, S, A>
    where
        Self: Sized,
        S: FallibleSupplier<A, E>,
    {
        trace!(combinator = "consumer.accept_from", "composed");
        AcceptFrom {
            consumer: self,
            before,
            marker: PhantomData,
        }
    }

    /// Checked form of [`accept_from`](Self::accept_from)
    fn try_accept_from<S>(self, before: Option<S>) -> Result<AcceptFrom<Self, S, A>>
    where
        Self: Sized,
        S: FallibleSupplier<A, E>,
    {
        let before = check_not_null("before", before)?;
        Ok(self.accept_from(before))
    }
}

impl<F, A, E> FallibleConsumer<A, E> for F
where
    F: Fn(A) -> std::result::Result<(), E>,
{
    fn accept(&self, a: A) -> std::result::Result<(), E> {
        self(a)
    }
}

/// Consumer returned by [`FallibleConsumer::and_then_accept`]
#[must_use = "composed consumers do nothing until applied"]
pub struct AndThenAccept<F, G> {
    first: F,
    after: G,
}

impl<F, G, A, E> FallibleConsumer<A, E> for AndThenAccept<F, G>
where
    F: FallibleConsumer<A, E>,
    G: FallibleConsumer<A, E>,
    A: Clone,
{
    fn accept(&self, a: A) -> std::result::Result<(), E> {
        self.first.accept(a.clone())?;
        self.after.accept(a)
    }
}

/// Runnable returned by [`FallibleConsumer::accept_from`]
#[must_use = "composed runnables do nothing until run"]
pub struct AcceptFrom<F, S, A> {
    consumer: F,
    before: S,
    marker: PhantomData<fn() -> A>,
}

impl<F, S, A, E> FallibleRunnable<E> for AcceptFrom<F, S, A>
where
    F: FallibleConsumer<A, E>,
    S: FallibleSupplier<A, E>,
{
    fn run(&self) -> std::result::Result<(), E> {
        self.consumer.accept(self.before.get()?)
    }
}
