//! Single-argument functions that may fail

use crate::{FallibleConsumer, FallibleSupplier};
use fallible_core::{check_not_null, Result};
use std::marker::PhantomData;
use tracing::trace;

/// A function from `A` to `B` that may fail with `E`
///
/// Implemented for every `Fn(A) -> Result<B, E>`, so closures and `fn` items
/// can be used directly.
pub trait FallibleFunction<A, B, E> {
    /// Apply this function to the given argument
    fn apply(&self, a: A) -> std::result::Result<B, E>;

    /// Feed the result of this function into `after`
    ///
    /// `after` only runs when this function succeeds.
    fn and_then<C, G>(self, after: G) -> AndThen<Self, G, B>
    where
        Self: Sized,
        G: FallibleFunction<B, C, E>,
    {
        trace!(combinator = "function.and_then", "composed");
        AndThen {
            function: self,
            after,
            marker: PhantomData,
        }
    }

    /// Checked form of [`and_then`](Self::and_then)
    fn try_and_then<C, G>(self, after: Option<G>) -> Result<AndThen<Self, G, B>>
    where
        Self: Sized,
        G: FallibleFunction<B, C, E>,
    {
        let after = check_not_null("after", after)?;
        Ok(self.and_then(after))
    }

    /// Hand the result of this function to `after`
    fn and_then_consume<G>(self, after: G) -> AndThenConsume<Self, G, B>
    where
        Self: Sized,
        G: FallibleConsumer<B, E>,
    {
        trace!(combinator = "function.and_then_consume", "composed");
        AndThenConsume {
            function: self,
            after,
            marker: PhantomData,
        }
    }

    /// Checked form of [`and_then_consume`](Self::and_then_consume)
    fn try_and_then_consume<G>(self, after: Option<G>) -> Result<AndThenConsume<Self, G, B>>
    where
        Self: Sized,
        G: FallibleConsumer<B, E>,
    {
        let after = check_not_null("after", after)?;
        Ok(self.and_then_consume(after))
    }

    /// Draw the argument of this function from `before`
    fn compose<S>(self, before: S) -> Compose<Self, S, A>
    where
        Self: Sized,
        S: FallibleSupplier<A, E>,
    {
        trace!(combinator = "function.compose", "composed");
        Compose {
            function: self,
            before,
            marker: PhantomData,
        }
    }

    /// Checked form of [`compose`](Self::compose)
    fn try_compose<S>(self, before: Option<S>) -> Result<Compose<Self, S, A>>
    where
        Self: Sized,
        S: FallibleSupplier<A, E>,
    {
        let before = check_not_null("before", before)?;
        Ok(self.compose(before))
    }
}

impl<F, A, B, E> FallibleFunction<A, B, E> for F
where
    F: Fn(A) -> std::result::Result<B, E>,
{
    fn apply(&self, a: A) -> std::result::Result<B, E> {
        self(a)
    }
}

/// A function that returns its argument unchanged and never fails
pub fn identity<A, E>() -> impl FallibleFunction<A, A, E> {
    |a: A| -> std::result::Result<A, E> { Ok(a) }
}

/// Function returned by [`FallibleFunction::and_then`]
#[must_use = "composed functions do nothing until applied"]
pub struct AndThen<F, G, B> {
    function: F,
    after: G,
    marker: PhantomData<fn() -> B>,
}

impl<F, G, A, B, C, E> FallibleFunction<A, C, E> for AndThen<F, G, B>
where
    F: FallibleFunction<A, B, E>,
    G: FallibleFunction<B, C, E>,
{
    fn apply(&self, a: A) -> std::result::Result<C, E> {
        self.after.apply(self.function.apply(a)?)
    }
}

/// Consumer returned by [`FallibleFunction::and_then_consume`]
#[must_use = "composed consumers do nothing until applied"]
pub struct AndThenConsume<F, G, B> {
    function: F,
    after: G,
    marker: PhantomData<fn() -> B>,
}

impl<F, G, A, B, E> FallibleConsumer<A, E> for AndThenConsume<F, G, B>
where
    F: FallibleFunction<A, B, E>,
    G: FallibleConsumer<B, E>,
{
    fn accept(&self, a: A) -> std::result::Result<(), E> {
        self.after.accept(self.function.apply(a)?)
    }
}

/// Supplier returned by [`FallibleFunction::compose`]
#[must_use = "composed suppliers do nothing until called"]
pub struct Compose<F, S, A> {
    function: F,
    before: S,
    marker: PhantomData<fn() -> A>,
}

impl<F, S, A, B, E> FallibleSupplier<B, E> for Compose<F, S, A>
where
    F: FallibleFunction<A, B, E>,
    S: FallibleSupplier<A, E>,
{
    fn get(&self) -> std::result::Result<B, E> {
        self.function.apply(self.before.get()?)
    }
}
