//! Composable functions that may fail with a typed error.
//!
//! The centre of this crate is [`FallibleBiFunction`]: a two-argument function
//! returning `Result<R, E>`, with combinators that build pipelines around it.
//! The other capabilities are its collaborators and are composable in their
//! own right:
//!
//! | capability | shape |
//! |---|---|
//! | [`FallibleFunction<A, B, E>`] | `A -> Result<B, E>` |
//! | [`FallibleConsumer<A, E>`] | `A -> Result<(), E>` |
//! | [`FallibleSupplier<A, E>`] | `() -> Result<A, E>` |
//! | [`FallibleRunnable<E>`] | `() -> Result<(), E>` |
//! | [`FallibleBiFunction<T, U, R, E>`] | `(T, U) -> Result<R, E>` |
//! | [`FallibleBiConsumer<T, U, E>`] | `(T, U) -> Result<(), E>` |
//!
//! Each is implemented for the matching `Fn` closures and `fn` items.
//! Combinators return named adapters, such as [`bi_function::AndThenMap`] or
//! [`bi_function::Compose`], which implement the matching capability and are
//! `Send`/`Sync` whenever the parts they hold are.
//!
//! Errors raised by the composed functions are passed through untouched; the
//! combinators never catch, wrap, or log them. The only error this crate
//! raises itself is [`fallible_core::Error::InvalidArgument`], from the `try_*`
//! combinators when handed an absent argument.
//!
//! ```rust
//! use fallible_function::prelude::*;
//!
//! let sum = |t: i32, u: i32| -> Result<i32, String> { Ok(t + u) };
//! let doubled = sum.and_then_map(|r: i32| Ok(r * 2));
//! assert_eq!(doubled.apply(3, 4), Ok(14));
//!
//! let seven = (|t: i32, u: i32| -> Result<i32, String> { Ok(t + u) })
//!     .compose(|| Ok(2), || Ok(5));
//! assert_eq!(seven.get(), Ok(7));
//! ```

pub mod bi_consumer;
pub mod bi_function;
pub mod consumer;
pub mod function;
pub mod supplier;

pub use bi_consumer::FallibleBiConsumer;
pub use bi_function::FallibleBiFunction;
pub use consumer::FallibleConsumer;
pub use function::{identity, FallibleFunction};
pub use supplier::{constant, FallibleRunnable, FallibleSupplier};

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::{
        constant, identity, FallibleBiConsumer, FallibleBiFunction, FallibleConsumer,
        FallibleFunction, FallibleRunnable, FallibleSupplier,
    };
}
