//! Decorator chains.
//!
//! This module provides:
//!
//! - [`DecoratorChain`]: an immutable, ordered sequence of decorators
//! - [`Iter`]: the in-order iterator over a chain's decorators
//!
//! Empty-chain memoization lives in a private submodule and is reached
//! through [`DecoratorChain::empty`].

#[allow(clippy::module_inception)]
mod chain;
mod empty;
#[cfg(feature = "serde")]
mod serialize;

pub use chain::{DecoratorChain, Iter};
