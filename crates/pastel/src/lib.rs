//! # Pastel - composable decorator chains for terminal styling
//!
//! A [`DecoratorChain`] is an immutable, ordered list of style decorators
//! (a color, bold, underline, ...) that a styling layer later applies to a
//! string, one decorator at a time, in the order they were added.
//!
//! The chain itself knows nothing about escape codes. Decorators are opaque
//! values of any type `T`; the chain only stores, compares, hashes and
//! iterates them. Applying them is the job of the [`Decorate`] trait.
//!
//! ## Quick Start
//!
//! ```rust
//! use pastel::DecoratorChain;
//!
//! let chain = DecoratorChain::new().add("red").add("bold");
//!
//! let names: Vec<_> = chain.iter().copied().collect();
//! assert_eq!(names, ["red", "bold"]);
//! assert_eq!(chain.to_string(), r#"#<pastel::DecoratorChain decorators=["red", "bold"]>"#);
//! ```
//!
//! ## Applying Styles
//!
//! With the default `console` feature, `console::Style` is a decorator:
//!
//! ```rust
//! use console::Style;
//! use pastel::DecoratorChain;
//!
//! let chain = DecoratorChain::new()
//!     .add(Style::new().red().force_styling(true))
//!     .add(Style::new().bold().force_styling(true));
//!
//! let styled = chain.apply("warning");
//! assert!(styled.contains("\x1b[31m"));
//! assert!(styled.contains("\x1b[1m"));
//! ```
//!
//! ## The Canonical Empty Chain
//!
//! [`DecoratorChain::empty`] hands out one memoized empty chain per
//! decorator type, so repeated calls return the very same instance:
//!
//! ```rust
//! use pastel::DecoratorChain;
//!
//! let a = DecoratorChain::<&str>::empty();
//! let b = DecoratorChain::<&str>::empty();
//! assert!(std::ptr::eq(a, b));
//! ```
//!
//! ## Features
//!
//! - `console` (default): implements [`Decorate`] for `console::Style`.
//! - `serde`: serializes a chain as a plain sequence of its decorators.

mod chain;
mod decorate;

pub use chain::{DecoratorChain, Iter};
pub use decorate::Decorate;
