//! Applying decorator chains to text.
//!
//! The chain only orders decorators; what a decorator does to a string is
//! defined by [`Decorate`]. With the `console` feature enabled,
//! `console::Style` implements it, so a chain of styles can be applied
//! directly.

use std::sync::Arc;

use crate::chain::DecoratorChain;

/// A single text transformation.
///
/// # Example
///
/// ```rust
/// use pastel::{Decorate, DecoratorChain};
///
/// #[derive(Clone)]
/// struct Brackets;
///
/// impl Decorate for Brackets {
///     fn decorate(&self, text: &str) -> String {
///         format!("[{}]", text)
///     }
/// }
///
/// let chain = DecoratorChain::new().add(Brackets).add(Brackets);
/// assert_eq!(chain.apply("hi"), "[[hi]]");
/// ```
pub trait Decorate {
    fn decorate(&self, text: &str) -> String;
}

impl<D: Decorate + ?Sized> Decorate for &D {
    fn decorate(&self, text: &str) -> String {
        (**self).decorate(text)
    }
}

impl<D: Decorate + ?Sized> Decorate for Box<D> {
    fn decorate(&self, text: &str) -> String {
        (**self).decorate(text)
    }
}

impl<D: Decorate + ?Sized> Decorate for Arc<D> {
    fn decorate(&self, text: &str) -> String {
        (**self).decorate(text)
    }
}

/// An unset decorator leaves the text alone.
impl<D: Decorate> Decorate for Option<D> {
    fn decorate(&self, text: &str) -> String {
        match self {
            Some(decorator) => decorator.decorate(text),
            None => text.to_string(),
        }
    }
}

#[cfg(feature = "console")]
impl Decorate for console::Style {
    fn decorate(&self, text: &str) -> String {
        self.apply_to(text).to_string()
    }
}

impl<T: Decorate> DecoratorChain<T> {
    /// Applies every decorator to `text`, first-added innermost.
    ///
    /// An empty chain returns the text unchanged.
    pub fn apply(&self, text: &str) -> String {
        self.iter()
            .fold(text.to_string(), |acc, decorator| decorator.decorate(&acc))
    }
}
