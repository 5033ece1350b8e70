//! The decorator chain value type.

use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::sync::Arc;

/// An immutable, ordered sequence of decorators.
///
/// Decorators are opaque values: the chain stores them in insertion order
/// and never looks inside them. Every "change" produces a new chain, and
/// clones share storage, so a chain can be handed to any number of threads
/// without coordination.
///
/// Equality and hashing are structural over the ordered decorators, which
/// makes chains usable as keys in hash-based containers.
///
/// # Example
///
/// ```rust
/// use pastel::DecoratorChain;
///
/// let base = DecoratorChain::new().add("red");
/// let bold = base.add("bold");
///
/// assert_eq!(base.len(), 1);
/// assert_eq!(bold.len(), 2);
/// assert_eq!(bold, DecoratorChain::new().add("red").add("bold"));
/// assert_ne!(bold, DecoratorChain::new().add("bold").add("red"));
/// ```
#[derive(PartialEq, Eq, Hash)]
pub struct DecoratorChain<T> {
    decorators: Arc<[T]>,
}

impl<T> DecoratorChain<T> {
    /// Creates a chain with no decorators.
    pub fn new() -> Self {
        Self {
            decorators: Arc::from(Vec::new()),
        }
    }

    /// Returns the process-wide canonical empty chain for decorator type `T`.
    ///
    /// The instance is created on first access and every later call returns
    /// the same reference, so callers may compare results with
    /// [`std::ptr::eq`] rather than `==`.
    pub fn empty() -> &'static Self
    where
        T: Send + Sync + 'static,
    {
        super::empty::memoized()
    }

    /// Returns a new chain with `decorator` appended.
    ///
    /// The receiver is left untouched. Duplicates are kept as-is.
    pub fn add(&self, decorator: T) -> Self
    where
        T: Clone,
    {
        let mut decorators = Vec::with_capacity(self.decorators.len() + 1);
        decorators.extend(self.iter().cloned());
        decorators.push(decorator);
        Self::from(decorators)
    }

    /// Iterates over the decorators in insertion order.
    ///
    /// Each call starts again from the first decorator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.decorators.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.iter().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if any decorator in the chain equals `decorator`.
    pub fn contains(&self, decorator: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|d| d == decorator)
    }

    /// Copies the decorators into a vector, in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Compares against a value of unknown type.
    ///
    /// Returns `false` for anything that isn't a `DecoratorChain<T>`.
    ///
    /// ```rust
    /// use pastel::DecoratorChain;
    ///
    /// let chain = DecoratorChain::new().add("foo").add("bar");
    /// assert!(chain.eq_any(&DecoratorChain::new().add("foo").add("bar")));
    /// assert!(!chain.eq_any(&"other"));
    /// ```
    pub fn eq_any(&self, other: &dyn Any) -> bool
    where
        T: PartialEq + 'static,
    {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    /// Strict counterpart of [`eq_any`](Self::eq_any).
    ///
    /// Decorators are compared with their own equality and no coercion is
    /// ever applied, so the two relations coincide; this one additionally
    /// requires `T: Eq`, matching the bound `Hash`-keyed containers need.
    pub fn eql_any(&self, other: &dyn Any) -> bool
    where
        T: Eq + 'static,
    {
        self.eq_any(other)
    }

    /// Returns a numeric digest of the ordered decorators.
    ///
    /// Uses a fixed-key hasher, so equal chains always produce the same
    /// digest, within and across runs of the same build.
    pub fn digest(&self) -> u64
    where
        T: Hash,
    {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl<T> Clone for DecoratorChain<T> {
    fn clone(&self) -> Self {
        Self {
            decorators: Arc::clone(&self.decorators),
        }
    }
}

impl<T> Default for DecoratorChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for DecoratorChain<T> {
    fn from(decorators: Vec<T>) -> Self {
        Self {
            decorators: Arc::from(decorators),
        }
    }
}

impl<T> FromIterator<T> for DecoratorChain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T> IntoIterator for &'a DecoratorChain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for DecoratorChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoratorChain")
            .field("decorators", &&*self.decorators)
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Display for DecoratorChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("#<pastel::DecoratorChain decorators=[")?;
        for (i, decorator) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", decorator)?;
        }
        f.write_str("]>")
    }
}

/// In-order iterator over the decorators of a [`DecoratorChain`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
