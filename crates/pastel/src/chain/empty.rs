//! Memoized empty chains, one per decorator type.

use once_cell::sync::Lazy;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::chain::DecoratorChain;

type Registry = HashMap<TypeId, &'static (dyn Any + Send + Sync)>;

// Entries are leaked on insert and never removed.
static EMPTY_CHAINS: Lazy<RwLock<Registry>> = Lazy::new(|| RwLock::new(HashMap::new()));

/// Returns the canonical empty chain for `T`, creating it on first use.
pub(super) fn memoized<T>() -> &'static DecoratorChain<T>
where
    T: Send + Sync + 'static,
{
    let key = TypeId::of::<T>();

    {
        let registry = EMPTY_CHAINS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = registry.get(&key) {
            return downcast(*entry);
        }
    }

    // Another thread may have won the race between the two locks; the
    // entry API only inserts when the slot is still vacant.
    let mut registry = EMPTY_CHAINS.write().unwrap_or_else(PoisonError::into_inner);
    let entry = *registry.entry(key).or_insert_with(|| {
        tracing::trace!(decorator = type_name::<T>(), "memoizing empty decorator chain");
        let chain: &'static (dyn Any + Send + Sync) =
            Box::leak(Box::new(DecoratorChain::<T>::new()));
        chain
    });
    downcast(entry)
}

fn downcast<T: 'static>(entry: &'static (dyn Any + Send + Sync)) -> &'static DecoratorChain<T> {
    entry
        .downcast_ref()
        .expect("registry entries are keyed by their decorator TypeId")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;
    use std::thread;

    #[test]
    fn test_empty_is_memoized() {
        let first = DecoratorChain::<&str>::empty();
        let second = DecoratorChain::<&str>::empty();
        assert!(ptr::eq(first, second));
    }

    #[test]
    fn test_empty_is_empty() {
        let chain = DecoratorChain::<String>::empty();
        assert!(chain.is_empty());
        assert_eq!(*chain, DecoratorChain::new());
    }

    #[test]
    fn test_empty_survives_add() {
        let chain = DecoratorChain::<u16>::empty();
        let extended = chain.add(7);
        assert_eq!(extended.to_vec(), [7]);
        assert!(DecoratorChain::<u16>::empty().is_empty());
    }

    #[test]
    fn test_distinct_types_get_distinct_instances() {
        let bytes = DecoratorChain::<u8>::empty() as *const _ as *const ();
        let words = DecoratorChain::<u32>::empty() as *const _ as *const ();
        assert_ne!(bytes, words);
    }

    #[test]
    fn test_concurrent_first_access_yields_one_instance() {
        let addresses: Vec<usize> = (0..8)
            .map(|_| thread::spawn(|| DecoratorChain::<(u8, char)>::empty() as *const _ as usize))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
