//! Serde support: a chain is serialized as the plain sequence of its decorators.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::chain::DecoratorChain;

impl<T: Serialize> Serialize for DecoratorChain<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DecoratorChain<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
