use crate::priority::RandomPriority;
use crate::treap::multiset::Treap;
use crate::treap::tree;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

// A treap is written out node by node, priorities included, so that reading it back restores
// the exact shape.
impl<T, S> Serialize for Treap<T, S>
where
    T: Serialize,
{
    fn serialize<V>(&self, serializer: V) -> Result<V::Ok, V::Error>
    where
        V: Serializer,
    {
        self.root.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Treap<T>
where
    T: Ord + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let root: tree::Tree<T> = Deserialize::deserialize(deserializer)?;
        tree::validate(&root).map_err(de::Error::custom)?;
        Ok(Treap {
            root,
            priorities: RandomPriority::new(),
        })
    }
}
