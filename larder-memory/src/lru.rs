// Copyright 2026 larder Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use hashbrown::HashMap;
use larder_common::{
    code::{Key, Value},
    slab::{
        list::{LinkedSlab, List},
        Token,
    },
    strict_assert,
};
use serde::{Deserialize, Serialize};

use crate::{
    cache::Cache,
    error::{Error, Result},
    metrics::CacheMetrics,
};

/// Lru cache config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LruConfig {
    /// Maximum entry count. Must be positive.
    pub capacity: usize,
}

#[derive(Debug)]
struct LruEntry<K, V> {
    key: K,
    value: V,
}

/// Lru (least recently used) cache.
///
/// Entries are kept on one recency list, most recently used at the front.
/// Every hit and overwrite splices the entry to the front in O(1); inserting
/// a new key at capacity evicts the back of the list. All operations are
/// amortized O(1).
///
/// Not internally synchronized. Every mutating operation takes `&mut self`,
/// so exclusive ownership is checked at compile time; shared use requires an
/// external lock around the whole instance.
#[derive(Debug)]
pub struct LruCache<K, V>
where
    K: Key,
    V: Value,
{
    entries: LinkedSlab<LruEntry<K, V>>,
    /// Front = most recently used, back = eviction candidate.
    list: List,
    index: HashMap<K, Token>,

    capacity: usize,
    metrics: CacheMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Key,
    V: Value,
{
    /// Create an lru cache holding at most `capacity` entries.
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            entries: LinkedSlab::with_capacity(capacity),
            list: List::new(),
            index: HashMap::with_capacity(capacity),
            capacity,
            metrics: CacheMetrics::default(),
        })
    }

    /// Create an lru cache from its config.
    pub fn with_config(config: LruConfig) -> Result<Self> {
        Self::new(config.capacity)
    }

    /// Read the value for `key` without touching the entry.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let token = *self.index.get(key)?;
        self.entries.get(token).map(|entry| &entry.value)
    }

    fn evict(&mut self) {
        let Some(token) = self.list.tail() else {
            return;
        };
        // Drop the index entry first, then the list node.
        if let Some(entry) = self.entries.get(token) {
            let removed = self.index.remove(&entry.key);
            strict_assert!(removed.is_some());
        }
        self.entries.remove(&mut self.list, token);
        self.metrics.evict += 1;
        tracing::trace!("evicted least recently used entry");
    }
}

impl<K, V> Cache<K, V> for LruCache<K, V>
where
    K: Key,
    V: Value,
{
    fn get(&mut self, key: &K) -> Option<V> {
        let token = match self.index.get(key) {
            Some(token) => *token,
            None => {
                self.metrics.miss += 1;
                return None;
            }
        };
        self.entries.move_to_front(&mut self.list, token);
        self.metrics.hit += 1;
        self.entries.get(token).map(|entry| entry.value.clone())
    }

    fn put(&mut self, key: K, value: V) -> bool {
        if let Some(&token) = self.index.get(&key) {
            if let Some(entry) = self.entries.get_mut(token) {
                entry.value = value;
            }
            self.entries.move_to_front(&mut self.list, token);
            self.metrics.replace += 1;
            return true;
        }

        if self.index.len() == self.capacity {
            self.evict();
        }

        let token = self.entries.push_front(&mut self.list, LruEntry { key: key.clone(), value });
        self.index.insert(key, token);
        self.metrics.insert += 1;
        true
    }

    fn remove(&mut self, key: &K) -> bool {
        let Some(token) = self.index.remove(key) else {
            return false;
        };
        let removed = self.entries.remove(&mut self.list, token);
        strict_assert!(removed.is_some());
        self.metrics.remove += 1;
        true
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.list = List::new();
        self.index.clear();
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn metrics(&self) -> CacheMetrics {
        self.metrics
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    type TestLru = LruCache<u64, u64>;

    impl<K, V> LruCache<K, V>
    where
        K: Key,
        V: Value,
    {
        /// Keys from most to least recently used.
        fn dump(&self) -> Vec<K> {
            self.entries.iter(&self.list).map(|entry| entry.key.clone()).collect_vec()
        }

        fn validate(&self) {
            assert!(self.len() <= self.capacity());
            assert_eq!(self.index.len(), self.list.len());
            assert_eq!(self.entries.len(), self.list.len());
            for (key, &token) in self.index.iter() {
                let entry = self.entries.get(token).expect("indexed token must be live");
                assert!(entry.key == *key);
            }
        }
    }

    #[test]
    fn test_lru_capacity_must_be_positive() {
        let res = TestLru::new(0);
        assert!(matches!(res, Err(Error::InvalidCapacity(0))));
    }

    #[test]
    fn test_lru_get_put() {
        let mut lru = TestLru::new(4).unwrap();
        assert!(lru.is_empty());
        assert_eq!(lru.capacity(), 4);

        assert!(lru.put(1, 10));
        assert!(lru.put(2, 20));
        assert_eq!(lru.len(), 2);
        assert_eq!(lru.get(&1), Some(10));
        assert_eq!(lru.get(&3), None);
        lru.validate();
    }

    #[test]
    fn test_lru_recency_order() {
        let mut lru = TestLru::new(4).unwrap();
        for i in 1..=4 {
            lru.put(i, i);
        }
        assert_eq!(lru.dump(), vec![4, 3, 2, 1]);

        // A hit splices to the front.
        lru.get(&2);
        assert_eq!(lru.dump(), vec![2, 4, 3, 1]);

        // An overwrite touches exactly like a hit.
        lru.put(3, 33);
        assert_eq!(lru.dump(), vec![3, 2, 4, 1]);
        assert_eq!(lru.peek(&3), Some(&33));
        lru.validate();
    }

    #[test_log::test]
    fn test_lru_eviction() {
        // put(1); put(2); get(1); put(3) evicts key 2.
        let mut lru = LruCache::new(2).unwrap();
        lru.put(1, "a");
        lru.put(2, "b");
        assert_eq!(lru.get(&1), Some("a"));
        lru.put(3, "c");

        assert!(lru.contains(&1));
        assert!(lru.contains(&3));
        assert!(!lru.contains(&2));
        assert_eq!(lru.len(), 2);
        assert_eq!(lru.metrics().evict, 1);
        lru.validate();
    }

    #[test]
    fn test_lru_eviction_only_on_new_key_at_capacity() {
        let mut lru = TestLru::new(2).unwrap();
        lru.put(1, 1);
        lru.put(2, 2);

        // Overwrites never evict.
        lru.put(1, 11);
        lru.put(2, 22);
        assert_eq!(lru.metrics().evict, 0);
        assert_eq!(lru.len(), 2);

        lru.put(3, 3);
        assert_eq!(lru.metrics().evict, 1);
        assert_eq!(lru.len(), 2);
        lru.validate();
    }

    #[test]
    fn test_lru_contains_does_not_touch() {
        let mut lru = TestLru::new(2).unwrap();
        lru.put(1, 1);
        lru.put(2, 2);

        // Key 1 is the eviction candidate and checking it must not change that.
        assert!(lru.contains(&1));
        assert_eq!(lru.peek(&1), Some(&1));
        lru.put(3, 3);
        assert!(!lru.contains(&1));
        assert!(lru.contains(&2));
        assert!(lru.contains(&3));
    }

    #[test]
    fn test_lru_remove() {
        let mut lru = TestLru::new(4).unwrap();
        lru.put(1, 1);
        lru.put(2, 2);

        assert!(lru.remove(&1));
        assert!(!lru.contains(&1));
        assert_eq!(lru.len(), 1);

        // Removing an absent key reports false and changes nothing.
        assert!(!lru.remove(&99));
        assert_eq!(lru.len(), 1);
        assert_eq!(lru.dump(), vec![2]);
        lru.validate();
    }

    #[test]
    fn test_lru_clear() {
        let mut lru = TestLru::new(4).unwrap();
        for i in 0..4 {
            lru.put(i, i);
        }
        lru.clear();
        assert_eq!(lru.len(), 0);
        for i in 0..4 {
            assert!(!lru.contains(&i));
        }

        // The cache is usable after clear.
        lru.put(42, 42);
        assert_eq!(lru.get(&42), Some(42));
        lru.validate();
    }

    #[test]
    fn test_lru_metrics() {
        let mut lru = TestLru::new(2).unwrap();
        lru.put(1, 1);
        lru.put(1, 11);
        lru.put(2, 2);
        lru.get(&1);
        lru.get(&9);
        lru.put(3, 3);
        lru.remove(&3);

        let metrics = lru.metrics();
        assert_eq!(metrics.insert, 3);
        assert_eq!(metrics.replace, 1);
        assert_eq!(metrics.hit, 1);
        assert_eq!(metrics.miss, 1);
        assert_eq!(metrics.evict, 1);
        assert_eq!(metrics.remove, 1);
        assert_eq!(metrics.hit_ratio(), 0.5);
    }

    #[test]
    fn test_lru_differential_random() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        const CAPACITY: usize = 8;

        let mut rng = StdRng::seed_from_u64(42);
        let mut lru = TestLru::new(CAPACITY).unwrap();
        // Reference model: vector ordered from most to least recently used.
        let mut model: Vec<(u64, u64)> = Vec::new();

        for _ in 0..10_000 {
            let key = rng.random_range(0..32u64);
            match rng.random_range(0..10u8) {
                0..=4 => {
                    let value = rng.random_range(0..1000u64);
                    lru.put(key, value);
                    if let Some(pos) = model.iter().position(|(k, _)| *k == key) {
                        model.remove(pos);
                    } else if model.len() == CAPACITY {
                        model.pop();
                    }
                    model.insert(0, (key, value));
                }
                5..=7 => {
                    let got = lru.get(&key);
                    match model.iter().position(|(k, _)| *k == key) {
                        Some(pos) => {
                            let (k, v) = model.remove(pos);
                            assert_eq!(got, Some(v));
                            model.insert(0, (k, v));
                        }
                        None => assert_eq!(got, None),
                    }
                }
                8 => {
                    let present = model.iter().any(|(k, _)| *k == key);
                    assert_eq!(lru.remove(&key), present);
                    model.retain(|(k, _)| *k != key);
                }
                _ => {
                    assert_eq!(lru.contains(&key), model.iter().any(|(k, _)| *k == key));
                }
            }
            assert_eq!(lru.len(), model.len());
            lru.validate();
        }

        assert_eq!(lru.dump(), model.iter().map(|(k, _)| *k).collect_vec());
    }
}
