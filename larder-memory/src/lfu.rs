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

/// Lfu cache config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LfuConfig {
    /// Maximum entry count. Must be positive.
    pub capacity: usize,
}

#[derive(Debug)]
struct LfuEntry<K, V> {
    key: K,
    value: V,
    freq: usize,
}

/// Lfu (least frequently used) cache.
///
/// Entries are bucketed by access frequency. Each bucket is ordered by
/// recency, most recently touched at the front, so ties at the lowest
/// frequency are broken by evicting the least recently touched entry.
/// An entry starts at frequency 1 and is bumped by every hit and overwrite,
/// moving from bucket `f` to the front of bucket `f + 1` without
/// invalidating its handle.
///
/// `min_freq` tracks the lowest non-empty bucket (0 means the cache is
/// empty, never a valid frequency). It is recomputed only when the bucket
/// that just emptied was itself the minimum, which keeps eviction selection
/// amortized O(1).
///
/// Not internally synchronized, same single-owner model as
/// [`LruCache`](crate::LruCache).
#[derive(Debug)]
pub struct LfuCache<K, V>
where
    K: Key,
    V: Value,
{
    entries: LinkedSlab<LfuEntry<K, V>>,
    /// Frequency -> bucket head. Buckets are never left empty.
    buckets: HashMap<usize, List>,
    index: HashMap<K, Token>,

    /// Lowest frequency with a non-empty bucket, 0 when the cache is empty.
    min_freq: usize,

    capacity: usize,
    metrics: CacheMetrics,
}

impl<K, V> LfuCache<K, V>
where
    K: Key,
    V: Value,
{
    /// Create an lfu cache holding at most `capacity` entries.
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            entries: LinkedSlab::with_capacity(capacity),
            buckets: HashMap::new(),
            index: HashMap::with_capacity(capacity),
            min_freq: 0,
            capacity,
            metrics: CacheMetrics::default(),
        })
    }

    /// Create an lfu cache from its config.
    pub fn with_config(config: LfuConfig) -> Result<Self> {
        Self::new(config.capacity)
    }

    /// Read the value for `key` without touching the entry.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let token = *self.index.get(key)?;
        self.entries.get(token).map(|entry| &entry.value)
    }

    /// Access frequency of `key`, without bumping it.
    pub fn frequency(&self, key: &K) -> Option<usize> {
        let token = *self.index.get(key)?;
        self.entries.get(token).map(|entry| entry.freq)
    }

    /// Move the entry from bucket `freq` to the front of bucket `freq + 1`.
    fn bump(&mut self, token: Token) {
        let Some(freq) = self.entries.get(token).map(|entry| entry.freq) else {
            return;
        };
        let Some(mut from) = self.buckets.remove(&freq) else {
            strict_assert!(false, "entry frequency must have a bucket");
            return;
        };
        let mut to = self.buckets.remove(&(freq + 1)).unwrap_or_default();

        self.entries.transfer_front(&mut from, &mut to, token);
        if let Some(entry) = self.entries.get_mut(token) {
            entry.freq = freq + 1;
        }

        let emptied = from.is_empty();
        if !emptied {
            self.buckets.insert(freq, from);
        }
        self.buckets.insert(freq + 1, to);

        if emptied && freq == self.min_freq {
            self.min_freq = self.min_bucket_freq();
        }
    }

    /// Evict the least recently touched entry of the lowest-frequency bucket.
    fn evict(&mut self) {
        let Some(mut bucket) = self.buckets.remove(&self.min_freq) else {
            return;
        };
        if let Some(entry) = self.entries.pop_back(&mut bucket) {
            let removed = self.index.remove(&entry.key);
            strict_assert!(removed.is_some());
            self.metrics.evict += 1;
            tracing::trace!(frequency = entry.freq, "evicted least frequently used entry");
        }
        // The caller inserts at frequency 1 next and resets `min_freq`, so an
        // emptied minimum bucket needs no recompute here.
        if !bucket.is_empty() {
            self.buckets.insert(self.min_freq, bucket);
        }
    }

    fn min_bucket_freq(&self) -> usize {
        self.buckets.keys().copied().min().unwrap_or(0)
    }
}

impl<K, V> Cache<K, V> for LfuCache<K, V>
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
        self.bump(token);
        self.metrics.hit += 1;
        self.entries.get(token).map(|entry| entry.value.clone())
    }

    fn put(&mut self, key: K, value: V) -> bool {
        if let Some(&token) = self.index.get(&key) {
            if let Some(entry) = self.entries.get_mut(token) {
                entry.value = value;
            }
            self.bump(token);
            self.metrics.replace += 1;
            return true;
        }

        if self.index.len() == self.capacity {
            self.evict();
        }

        let mut bucket = self.buckets.remove(&1).unwrap_or_default();
        let token = self.entries.push_front(
            &mut bucket,
            LfuEntry {
                key: key.clone(),
                value,
                freq: 1,
            },
        );
        self.buckets.insert(1, bucket);
        self.index.insert(key, token);
        // A fresh entry's frequency of 1 is never above any existing one.
        self.min_freq = 1;
        self.metrics.insert += 1;
        true
    }

    fn remove(&mut self, key: &K) -> bool {
        let Some(token) = self.index.remove(key) else {
            return false;
        };
        let Some(freq) = self.entries.get(token).map(|entry| entry.freq) else {
            strict_assert!(false, "indexed token must be live");
            return false;
        };
        let Some(mut bucket) = self.buckets.remove(&freq) else {
            strict_assert!(false, "entry frequency must have a bucket");
            return false;
        };
        let removed = self.entries.remove(&mut bucket, token);
        strict_assert!(removed.is_some());

        if !bucket.is_empty() {
            self.buckets.insert(freq, bucket);
        } else if freq == self.min_freq {
            self.min_freq = self.min_bucket_freq();
        }
        self.metrics.remove += 1;
        true
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.buckets.clear();
        self.index.clear();
        self.min_freq = 0;
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
