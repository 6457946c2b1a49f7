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

use larder_common::code::{Key, Value};

use crate::metrics::CacheMetrics;

/// The operation set every bounded in-memory cache supports.
///
/// Both engines implement this contract with identical observable behavior;
/// only the eviction policy differs. The trait is object-safe, so a
/// policy-selected engine can be handed out as `Box<dyn Cache<K, V>>` (see
/// [`EvictionConfig::build`](crate::EvictionConfig::build)).
///
/// # Examples
///
/// ```
/// use larder_memory::{Cache, LruCache};
///
/// let mut cache = LruCache::new(2)?;
/// cache.put("a", 1);
/// cache.put("b", 2);
/// assert_eq!(cache.get(&"a"), Some(1));
/// assert_eq!(cache.get(&"missing"), None);
/// # Ok::<(), larder_memory::Error>(())
/// ```
pub trait Cache<K, V>
where
    K: Key,
    V: Value,
{
    /// Look up `key` and return a clone of its value.
    ///
    /// A hit marks the entry as touched (recency splice or frequency bump,
    /// depending on the engine). A miss has no side effect on entries.
    fn get(&mut self, key: &K) -> Option<V>;

    /// Insert `key` with `value`, or overwrite the stored value if the key is
    /// already present.
    ///
    /// An overwrite touches the entry exactly like a [`get`](Cache::get) hit.
    /// Inserting a brand-new key while the cache is full first evicts one
    /// entry chosen by the engine's policy. Always returns `true` for
    /// instances that passed capacity validation at construction.
    fn put(&mut self, key: K, value: V) -> bool;

    /// Remove the entry for `key`.
    ///
    /// Returns `true` if the key was present and is now gone. No touch side
    /// effects.
    fn remove(&mut self, key: &K) -> bool;

    /// Drop every entry. Never fails.
    fn clear(&mut self);

    /// Count of entries currently held.
    fn len(&self) -> usize;

    /// Whether the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum entry count, fixed at construction and strictly positive.
    fn capacity(&self) -> usize;

    /// Whether `key` is present.
    ///
    /// A pure predicate: never touches the entry, so eviction order is
    /// unaffected.
    fn contains(&self, key: &K) -> bool;

    /// Snapshot of this instance's operation counters.
    fn metrics(&self) -> CacheMetrics;
}
