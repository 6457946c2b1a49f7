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

/// Operation counters of one cache instance.
///
/// Counters track the instance over its whole lifetime and are not reset by
/// `clear`. Plain fields, no atomics: the cache is single-owner, so snapshots
/// are taken under the same exclusive access as the operations themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheMetrics {
    /// get hits
    pub hit: u64,
    /// get misses
    pub miss: u64,
    /// successful inserts without replaces
    pub insert: u64,
    /// successful replaces
    pub replace: u64,
    /// successful removes
    pub remove: u64,
    /// evictions caused by inserting new keys at capacity
    pub evict: u64,
}

impl CacheMetrics {
    /// Hit ratio over all lookups so far, `0.0` if there were none.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hit + self.miss;
        if total == 0 {
            return 0.0;
        }
        self.hit as f64 / total as f64
    }
}
