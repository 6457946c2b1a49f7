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

//! larder - bounded in-memory caches for Rust.
//!
//! larder memoizes expensive lookups behind a bounded-memory front. Two
//! interchangeable eviction engines implement one capability contract:
//!
//! - [`LruCache`]: evicts the entry that has gone longest without being
//!   accessed.
//! - [`LfuCache`]: evicts the entry with the lowest access count, ties
//!   broken by recency.
//!
//! Both engines are synchronous and single-owner; wrap an instance in a lock
//! of your choice if it has to be shared.
//!
//! # Examples
//!
//! Use an engine directly:
//!
//! ```
//! use larder::{Cache, LruCache};
//!
//! let mut cache = LruCache::new(2)?;
//! cache.put("a", 1);
//! cache.put("b", 2);
//!
//! // The hit keeps "a" alive, so inserting "c" evicts "b".
//! assert_eq!(cache.get(&"a"), Some(1));
//! cache.put("c", 3);
//! assert!(cache.contains(&"a"));
//! assert!(!cache.contains(&"b"));
//! # Ok::<(), larder::Error>(())
//! ```
//!
//! Or pick the engine from configuration:
//!
//! ```
//! use larder::{Cache, EvictionConfig};
//!
//! let config: EvictionConfig = serde_json::from_str(r#"{ "lfu": { "capacity": 1024 } }"#)?;
//! let mut cache = config.build::<u64, String>()?;
//! cache.put(1, "one".to_string());
//! assert_eq!(cache.get(&1).as_deref(), Some("one"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use larder_common::code::{Key, Value};
pub use larder_memory::{
    Cache, CacheMetrics, Error, EvictionConfig, LfuCache, LfuConfig, LruCache, LruConfig, Result,
};

/// Re-exports of the public surface.
pub mod prelude {
    pub use larder_memory::prelude::*;
}
