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
use serde::{Deserialize, Serialize};

use crate::{
    cache::Cache,
    error::Result,
    lfu::{LfuCache, LfuConfig},
    lru::{LruCache, LruConfig},
};

/// Eviction policy selection with its config.
///
/// Deserializable, so an application's configuration loader can pick the
/// engine and capacity without code changes:
///
/// ```
/// use larder_memory::{Cache, EvictionConfig};
///
/// let config: EvictionConfig = serde_json::from_str(r#"{ "lfu": { "capacity": 64 } }"#)?;
/// let mut cache = config.build::<String, u64>()?;
/// cache.put("answer".to_string(), 42);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvictionConfig {
    /// Recency-based eviction.
    Lru(LruConfig),
    /// Frequency-based eviction.
    Lfu(LfuConfig),
}

impl From<LruConfig> for EvictionConfig {
    fn from(config: LruConfig) -> Self {
        Self::Lru(config)
    }
}

impl From<LfuConfig> for EvictionConfig {
    fn from(config: LfuConfig) -> Self {
        Self::Lfu(config)
    }
}

impl EvictionConfig {
    /// The configured capacity.
    pub fn capacity(&self) -> usize {
        match self {
            Self::Lru(config) => config.capacity,
            Self::Lfu(config) => config.capacity,
        }
    }

    /// Build the configured engine behind the capability contract.
    ///
    /// Returns [`Error::InvalidCapacity`](crate::Error::InvalidCapacity) if
    /// the configured capacity is zero.
    pub fn build<K, V>(&self) -> Result<Box<dyn Cache<K, V>>>
    where
        K: Key + 'static,
        V: Value + 'static,
    {
        let cache: Box<dyn Cache<K, V>> = match self {
            Self::Lru(config) => Box::new(LruCache::with_config(config.clone())?),
            Self::Lfu(config) => Box::new(LfuCache::with_config(config.clone())?),
        };
        tracing::debug!(
            capacity = self.capacity(),
            policy = match self {
                Self::Lru(_) => "lru",
                Self::Lfu(_) => "lfu",
            },
            "built in-memory cache"
        );
        Ok(cache)
    }
}
