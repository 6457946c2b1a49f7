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

//! Bounded in-memory caches with recency-based (lru) and frequency-based
//! (lfu) eviction behind one capability contract.
//!
//! Both engines are single-owner and synchronous. Entries live in a slab
//! arena addressed by generation-checked tokens, so the key index never
//! holds a handle that can dangle across later insertions and evictions.

mod cache;
mod config;
mod error;
mod lfu;
mod lru;
mod metrics;

pub mod prelude;
pub use prelude::*;
