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

use std::hash::Hash;

/// Requirements on cache keys.
///
/// `Clone` is required because both the ordered list node and the index map
/// own a copy of the key.
pub trait Key: Eq + Hash + Clone {}
impl<T: Eq + Hash + Clone> Key for T {}

/// Requirements on cache values.
///
/// Lookups return a clone of the stored value, so no reference into cache
/// storage ever escapes to callers.
pub trait Value: Clone {}
impl<T: Clone> Value for T {}
