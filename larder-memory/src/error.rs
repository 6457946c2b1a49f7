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

/// In-memory cache error.
///
/// Construction is the only failing path. Every steady-state operation is
/// total and reports absence through its return value.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The requested capacity cannot hold any entry.
    #[error("capacity must be positive, got: {0}")]
    InvalidCapacity(usize),
}

/// Result type for in-memory cache operations.
pub type Result<T> = std::result::Result<T, Error>;
