// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use thiserror::Error;

/// Reasons a phone directory cannot be built from the given data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Could not parse phone directory data: {0}")]
    InvalidData(String),
    #[error("Alpha-2 code {0} is used by more than one country")]
    DuplicateAlpha2(String),
    #[error("Alpha-3 code {0} is used by more than one country")]
    DuplicateAlpha3(String),
    #[error("Country {0} has no valid national number lengths")]
    MissingNumberLengths(String),
}
