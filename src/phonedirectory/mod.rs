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


mod helper_constants;
mod helper_functions;
mod helper_types;
pub mod enums;
pub mod errors;
pub mod phonedirectory;

use std::sync::LazyLock;

pub use enums::{AlphaForm, CountryKey};
pub use helper_functions::normalize_number;
pub use helper_types::ValidatedPhone;
pub(crate) use helper_constants::{
    ALPHA3_LENGTH, MAX_STORED_VALUE_PARTS, PLUS_SIGN, STORED_VALUE_SEPARATOR,
};
pub use crate::phonedirectory::phonedirectory::PhoneDirectory;

/// The compiled-in directory, parsed on first use and shared afterwards.
pub static PHONE_DIRECTORY: LazyLock<PhoneDirectory> = LazyLock::new(|| {
    PhoneDirectory::new()
});
