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


use std::collections::BTreeMap;

use thiserror::Error;

/// Problems with a submitted phone value. The host maps them to localized
/// messages; `Display` gives the English text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FieldError {
    #[error("Invalid data")]
    InvalidData,
    #[error("This value has already been used.")]
    ValueAlreadyUsed,
    /// A unique field was validated without access to the stored values.
    #[error("This value could not be checked for uniqueness.")]
    UniquenessNotChecked,
}

/// Problems with the settings of a phone field definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefineError {
    /// Another phone field is already copied into the same user field.
    #[error("This field already associated with {0} field")]
    FieldAlreadyAssociated(String),
}

/// Errors keyed by form input name.
pub type FieldErrors = BTreeMap<String, Vec<FieldError>>;

pub(crate) fn push_error(errors: &mut FieldErrors, input_name: &str, error: FieldError) {
    errors.entry(input_name.to_owned()).or_default().push(error);
}
