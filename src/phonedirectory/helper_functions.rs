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


use std::{
    collections::HashMap,
    sync::LazyLock,
};

use regex::Regex;

use crate::{CountryPhoneDataCollection, CountryPhoneRecord};

use super::{errors::DirectoryError, helper_constants::NON_DIGITS_PATTERN};

static NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NON_DIGITS_PATTERN).expect("Invalid constant pattern!"));

/// Normalizes a phone number by dropping everything that is not an ASCII
/// digit and reading the rest as an integer.
///
/// Empty input, or input without any digit, normalizes to `0`. Digit strings
/// too long for `u64` saturate to `u64::MAX`.
///
/// Numbers are integers here, not digit strings: leading zeros are lost, so
/// `"0501234567"` and `"501234567"` normalize to the same value. Stored values
/// depend on this, so it is kept as is.
pub fn normalize_number(raw: &str) -> u64 {
    let digits = NON_DIGITS.replace_all(raw, "");
    parse_digits(&digits)
}

/// Parses a string made of ASCII digits only.
pub(super) fn parse_digits(digits: &str) -> u64 {
    if digits.is_empty() {
        return 0;
    }
    // the only possible failure left is overflow
    digits.parse().unwrap_or(u64::MAX)
}

/// Number of decimal digits of the number.
pub(super) fn digit_count(number: u64) -> usize {
    let mut buf = itoa::Buffer::new();
    buf.format(number).len()
}

/// Returns true if `number` starts with any of `prefixes`. The whole list is
/// scanned before giving up.
pub(super) fn starts_with_any_prefix(number: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|prefix| number.starts_with(prefix.as_str()))
}

/// Parses the text format directory table.
pub(super) fn load_directory_data(data: &str) -> Result<CountryPhoneDataCollection, DirectoryError> {
    protobuf::text_format::parse_from_str::<CountryPhoneDataCollection>(data)
        .map_err(|err| DirectoryError::InvalidData(err.to_string()))
}

/// Alpha code to record position maps, keyed by upper-cased code.
pub(super) struct AlphaIndex {
    pub alpha2: HashMap<String, usize>,
    pub alpha3: HashMap<String, usize>,
}

/// Checks the directory invariants and builds the alpha code indexes:
/// both alpha codes are unique and every country accepts at least one
/// national number length.
pub(super) fn build_alpha_index(records: &[CountryPhoneRecord]) -> Result<AlphaIndex, DirectoryError> {
    let mut index = AlphaIndex {
        alpha2: HashMap::with_capacity(records.len()),
        alpha3: HashMap::with_capacity(records.len()),
    };

    for (position, record) in records.iter().enumerate() {
        if record.national_number_lengths.is_empty() {
            return Err(DirectoryError::MissingNumberLengths(record.alpha2.clone()));
        }

        let alpha2 = record.alpha2.to_ascii_uppercase();
        if index.alpha2.insert(alpha2, position).is_some() {
            return Err(DirectoryError::DuplicateAlpha2(record.alpha2.clone()));
        }

        let alpha3 = record.alpha3.to_ascii_uppercase();
        if index.alpha3.insert(alpha3, position).is_some() {
            return Err(DirectoryError::DuplicateAlpha3(record.alpha3.clone()));
        }
    }
    Ok(index)
}
