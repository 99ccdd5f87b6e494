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


use crate::{
    phonedirectory::{MAX_STORED_VALUE_PARTS, STORED_VALUE_SEPARATOR},
    string_util::trim_parens,
    PhoneDirectory,
};

/// A phone value as persisted by the host.
///
/// The stored string is `"(alpha2)-dialing code-number"`, e.g.
/// `"(US)-1-2025550123"`. Older values may be `"alpha2-number"` or a bare
/// number, which [`StoredPhone::parse`] accepts too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredPhone {
    pub alpha2: Option<String>,
    pub dialing_code: Option<u32>,
    pub number: String,
}

impl StoredPhone {
    /// Parses a stored value.
    ///
    /// * `(alpha2)-code-number`: everything after the second separator is the
    ///   number.
    /// * `alpha2-number`: the dialing code is looked up in `directory`.
    /// * `number`: the country is `default_country`, if any.
    ///
    /// Anything else gives an empty value.
    pub fn parse(value: &str, default_country: Option<&str>, directory: &PhoneDirectory) -> Self {
        let parts: Vec<&str> = if value.starts_with('(') {
            value.splitn(MAX_STORED_VALUE_PARTS, STORED_VALUE_SEPARATOR).collect()
        } else {
            value.split(STORED_VALUE_SEPARATOR).collect()
        };

        match parts.as_slice() {
            [number] => {
                let alpha2 = default_country
                    .filter(|country| !country.is_empty())
                    .map(|country| Self::canonical_alpha2(country, directory));
                let dialing_code = alpha2
                    .as_deref()
                    .and_then(|country| directory.dialing_code_for_country(country));
                Self {
                    alpha2,
                    dialing_code,
                    number: (*number).to_owned(),
                }
            }
            [country, number] => {
                let alpha2 = Self::country_token(country, directory);
                let dialing_code = alpha2
                    .as_deref()
                    .and_then(|country| directory.dialing_code_for_country(country));
                Self {
                    alpha2,
                    dialing_code,
                    number: (*number).to_owned(),
                }
            }
            [country, code, number] => Self {
                alpha2: Self::country_token(country, directory),
                dialing_code: code.parse().ok(),
                number: (*number).to_owned(),
            },
            _ => Self::default(),
        }
    }

    /// Produces `"(alpha2)-code-number"`.
    pub fn compose(alpha2: &str, dialing_code: u32, number: &str) -> String {
        let mut buf = itoa::Buffer::new();
        let dialing_code = buf.format(dialing_code);
        fast_cat::concat_str!("(", alpha2, ")-", dialing_code, "-", number)
    }

    /// The stored form of this value: composite when both country and
    /// dialing code are known, the bare number otherwise.
    pub fn to_stored_string(&self) -> String {
        match (&self.alpha2, self.dialing_code) {
            (Some(alpha2), Some(dialing_code)) => Self::compose(alpha2, dialing_code, &self.number),
            _ => self.number.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.number.is_empty()
    }

    /// Country segment of a stored value, without parentheses. Empty means
    /// no country.
    fn country_token(segment: &str, directory: &PhoneDirectory) -> Option<String> {
        Some(trim_parens(segment))
            .filter(|country| !country.is_empty())
            .map(|country| Self::canonical_alpha2(country, directory))
    }

    /// Alpha-2 code of a known country, the identifier as given otherwise.
    fn canonical_alpha2(identifier: &str, directory: &PhoneDirectory) -> String {
        directory
            .country_by_alpha(identifier)
            .map(|record| record.alpha2.clone())
            .unwrap_or_else(|| identifier.to_owned())
    }
}
