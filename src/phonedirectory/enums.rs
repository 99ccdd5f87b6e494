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


use strum::EnumIter;

use crate::CountryPhoneRecord;

use super::helper_constants::ALPHA2_LENGTH;

/// The two alphabetic forms a country can be identified by.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlphaForm {
    /// ISO 3166-1 alpha-2, e.g. `US`.
    Alpha2,
    /// ISO 3166-1 alpha-3, e.g. `USA`.
    Alpha3,
}

impl AlphaForm {
    /// Identifiers of exactly two characters are alpha-2, anything else is
    /// looked up as alpha-3.
    pub fn of_identifier(identifier: &str) -> Self {
        if identifier.chars().count() == ALPHA2_LENGTH {
            AlphaForm::Alpha2
        } else {
            AlphaForm::Alpha3
        }
    }

    pub fn other(self) -> Self {
        match self {
            AlphaForm::Alpha2 => AlphaForm::Alpha3,
            AlphaForm::Alpha3 => AlphaForm::Alpha2,
        }
    }

    /// Returns the code of this form stored in the record.
    pub fn code_of(self, record: &CountryPhoneRecord) -> &str {
        match self {
            AlphaForm::Alpha2 => &record.alpha2,
            AlphaForm::Alpha3 => &record.alpha3,
        }
    }
}

/// How the country of a number to validate is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryKey<'a> {
    /// Alpha-2 or alpha-3 country code, compared case-insensitively.
    Identifier(&'a str),
    /// Dialing code as typed by the user. Everything except ASCII digits is
    /// dropped before matching, so `"+44"` and `"44"` are the same key.
    DialingCode(&'a str),
}
