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
    phonedirectory::ALPHA3_LENGTH,
    string_util::fold_decimal_digits,
    AlphaForm, CountryKey, PhoneDirectory, normalize_number,
};

use super::errors::{push_error, FieldError, FieldErrors};

/// Placeholder of the country code select.
pub const COUNTRY_PLACEHOLDER: &'static str = "country code";

/// Values pre-filled into the phone control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneFormDefaults {
    /// Alpha-2 code selected in the country select.
    pub country: Option<String>,
    pub number: String,
}

/// The phone control: a country code select followed by a number input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneFormElement {
    /// Form input name, the group name of both parts.
    pub name: String,
    pub label: String,
    /// `(alpha2, label)` entries of the country select.
    pub country_options: Vec<(String, String)>,
    pub country_placeholder: &'static str,
    /// Both parts must be filled in on the client side.
    pub required: bool,
    /// Country selected when nothing else is known.
    pub default_country: Option<String>,
    pub defaults: Option<PhoneFormDefaults>,
}

/// Turns a configured default country into the alpha-2 code the select
/// understands. A number is taken as a dialing code, an alpha-3 code is
/// swapped. Anything not ending up as a known alpha-2 code is dropped.
pub fn resolve_default_country(directory: &PhoneDirectory, value: &str) -> Option<String> {
    let candidate = if normalize_number(value) != 0 {
        directory.alpha_for_dialing_code(value, AlphaForm::Alpha2)
    } else if value.chars().count() == ALPHA3_LENGTH {
        directory.swap_alpha_form(value)
    } else {
        Some(value)
    };

    candidate
        .filter(|alpha| AlphaForm::of_identifier(alpha) == AlphaForm::Alpha2)
        .and_then(|alpha2| directory.country_by_alpha(alpha2))
        .map(|record| record.alpha2.clone())
}

/// Pre-fills the control from a single string passed in the request, such
/// as `"+201001234567"`. A string that reads as a full mobile number is split
/// into country and national number; anything else lands in the number input.
pub fn defaults_from_request(directory: &PhoneDirectory, raw: &str) -> Option<PhoneFormDefaults> {
    if raw.is_empty() {
        return None;
    }
    let folded = fold_decimal_digits(raw);
    let defaults = match directory.validate_whole_number(&folded, true) {
        Some(validated) => PhoneFormDefaults {
            country: Some(validated.alpha2().to_owned()),
            number: validated.national_number_string(),
        },
        None => PhoneFormDefaults {
            country: None,
            number: raw.to_owned(),
        },
    };
    Some(defaults)
}

/// Validates every `(input name, country, number)` phone pair of a form
/// submission. Numbers must be mobile numbers of the selected country.
pub fn validate_submitted_phones<'a, I>(directory: &PhoneDirectory, submissions: I) -> FieldErrors
where
    I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
{
    let mut errors = FieldErrors::new();
    for (input_name, country, number) in submissions {
        let number = fold_decimal_digits(number);
        if !directory.is_valid_number(CountryKey::Identifier(country), &number, true) {
            push_error(&mut errors, input_name, FieldError::InvalidData);
        }
    }
    errors
}

/// Joins the dialing code of `country` and the normalized `number` into one
/// integer, e.g. `("EG", "0100 123 4567")` gives `201001234567`.
pub fn combine_submitted_phone(directory: &PhoneDirectory, country: &str, number: &str) -> Option<u64> {
    let dialing_code = directory.dialing_code_for_country(country)?;
    let number = normalize_number(&fold_decimal_digits(number));

    let mut code_buf = itoa::Buffer::new();
    let mut number_buf = itoa::Buffer::new();
    let dialing_code = code_buf.format(dialing_code);
    let number = number_buf.format(number);
    let combined = fast_cat::concat_str!(dialing_code, number);
    Some(normalize_number(&combined))
}
