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


use std::collections::HashMap;

use log::{error, trace, warn};

use crate::{
    generated::PHONE_DIRECTORY_DATA,
    interfaces::CountryNameTranslator,
    CountryPhoneDataCollection, CountryPhoneRecord,
};

use super::{
    enums::{AlphaForm, CountryKey},
    errors::DirectoryError,
    helper_constants::MAX_LENGTH_DIALING_CODE,
    helper_functions::{
        build_alpha_index, digit_count, load_directory_data, normalize_number, parse_digits,
        starts_with_any_prefix,
    },
    helper_types::ValidatedPhone,
};

/// Read-only table of per-country phone rules with lookups and validation
/// built on top of it.
///
/// Countries keep the order of the source table. Several countries can share
/// a dialing code (1 for the NANP countries, 7 for Russia and Kazakhstan);
/// a lookup by dialing code returns the first of them.
pub struct PhoneDirectory {
    records: Vec<CountryPhoneRecord>,
    /// Upper-cased alpha-2 code to position in `records`.
    alpha2_index: HashMap<String, usize>,
    /// Upper-cased alpha-3 code to position in `records`.
    alpha3_index: HashMap<String, usize>,
}

impl PhoneDirectory {
    pub(super) fn new() -> Self {
        let collection = match load_directory_data(PHONE_DIRECTORY_DATA) {
            Err(err) => {
                let err_message = format!("Could not parse compiled-in phone directory: {:?}", err);
                error!("{}", err_message);
                panic!("{}", err_message);
            }
            Ok(collection) => collection,
        };
        match Self::new_for_records(collection) {
            Err(err) => {
                let err_message = format!("Compiled-in phone directory is inconsistent: {}", err);
                error!("{}", err_message);
                panic!("{}", err_message);
            }
            Ok(directory) => directory,
        }
    }

    /// Builds a directory from caller supplied records. Fails if an alpha
    /// code is used twice or a country has no national number length.
    pub fn new_for_records(collection: CountryPhoneDataCollection) -> Result<Self, DirectoryError> {
        let records = collection.country;
        let index = build_alpha_index(&records)?;
        Ok(Self {
            records,
            alpha2_index: index.alpha2,
            alpha3_index: index.alpha3,
        })
    }

    /// Builds a directory from a table in protobuf text format.
    pub fn from_text_format(data: &str) -> Result<Self, DirectoryError> {
        Self::new_for_records(load_directory_data(data)?)
    }

    /// All countries in directory order.
    pub fn records(&self) -> &[CountryPhoneRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the first country, in directory order, using `dialing_code`.
    pub fn country_by_dialing_code(&self, dialing_code: u32) -> Option<&CountryPhoneRecord> {
        self.countries_by_dialing_code(dialing_code).next()
    }

    fn countries_by_dialing_code(
        &self,
        dialing_code: u32,
    ) -> impl Iterator<Item = &CountryPhoneRecord> {
        self.records
            .iter()
            .filter(move |record| record.dialing_code == dialing_code)
    }

    /// Finds a country by its alpha-2 (two characters) or alpha-3 code.
    /// The identifier is compared case-insensitively.
    pub fn country_by_alpha(&self, identifier: &str) -> Option<&CountryPhoneRecord> {
        let key = identifier.to_ascii_uppercase();
        let position = match AlphaForm::of_identifier(identifier) {
            AlphaForm::Alpha2 => self.alpha2_index.get(&key),
            AlphaForm::Alpha3 => self.alpha3_index.get(&key),
        };
        position.map(|&position| &self.records[position])
    }

    /// Returns the alpha-3 code for an alpha-2 one and the other way round.
    pub fn swap_alpha_form(&self, identifier: &str) -> Option<&str> {
        let form = AlphaForm::of_identifier(identifier).other();
        self.country_by_alpha(identifier)
            .map(|record| form.code_of(record))
    }

    /// Builds the entries of a country code select control: one
    /// `(alpha2, label)` pair per country in directory order.
    ///
    /// The label is `"{name} (+{dialing code})"`. `name` is the translated
    /// country name if `use_full_name` is set and the translator knows the
    /// country, and the alpha-3 code otherwise.
    pub fn options_list(
        &self,
        use_full_name: bool,
        translator: Option<&dyn CountryNameTranslator>,
    ) -> Vec<(&str, String)> {
        let translator = translator.filter(|_| use_full_name);
        self.records
            .iter()
            .map(|record| {
                let translated = translator.and_then(|t| t.translate(&record.alpha2));
                let name = translated.as_deref().unwrap_or(&record.alpha3);

                let mut buf = itoa::Buffer::new();
                let dialing_code = buf.format(record.dialing_code);
                let label = fast_cat::concat_str!(name, " (+", dialing_code, ")");
                (record.alpha2.as_str(), label)
            })
            .collect()
    }

    /// Validates a national number against the rules of a country.
    ///
    /// The number is normalized first. It is valid if its digit count is one
    /// of the country's national number lengths and, when `require_mobile` is
    /// set, it starts with one of the country's mobile prefixes.
    ///
    /// With [`CountryKey::DialingCode`] every country sharing the code is tried
    /// in directory order and the first one accepting the number is returned.
    pub fn validate_number(
        &self,
        key: CountryKey<'_>,
        number: &str,
        require_mobile: bool,
    ) -> Option<ValidatedPhone<'_>> {
        let national_number = normalize_number(number);

        match key {
            CountryKey::Identifier(identifier) => {
                let Some(record) = self.country_by_alpha(identifier) else {
                    trace!("Unknown country identifier '{identifier}'");
                    return None;
                };
                Self::accepts(record, national_number, require_mobile)
                    .then(|| ValidatedPhone::new(record, national_number))
            }
            CountryKey::DialingCode(code) => {
                let Ok(dialing_code) = u32::try_from(normalize_number(code)) else {
                    trace!("Dialing code '{code}' is out of range");
                    return None;
                };
                self.first_accepting(dialing_code, national_number, require_mobile)
            }
        }
    }

    /// Same as [`Self::validate_number`] when only the verdict is needed.
    pub fn is_valid_number(&self, key: CountryKey<'_>, number: &str, require_mobile: bool) -> bool {
        self.validate_number(key, number, require_mobile).is_some()
    }

    /// Validates a number typed together with its dialing code, e.g.
    /// `"+1 202 555 0123"`.
    ///
    /// The leading 1, 2 and then 3 digits are tried as the dialing code, in
    /// that order, and the remaining digits are validated as the national
    /// number of the countries using that code. The first country accepting
    /// the number wins, so shorter dialing codes take precedence when a number
    /// can be read more than one way.
    pub fn validate_whole_number(
        &self,
        raw: &str,
        require_mobile: bool,
    ) -> Option<ValidatedPhone<'_>> {
        let mut buf = itoa::Buffer::new();
        let digits = buf.format(normalize_number(raw));

        for code_length in 1..=MAX_LENGTH_DIALING_CODE {
            if digits.len() <= code_length {
                break;
            }
            let (code, national) = digits.split_at(code_length);
            let Ok(dialing_code) = code.parse::<u32>() else {
                continue;
            };
            let national_number = parse_digits(national);
            if let Some(validated) =
                self.first_accepting(dialing_code, national_number, require_mobile)
            {
                return Some(validated);
            }
        }
        trace!("Number '{digits}' doesn't start with a known dialing code");
        None
    }

    /// Dialing code of the country with the given alpha-2 or alpha-3 code.
    pub fn dialing_code_for_country(&self, identifier: &str) -> Option<u32> {
        self.country_by_alpha(identifier)
            .map(|record| record.dialing_code)
            .or_else(|| {
                warn!("Invalid or unknown country identifier provided: {}", identifier);
                None
            })
    }

    /// Alpha code, in the requested form, of the first country using the
    /// dialing code. `code` is normalized first so `"+44"` works.
    pub fn alpha_for_dialing_code(&self, code: &str, form: AlphaForm) -> Option<&str> {
        u32::try_from(normalize_number(code))
            .ok()
            .and_then(|dialing_code| self.country_by_dialing_code(dialing_code))
            .map(|record| form.code_of(record))
            .or_else(|| {
                warn!("Unknown dialing code provided: {}", code);
                None
            })
    }

    fn first_accepting(
        &self,
        dialing_code: u32,
        national_number: u64,
        require_mobile: bool,
    ) -> Option<ValidatedPhone<'_>> {
        self.countries_by_dialing_code(dialing_code)
            .find(|record| Self::accepts(record, national_number, require_mobile))
            .map(|record| ValidatedPhone::new(record, national_number))
    }

    fn accepts(record: &CountryPhoneRecord, national_number: u64, require_mobile: bool) -> bool {
        let length = digit_count(national_number);
        if !record
            .national_number_lengths
            .iter()
            .any(|&valid_length| valid_length as usize == length)
        {
            trace!(
                "Number '{national_number}' has {length} digits, not valid for {}",
                record.alpha2
            );
            return false;
        }
        if !require_mobile {
            return true;
        }

        let mut buf = itoa::Buffer::new();
        let is_mobile = starts_with_any_prefix(buf.format(national_number), &record.mobile_prefixes);
        if !is_mobile {
            trace!("Number '{national_number}' is not a mobile number of {}", record.alpha2);
        }
        is_mobile
    }
}
