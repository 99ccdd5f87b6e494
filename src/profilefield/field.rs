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


use log::{trace, warn};

use crate::{
    interfaces::{CountryNameTranslator, FieldDataStore, ProfileFieldPlugin},
    phonedirectory::PLUS_SIGN,
    string_util::fold_decimal_digits,
    CountryKey, PhoneDirectory, normalize_number, PHONE_DIRECTORY,
};

use super::{
    definition::{AssociatedUserField, PhoneFieldDefinition},
    errors::{push_error, FieldError, FieldErrors},
    form::{resolve_default_country, PhoneFormDefaults, PhoneFormElement, COUNTRY_PLACEHOLDER},
    stored_value::StoredPhone,
};

/// What the host form returns for a phone control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneSubmission {
    /// A value already in stored form, e.g. from a web service or an import.
    Stored(String),
    /// The two parts of the control: country alpha code and typed number.
    Parts { country: String, number: String },
}

/// Per-request facts the host knows and the field needs for validation.
#[derive(Clone, Copy, Default)]
pub struct SubmissionContext<'a> {
    /// User whose profile is being saved.
    pub user_id: u64,
    /// Required by unique fields, whose values are reported as unchecked
    /// without it.
    pub store: Option<&'a dyn FieldDataStore>,
}

/// The phone profile field of one user.
pub struct PhoneProfileField<'d> {
    directory: &'d PhoneDirectory,
    definition: PhoneFieldDefinition,
    translator: Option<&'d dyn CountryNameTranslator>,
    /// Value currently stored for the user, parsed.
    user_data: Option<StoredPhone>,
}

impl PhoneProfileField<'static> {
    /// A field backed by the compiled-in directory.
    pub fn new(definition: PhoneFieldDefinition) -> Self {
        Self::with_directory(&PHONE_DIRECTORY, definition)
    }
}

impl<'d> PhoneProfileField<'d> {
    pub fn with_directory(directory: &'d PhoneDirectory, definition: PhoneFieldDefinition) -> Self {
        Self {
            directory,
            definition,
            translator: None,
            user_data: None,
        }
    }

    pub fn with_translator(mut self, translator: &'d dyn CountryNameTranslator) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Loads the value the user has stored. An empty string means no value.
    pub fn with_user_data(mut self, stored: &str) -> Self {
        self.user_data = (!stored.is_empty()).then(|| self.parse_stored(stored));
        self
    }

    pub fn definition(&self) -> &PhoneFieldDefinition {
        &self.definition
    }

    pub fn user_data(&self) -> Option<&StoredPhone> {
        self.user_data.as_ref()
    }

    /// A locked field stays editable while it is required but lacks a number
    /// or a dialing code, otherwise the profile form could not be saved.
    pub fn is_locked(&self) -> bool {
        if !self.definition.locked {
            return false;
        }
        let complete = self
            .user_data
            .as_ref()
            .is_some_and(|data| !data.number.is_empty() && data.dialing_code.is_some());
        !(self.definition.required && !complete)
    }

    /// Values to pre-fill: the user's stored value, else the field's default
    /// data when it has a number.
    pub fn form_defaults(&self) -> Option<PhoneFormDefaults> {
        if let Some(data) = &self.user_data {
            return Some(PhoneFormDefaults {
                country: data.alpha2.clone().or_else(|| self.default_country()),
                number: data.number.clone(),
            });
        }

        let default = self.parse_stored(self.definition.default_data.as_deref()?);
        (!default.is_empty()).then(|| PhoneFormDefaults {
            country: default.alpha2,
            number: default.number,
        })
    }

    /// The stored value split back into the parts of the form control.
    pub fn load_for_edit(&self) -> Option<PhoneSubmission> {
        self.user_data.as_ref().map(|data| PhoneSubmission::Parts {
            country: data.alpha2.clone().unwrap_or_default(),
            number: data.number.clone(),
        })
    }

    /// When the field is associated with a core user phone field, returns that
    /// field and the display text to copy into it.
    pub fn associated_user_field_update(&self, stored: &str) -> Option<(AssociatedUserField, String)> {
        let field = self.definition.associated_field?;
        if stored.is_empty() {
            return None;
        }
        Some((field, self.format_for_display(stored)))
    }

    fn parse_stored(&self, stored: &str) -> StoredPhone {
        StoredPhone::parse(stored, self.definition.default_country.as_deref(), self.directory)
    }

    fn default_country(&self) -> Option<String> {
        self.definition
            .default_country
            .as_deref()
            .and_then(|country| resolve_default_country(self.directory, country))
    }

    /// Country, typed number and the value that would be stored for it.
    fn submitted_value(&self, submission: &PhoneSubmission) -> (Option<String>, String, String) {
        match submission {
            PhoneSubmission::Stored(raw) => {
                let parsed = self.parse_stored(raw);
                let value = parsed.to_stored_string();
                (parsed.alpha2, parsed.number, value)
            }
            PhoneSubmission::Parts { country, number } => {
                let number = fold_decimal_digits(number);
                if number.is_empty() {
                    return (None, number, String::new());
                }
                let mut buf = itoa::Buffer::new();
                let national = buf.format(normalize_number(&number));
                let value = match self.directory.country_by_alpha(country) {
                    Some(record) => StoredPhone::compose(&record.alpha2, record.dialing_code, national),
                    None => national.to_owned(),
                };
                (Some(country.clone()), number, value)
            }
        }
    }
}

impl<'d> ProfileFieldPlugin for PhoneProfileField<'d> {
    type FormElement = PhoneFormElement;
    type Submission = PhoneSubmission;

    fn render(&self) -> PhoneFormElement {
        let country_options = self
            .directory
            .options_list(self.definition.full_country_names, self.translator)
            .into_iter()
            .map(|(alpha2, label)| (alpha2.to_owned(), label))
            .collect();

        PhoneFormElement {
            name: self.definition.input_name(),
            label: self.definition.name.clone(),
            country_options,
            country_placeholder: COUNTRY_PLACEHOLDER,
            required: self.definition.required && !self.is_locked(),
            default_country: self.default_country(),
            defaults: self.form_defaults(),
        }
    }

    fn validate_submission(
        &self,
        submission: &PhoneSubmission,
        context: &SubmissionContext<'_>,
    ) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let input_name = self.definition.input_name();
        let (country, number, value) = self.submitted_value(submission);

        if self.definition.required || !number.is_empty() {
            let valid = country.as_deref().is_some_and(|country| {
                self.directory.is_valid_number(
                    CountryKey::Identifier(country),
                    &number,
                    self.definition.mobile_only,
                )
            });
            if !valid {
                trace!("Rejected phone '{number}' for field '{input_name}'");
                push_error(&mut errors, &input_name, FieldError::InvalidData);
            }
        }

        if self.definition.unique && (!value.is_empty() || self.definition.required) {
            match context.store {
                Some(store) => {
                    let owners = store.owners_of_value(self.definition.id, &value);
                    if !owners.is_empty() && !owners.contains(&context.user_id) {
                        push_error(&mut errors, &input_name, FieldError::ValueAlreadyUsed);
                    }
                }
                None => {
                    warn!("Unique field '{input_name}' validated without a data store");
                    push_error(&mut errors, &input_name, FieldError::UniquenessNotChecked);
                }
            }
        }

        errors
    }

    fn preprocess_before_save(&self, submission: &PhoneSubmission) -> String {
        let (country, number) = match submission {
            PhoneSubmission::Stored(raw) => return raw.clone(),
            PhoneSubmission::Parts { country, number } => (country, fold_decimal_digits(number)),
        };
        if number.is_empty() {
            return String::new();
        }

        match self.directory.validate_number(
            CountryKey::Identifier(country),
            &number,
            self.definition.mobile_only,
        ) {
            Some(validated) => StoredPhone::compose(
                validated.alpha2(),
                validated.dialing_code(),
                &validated.national_number_string(),
            ),
            None => String::new(),
        }
    }

    /// `"(US)-1-2025550123"` is shown as `"+12025550123"`. Values already
    /// starting with `+` are shown as they are.
    fn format_for_display(&self, stored: &str) -> String {
        let parsed = self.parse_stored(stored);
        if parsed.number.is_empty() || stored.starts_with(PLUS_SIGN) {
            return stored.to_owned();
        }

        match parsed.dialing_code {
            Some(dialing_code) => {
                let mut code_buf = itoa::Buffer::new();
                let mut number_buf = itoa::Buffer::new();
                let dialing_code = code_buf.format(dialing_code);
                let number = number_buf.format(normalize_number(&parsed.number));
                fast_cat::concat_str!(PLUS_SIGN, dialing_code, number)
            }
            None => parsed.number,
        }
    }
}
