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


use crate::profilefield::{FieldErrors, SubmissionContext};

/// Callbacks the host calls on a custom profile field type.
///
/// The host owns the form, the request and the storage. A field type only
/// describes its control, checks submitted values, turns them into the
/// string that gets stored and turns stored strings back into display text.
pub trait ProfileFieldPlugin {
    /// Description of the form control handed to the host form builder.
    type FormElement;
    /// Value the host form returns for the control.
    type Submission;

    fn render(&self) -> Self::FormElement;

    /// Returns errors keyed by form input name. Empty if the submission is
    /// acceptable.
    fn validate_submission(
        &self,
        submission: &Self::Submission,
        context: &SubmissionContext<'_>,
    ) -> FieldErrors;

    /// Turns a submission into the string stored by the host. An empty string
    /// means nothing is stored.
    fn preprocess_before_save(&self, submission: &Self::Submission) -> String;

    fn format_for_display(&self, stored: &str) -> String;
}

/// Host supplied lookup of localized country names.
pub trait CountryNameTranslator {
    /// Localized name of the country with the given alpha-2 code, if the
    /// host has one.
    fn translate(&self, alpha2: &str) -> Option<String>;
}

impl<F> CountryNameTranslator for F
where
    F: Fn(&str) -> Option<String>,
{
    fn translate(&self, alpha2: &str) -> Option<String> {
        self(alpha2)
    }
}

/// Read access to the values users already stored for a profile field.
pub trait FieldDataStore {
    /// Ids of the users whose stored value of field `field_id` equals `value`.
    fn owners_of_value(&self, field_id: u64, value: &str) -> Vec<u64>;
}
