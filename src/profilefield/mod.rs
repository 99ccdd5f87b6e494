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


pub mod definition;
pub mod errors;
pub mod field;
pub mod form;
pub mod stored_value;

pub use definition::{AssociatedUserField, PhoneFieldDefinition};
pub use errors::{DefineError, FieldError, FieldErrors};
pub use field::{PhoneProfileField, PhoneSubmission, SubmissionContext};
pub use form::{
    combine_submitted_phone, defaults_from_request, resolve_default_country,
    validate_submitted_phones, PhoneFormDefaults, PhoneFormElement,
};
pub use stored_value::StoredPhone;
