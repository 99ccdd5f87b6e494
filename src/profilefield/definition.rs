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


use strum::{AsRefStr, EnumIter, EnumString};

use super::errors::DefineError;

/// Prefix of the form input, and user identity, names of profile fields.
const PROFILE_FIELD_PREFIX: &'static str = "profile_field_";

/// Core user fields a phone field can be copied into on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum AssociatedUserField {
    Phone1,
    Phone2,
}

/// Settings of one phone profile field, as configured by an administrator,
/// plus the site settings the field depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneFieldDefinition {
    pub id: u64,
    pub shortname: String,
    /// Visible name, used as the form label.
    pub name: String,
    pub required: bool,
    pub locked: bool,
    /// No two users may store the same value.
    pub unique: bool,
    /// Only numbers starting with a mobile prefix of their country are valid.
    pub mobile_only: bool,
    pub associated_field: Option<AssociatedUserField>,
    /// List the field among the identity fields shown next to user names.
    pub show_in_user_identity: bool,
    /// Stored-format value used when the user has none.
    pub default_data: Option<String>,
    /// Site default country: alpha-2, alpha-3 or dialing code.
    pub default_country: Option<String>,
    /// Label countries with their translated names instead of alpha-3 codes.
    pub full_country_names: bool,
}

impl PhoneFieldDefinition {
    pub fn new(id: u64, shortname: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            shortname: shortname.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn with_mobile_only(mut self, mobile_only: bool) -> Self {
        self.mobile_only = mobile_only;
        self
    }

    pub fn with_associated_field(mut self, field: Option<AssociatedUserField>) -> Self {
        self.associated_field = field;
        self
    }

    pub fn with_show_in_user_identity(mut self, show: bool) -> Self {
        self.show_in_user_identity = show;
        self
    }

    pub fn with_default_data(mut self, default_data: impl Into<String>) -> Self {
        self.default_data = Some(default_data.into());
        self
    }

    pub fn with_default_country(mut self, country: impl Into<String>) -> Self {
        self.default_country = Some(country.into());
        self
    }

    pub fn with_full_country_names(mut self, full_country_names: bool) -> Self {
        self.full_country_names = full_country_names;
        self
    }

    /// Name of the form input, also used in the user identity setting.
    pub fn input_name(&self) -> String {
        fast_cat::concat_str!(PROFILE_FIELD_PREFIX, &self.shortname)
    }

    /// A user field may receive the value of one phone field only.
    pub fn validate_associated_field(
        &self,
        others: &[PhoneFieldDefinition],
    ) -> Result<(), DefineError> {
        let Some(field) = self.associated_field else {
            return Ok(());
        };
        match others
            .iter()
            .find(|other| other.associated_field == Some(field) && other.shortname != self.shortname)
        {
            Some(other) => Err(DefineError::FieldAlreadyAssociated(other.shortname.clone())),
            None => Ok(()),
        }
    }

    /// Returns the comma separated identity field setting with this field
    /// added or removed according to `show_in_user_identity`. Blank entries
    /// are dropped and the field is listed at most once.
    pub fn updated_identity_fields(&self, current: &str) -> String {
        let own = self.input_name();
        let mut fields: Vec<&str> = current
            .split(',')
            .map(str::trim)
            .filter(|field| !field.is_empty() && *field != own)
            .collect();
        if self.show_in_user_identity {
            fields.push(&own);
        }
        fields.join(",")
    }
}
