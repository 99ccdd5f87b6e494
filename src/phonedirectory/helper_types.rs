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


use crate::CountryPhoneRecord;

/// A number that passed validation together with the country it was
/// validated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedPhone<'a> {
    pub record: &'a CountryPhoneRecord,
    /// National number, normalized (no dialing code, no leading zeros).
    pub national_number: u64,
}

impl<'a> ValidatedPhone<'a> {
    pub fn new(record: &'a CountryPhoneRecord, national_number: u64) -> Self {
        Self { record, national_number }
    }

    pub fn alpha2(&self) -> &'a str {
        &self.record.alpha2
    }

    pub fn dialing_code(&self) -> u32 {
        self.record.dialing_code
    }

    pub fn national_number_string(&self) -> String {
        let mut buf = itoa::Buffer::new();
        buf.format(self.national_number).to_owned()
    }
}
