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


/// Compiled-in country phone table, protobuf text format of
/// `CountryPhoneDataCollection`.
pub const PHONE_DIRECTORY_DATA: &'static str =
    include_str!("../../resources/phone_directory.textproto");

// use only in test case
#[cfg(test)]
pub const TEST_PHONE_DIRECTORY_DATA: &'static str =
    include_str!("../../resources/test_phone_directory.textproto");
