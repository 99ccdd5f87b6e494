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


/// Longest dialing code in use, in digits. Whole numbers are probed with
/// candidate codes of 1 up to this many leading digits.
pub const MAX_LENGTH_DIALING_CODE: usize = 3;

pub const PLUS_SIGN: &'static str = "+";

/// Separator of the stored `(alpha2)-code-number` value.
pub const STORED_VALUE_SEPARATOR: char = '-';

/// The stored value holds at most country, dialing code and number.
pub const MAX_STORED_VALUE_PARTS: usize = 3;

pub const ALPHA2_LENGTH: usize = 2;
pub const ALPHA3_LENGTH: usize = 3;

/// Matches every run of characters that is not an ASCII digit.
pub const NON_DIGITS_PATTERN: &'static str = "[^0-9]+";
