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


/// Removes the parentheses wrapping a country token, `"(US)"` -> `"US"`.
pub fn trim_parens(s: &str) -> &str {
    s.trim_matches(|c| c == '(' || c == ')')
}

/// Folds any unicode decimal digits (Arabic-Indic, full width, ...) into
/// ASCII ones, leaving other characters untouched.
pub fn fold_decimal_digits(raw: &str) -> String {
    dec_from_char::normalize_decimals(raw).to_string()
}
