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


mod phonedirectory_tests;

use std::sync::Once;

use crate::{generated::TEST_PHONE_DIRECTORY_DATA, PhoneDirectory};

static ONCE: Once = Once::new();

fn get_test_directory() -> PhoneDirectory {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );

    PhoneDirectory::from_text_format(TEST_PHONE_DIRECTORY_DATA)
        .expect("Test directory should be valid")
}
