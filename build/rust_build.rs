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

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
enum BuildError {
    #[error("Required resource is missing: {0}")]
    MissingResource(String),
}

const PROTO_FILE: &str = "resources/countryphonedata.proto";
const DIRECTORY_FILES: [&str; 2] = [
    "resources/phone_directory.textproto",
    "resources/test_phone_directory.textproto",
];

fn main() -> Result<(), BuildError> {
    for resource in std::iter::once(PROTO_FILE).chain(DIRECTORY_FILES) {
        if !Path::new(resource).exists() {
            return Err(BuildError::MissingResource(resource.to_owned()));
        }
        // text format tables are embedded with include_str!, keep them tracked
        println!("cargo:rerun-if-changed={}", resource);
    }

    protobuf_codegen::Codegen::new()
        .pure()
        .includes(["resources"])
        .input(PROTO_FILE)
        .cargo_out_dir("proto_gen")
        .run_from_script();
    Ok(())
}
