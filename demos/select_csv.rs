// OSS Select Rust Library for Alibaba Cloud Object Storage Service
// Copyright 2025 The oss-select Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
mod common;

use crate::common::create_client_from_env;
use oss_select::oss::OssClient;
use oss_select::oss::types::{FileHeaderInfo, OssApi, SelectRequest};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="INFO" to log info and higher
    let client: OssClient = create_client_from_env()?;

    let bucket_name: &str = "objselect";
    let object_name: &str = "people.csv";
    let download_path: &str = "/tmp/oss-select/adults.csv";

    let request = SelectRequest::new("select _1, _2 from ossobject where cast(_2 as int) >= 18")?
        .file_header_info(FileHeaderInfo::Use)
        .input_record_delimiter("\n")
        .input_field_delimiter(",")
        .output_field_delimiter("|");

    let written = client
        .select_object(bucket_name, object_name, request)
        .build()
        .send()
        .await?
        .to_file(Path::new(download_path))
        .await?;

    log::info!("{written} bytes of '{object_name}' selected into file '{download_path}'.");

    Ok(())
}
