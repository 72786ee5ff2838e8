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
use oss_select::oss::types::{CsvMetaRequest, OssApi};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="INFO" to log info and higher
    let client: OssClient = create_client_from_env()?;

    let bucket_name: &str = "objselect";
    let object_name: &str = "people.csv";

    let resp = client
        .csv_meta(
            bucket_name,
            object_name,
            CsvMetaRequest::new().overwrite_if_exists(true),
        )
        .build()
        .send()
        .await?;

    log::info!(
        "'{object_name}' has {} rows and {} columns in {} splits.",
        resp.rows(),
        resp.columns(),
        resp.splits()
    );

    Ok(())
}
