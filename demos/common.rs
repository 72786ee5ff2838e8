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
use oss_select::oss::creds::StaticProvider;
use oss_select::oss::http::BaseUrl;
use oss_select::oss::{ClientConfig, OssClient, OssClientBuilder};
use std::time::Duration;

/// Builds a client from `OSS_ENDPOINT`, `OSS_ACCESS_KEY_ID` and
/// `OSS_ACCESS_KEY_SECRET`.
#[allow(dead_code)]
pub fn create_client_from_env() -> Result<OssClient, Box<dyn std::error::Error + Send + Sync>> {
    let endpoint =
        std::env::var("OSS_ENDPOINT").unwrap_or("oss-cn-hangzhou.aliyuncs.com".to_string());
    let base_url = endpoint.parse::<BaseUrl>()?;
    log::info!("Trying to connect to OSS at: `{base_url:?}`");

    let static_provider = StaticProvider::new(
        &std::env::var("OSS_ACCESS_KEY_ID")?,
        &std::env::var("OSS_ACCESS_KEY_SECRET")?,
        std::env::var("OSS_SECURITY_TOKEN").ok().as_deref(),
    );

    let config = ClientConfig::default()
        .connect_timeout(Duration::from_secs(5))
        .response_header_timeout(Duration::from_secs(30));

    let client = OssClientBuilder::new(base_url)
        .provider(Some(static_provider))
        .config(config)
        .app_info(Some(("oss-select-demo".into(), env!("CARGO_PKG_VERSION").into())))
        .build()?;
    Ok(client)
}

#[allow(dead_code)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // dummy code just to prevent an error because files in demos need to have a main
    Ok(())
}
