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
use oss_select::oss::client::{ClientConfig, OssClientBuilder};
use oss_select::oss::creds::StaticProvider;
use oss_select::oss::http::BaseUrl;
use oss_select::oss::OssClient;
use wiremock::MockServer;

pub const ACCESS_KEY_ID: &str = "LTAI5tTestAccessKey";
pub const ACCESS_KEY_SECRET: &str = "TestAccessKeySecretForSelect";

/// A mock OSS endpoint and a client pointed at it.
///
/// The server listens on `127.0.0.1`, so the client addresses buckets path
/// style: `http://127.0.0.1:{port}/{bucket}/{object}`.
pub struct TestContext {
    pub server: MockServer,
    pub client: OssClient,
    pub base_url: BaseUrl,
    pub access_key: String,
    pub secret_key: String,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::new_with(ClientConfig::default(), None).await
    }

    /// Starts a mock server and builds a client with given configuration and
    /// optional STS security token.
    pub async fn new_with(config: ClientConfig, security_token: Option<&str>) -> Self {
        let server = MockServer::start().await;
        let base_url: BaseUrl = server.uri().parse().unwrap();
        log::debug!("mock OSS endpoint at {}", server.uri());

        let client = OssClientBuilder::new(base_url.clone())
            .provider(Some(StaticProvider::new(
                ACCESS_KEY_ID,
                ACCESS_KEY_SECRET,
                security_token,
            )))
            .config(config)
            .build()
            .unwrap();

        Self {
            server,
            client,
            base_url,
            access_key: ACCESS_KEY_ID.to_string(),
            secret_key: ACCESS_KEY_SECRET.to_string(),
        }
    }

    /// Builds another client against the same mock server without credentials.
    pub fn anonymous_client(&self) -> OssClient {
        OssClientBuilder::new(self.base_url.clone()).build().unwrap()
    }
}
