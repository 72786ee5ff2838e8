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

//! Credential providers

use std::fmt;

#[derive(Clone)]
/// Credentials contain access key ID, access key secret and an optional STS security token
pub struct Credentials {
    pub access_key_id: String,
    pub access_key_secret: String,
    pub security_token: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("access_key_secret", &"<redacted>")
            .field(
                "security_token",
                &self.security_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Provider trait to fetch credentials
pub trait Provider: fmt::Debug {
    fn fetch(&self) -> Credentials;
}

#[derive(Clone, Debug)]
/// Static credential provider
pub struct StaticProvider {
    creds: Credentials,
}

impl StaticProvider {
    /// Returns a static provider with given access key ID, access key secret and optional security token
    ///
    /// # Examples
    ///
    /// ```
    /// use oss_select::oss::creds::StaticProvider;
    /// let provider = StaticProvider::new("LTAI5tExampleKeyId", "ExampleKeySecret", None);
    /// ```
    pub fn new(
        access_key_id: &str,
        access_key_secret: &str,
        security_token: Option<&str>,
    ) -> StaticProvider {
        StaticProvider {
            creds: Credentials {
                access_key_id: access_key_id.to_string(),
                access_key_secret: access_key_secret.to_string(),
                security_token: security_token.map(|v| v.to_string()),
            },
        }
    }
}

impl Provider for StaticProvider {
    fn fetch(&self) -> Credentials {
        self.creds.clone()
    }
}
