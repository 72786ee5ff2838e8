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

//! OssRequest struct and implementation for executing HTTP requests.

use super::basic_types::ProcessAction;
use crate::oss::client::OssClient;
use crate::oss::error::Error;
use crate::oss::multimap_ext::Multimap;
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
/// Generic OSS select request
pub struct OssRequest {
    #[builder(!default)] // force required
    pub(crate) client: OssClient,

    #[builder(default = Method::POST)]
    method: Method,

    #[builder(setter(into))]
    pub(crate) bucket: String,

    #[builder(setter(into))]
    pub(crate) object: String,

    #[builder(!default)]
    pub(crate) action: ProcessAction,

    #[builder(default)]
    headers: Multimap,

    #[builder(default)]
    body: Bytes,
}

impl OssRequest {
    /// Execute the request, returning the response. Only used in [`OssApi::send()`](super::OssApi::send)
    pub async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        self.client
            .execute(
                &self.method,
                &self.bucket,
                &self.object,
                self.action,
                &mut self.headers,
                self.body.clone(),
            )
            .await
    }

    /// Headers of the request; after execution they include the signed ones.
    pub fn headers(&self) -> &Multimap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}
