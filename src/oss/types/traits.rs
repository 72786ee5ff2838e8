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

//! Core traits for OSS request and response handling.

use super::oss_request::OssRequest;
use crate::oss::error::Error;
use async_trait::async_trait;

/// Converts a request builder into a concrete, not yet signed, [`OssRequest`].
///
/// Implementations validate the bucket and object names and serialise the
/// request body; nothing is sent.
pub trait ToOssRequest: Sized {
    fn to_oss_request(self) -> Result<OssRequest, Error>;
}

/// Converts the outcome of an executed [`OssRequest`] into a typed response.
///
/// `response` is `Err` when the transport failed or the server answered
/// with a non-2xx status; implementations pass such errors through.
#[async_trait]
pub trait FromOssResponse: Sized {
    async fn from_oss_response(
        request: OssRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

/// Common interface of every OSS API request builder.
///
/// [`send`](OssApi::send) converts the builder with [`ToOssRequest`],
/// signs and executes it, then decodes the result with [`FromOssResponse`].
#[async_trait]
pub trait OssApi: ToOssRequest {
    /// The response type associated with this request builder.
    type OssResponse: FromOssResponse;

    /// Sends the request and returns the typed response.
    async fn send(self) -> Result<Self::OssResponse, Error> {
        let mut req: OssRequest = self.to_oss_request()?;
        let resp: Result<reqwest::Response, Error> = req.execute().await;
        Self::OssResponse::from_oss_response(req, resp).await
    }
}
