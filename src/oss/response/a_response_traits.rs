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
use crate::oss::header_constants::X_OSS_REQUEST_ID;
use crate::oss::types::{OssRequest, ProcessAction};
use http::HeaderMap;

#[macro_export]
/// Implements the `HasOssFields` trait for the specified types.
macro_rules! impl_has_oss_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl HasOssFields for $ty {
                /// The request that was sent to the OSS API.
                fn request(&self) -> &OssRequest {
                    &self.request
                }

                /// HTTP headers of the OSS response.
                fn headers(&self) -> &HeaderMap {
                    &self.headers
                }
            }
        )*
    };
}

pub trait HasOssFields {
    /// The request that was sent to the OSS API.
    fn request(&self) -> &OssRequest;
    /// HTTP headers returned by the server.
    fn headers(&self) -> &HeaderMap;
}

/// Returns the name of the OSS bucket.
pub trait HasBucket: HasOssFields {
    #[inline]
    fn bucket(&self) -> &str {
        &self.request().bucket
    }
}

/// Returns the object key the select operation ran against.
pub trait HasObject: HasOssFields {
    #[inline]
    fn object(&self) -> &str {
        &self.request().object
    }
}

/// Returns the select action (`select` or `meta`) of the request.
pub trait HasAction: HasOssFields {
    #[inline]
    fn action(&self) -> ProcessAction {
        self.request().action
    }
}

/// Returns the request id assigned by OSS (`x-oss-request-id`), if any.
pub trait HasRequestId: HasOssFields {
    #[inline]
    fn request_id(&self) -> Option<&str> {
        self.headers()
            .get(X_OSS_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
    }
}
