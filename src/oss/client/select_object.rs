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

use crate::oss::builders::{SelectObject, SelectObjectBldr};
use crate::oss::client::OssClient;
use crate::oss::types::SelectRequest;

impl OssClient {
    /// Creates a [`SelectObject`] request builder to run a SQL expression
    /// over a CSV object.
    ///
    /// To execute the request, call [`SelectObject::send()`](crate::oss::types::OssApi::send),
    /// which returns a [`Result`] containing a [`SelectObjectResponse`](crate::oss::response::SelectObjectResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use oss_select::oss::OssClient;
    /// use oss_select::oss::creds::StaticProvider;
    /// use oss_select::oss::http::BaseUrl;
    /// use oss_select::oss::types::{FileHeaderInfo, OssApi, SelectRequest};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url: BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
    ///     let static_provider = StaticProvider::new("LTAI5tExampleKeyId", "ExampleKeySecret", None);
    ///     let client = OssClient::new(base_url, Some(static_provider), None, None).unwrap();
    ///
    ///     let request = SelectRequest::new("select count(*) from ossobject")
    ///         .unwrap()
    ///         .file_header_info(FileHeaderInfo::Use);
    ///     let mut out = Vec::new();
    ///     let written = client
    ///         .select_object("objselect", "test.csv", request)
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap()
    ///         .write_to(&mut out)
    ///         .await
    ///         .unwrap();
    ///     println!("received {written} bytes");
    /// }
    /// ```
    pub fn select_object<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        object: S2,
        request: SelectRequest,
    ) -> SelectObjectBldr {
        SelectObject::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
            .request(request)
    }
}
