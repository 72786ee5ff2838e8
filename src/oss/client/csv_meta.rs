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

use crate::oss::builders::{CsvMeta, CsvMetaBldr};
use crate::oss::client::OssClient;
use crate::oss::types::CsvMetaRequest;

impl OssClient {
    /// Creates a [`CsvMeta`] request builder to fetch the row, column and
    /// split counts of a CSV object.
    ///
    /// To execute the request, call [`CsvMeta::send()`](crate::oss::types::OssApi::send),
    /// which returns a [`Result`] containing a [`CsvMetaResponse`](crate::oss::response::CsvMetaResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use oss_select::oss::OssClient;
    /// use oss_select::oss::creds::StaticProvider;
    /// use oss_select::oss::http::BaseUrl;
    /// use oss_select::oss::types::{CsvMetaRequest, OssApi};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url: BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
    ///     let static_provider = StaticProvider::new("LTAI5tExampleKeyId", "ExampleKeySecret", None);
    ///     let client = OssClient::new(base_url, Some(static_provider), None, None).unwrap();
    ///
    ///     let resp = client
    ///         .csv_meta("objselect", "test.csv", CsvMetaRequest::new().overwrite_if_exists(true))
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("{} rows, {} columns, {} splits", resp.rows(), resp.columns(), resp.splits());
    /// }
    /// ```
    pub fn csv_meta<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        object: S2,
        request: CsvMetaRequest,
    ) -> CsvMetaBldr {
        CsvMeta::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
            .request(request)
    }
}
