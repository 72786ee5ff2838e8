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

use crate::oss::client::OssClient;
use crate::oss::error::Error;
use crate::oss::multimap_ext::Multimap;
use crate::oss::response::CsvMetaResponse;
use crate::oss::types::{CsvMetaRequest, OssApi, OssRequest, ProcessAction, ToOssRequest};
use crate::oss::utils::{check_bucket_name, check_object_name};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the CreateSelectObjectMeta OSS API operation, which
/// reports row, column and split counts of a CSV object.
///
/// This struct constructs the parameters required for the [`OssClient::csv_meta`](crate::oss::client::OssClient::csv_meta) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CsvMeta {
    #[builder(!default)] // force required
    client: OssClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
    #[builder(!default)] // force required
    request: CsvMetaRequest,
}

pub type CsvMetaBldr = CsvMetaBuilder<((OssClient,), (), (String,), (String,), (CsvMetaRequest,))>;

impl OssApi for CsvMeta {
    type OssResponse = CsvMetaResponse;
}

impl ToOssRequest for CsvMeta {
    fn to_oss_request(self) -> Result<OssRequest, Error> {
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;

        let body = Bytes::from(self.request.to_xml());

        Ok(OssRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .bucket(self.bucket)
            .object(self.object)
            .action(ProcessAction::Meta)
            .headers(self.extra_headers.unwrap_or_default())
            .body(body)
            .build())
    }
}
