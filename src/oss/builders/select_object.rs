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
use crate::oss::response::SelectObjectResponse;
use crate::oss::types::{OssApi, OssRequest, ProcessAction, SelectRequest, ToOssRequest};
use crate::oss::utils::{check_bucket_name, check_object_name};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the SelectObject OSS API operation, which runs a SQL
/// expression over a CSV object.
///
/// This struct constructs the parameters required for the [`OssClient::select_object`](crate::oss::client::OssClient::select_object) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct SelectObject {
    #[builder(!default)] // force required
    client: OssClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
    #[builder(!default)] // force required
    request: SelectRequest,
}

pub type SelectObjectBldr =
    SelectObjectBuilder<((OssClient,), (), (String,), (String,), (SelectRequest,))>;

impl OssApi for SelectObject {
    type OssResponse = SelectObjectResponse;
}

impl ToOssRequest for SelectObject {
    fn to_oss_request(self) -> Result<OssRequest, Error> {
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;

        let body = Bytes::from(self.request.to_xml());

        Ok(OssRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .bucket(self.bucket)
            .object(self.object)
            .action(ProcessAction::Select)
            .headers(self.extra_headers.unwrap_or_default())
            .body(body)
            .build())
    }
}
