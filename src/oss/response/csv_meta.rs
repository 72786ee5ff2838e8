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
use crate::impl_has_oss_fields;
use crate::oss::error::{Error, NetworkError};
use crate::oss::header_constants::{
    CONTENT_LENGTH, X_OSS_SELECT_CSV_COLUMNS, X_OSS_SELECT_CSV_ROWS, X_OSS_SELECT_CSV_SPLITS,
};
use crate::oss::response::a_response_traits::{
    HasAction, HasBucket, HasObject, HasOssFields, HasRequestId,
};
use crate::oss::types::{FromOssResponse, OssRequest};
use crate::oss::utils::parse_u64_header;
use async_trait::async_trait;
use http::HeaderMap;
use std::mem;

/// Counters reported by OSS for a CSV object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CsvMetaResult {
    pub rows: u64,
    pub columns: u64,
    pub splits: u64,
    pub content_length: u64,
}

impl CsvMetaResult {
    /// Parses the counters from the response headers. Every header is required.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, Error> {
        Ok(Self {
            rows: parse_u64_header(headers, X_OSS_SELECT_CSV_ROWS)?,
            columns: parse_u64_header(headers, X_OSS_SELECT_CSV_COLUMNS)?,
            splits: parse_u64_header(headers, X_OSS_SELECT_CSV_SPLITS)?,
            content_length: parse_u64_header(headers, CONTENT_LENGTH)?,
        })
    }
}

/// Response of
/// [csv_meta()](crate::oss::client::OssClient::csv_meta)
/// API
#[derive(Clone, Debug)]
pub struct CsvMetaResponse {
    request: OssRequest,
    headers: HeaderMap,
    meta: CsvMetaResult,
}

impl_has_oss_fields!(CsvMetaResponse);

impl HasBucket for CsvMetaResponse {}
impl HasObject for CsvMetaResponse {}
impl HasAction for CsvMetaResponse {}
impl HasRequestId for CsvMetaResponse {}

#[async_trait]
impl FromOssResponse for CsvMetaResponse {
    async fn from_oss_response(
        request: OssRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp: reqwest::Response = response?;
        let headers = mem::take(resp.headers_mut());
        // drain so the connection goes back to the pool
        resp.bytes().await.map_err(NetworkError::from)?;

        let meta = CsvMetaResult::from_headers(&headers).inspect_err(|e| {
            log::debug!(
                "csv meta of /{}/{} could not be parsed: {e}",
                request.bucket,
                request.object
            )
        })?;

        Ok(Self {
            request,
            headers,
            meta,
        })
    }
}

impl CsvMetaResponse {
    pub fn meta(&self) -> CsvMetaResult {
        self.meta
    }

    /// Number of rows in the CSV object.
    pub fn rows(&self) -> u64 {
        self.meta.rows
    }

    /// Number of columns in the CSV object.
    pub fn columns(&self) -> u64 {
        self.meta.columns
    }

    /// Number of splits OSS divided the CSV object into.
    pub fn splits(&self) -> u64 {
        self.meta.splits
    }

    pub fn content_length(&self) -> u64 {
        self.meta.content_length
    }
}
