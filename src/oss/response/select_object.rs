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
use crate::oss::error::{Error, IoError, NetworkError};
use crate::oss::response::a_response_traits::{
    HasAction, HasBucket, HasObject, HasOssFields, HasRequestId,
};
use crate::oss::types::{FromOssResponse, OssRequest};
use async_trait::async_trait;
use bytes::Bytes;
use futures_util::io::{AsyncWrite, AsyncWriteExt};
use futures_util::StreamExt;
use http::HeaderMap;
use std::mem;
use std::path::Path;

/// Response of
/// [select_object()](crate::oss::client::OssClient::select_object)
/// API
///
/// The body has not been read yet. Consume it with [`to_bytes`](Self::to_bytes),
/// [`write_to`](Self::write_to) or [`to_file`](Self::to_file); dropping the
/// response releases the connection.
#[derive(Debug)]
pub struct SelectObjectResponse {
    request: OssRequest,
    headers: HeaderMap,
    resp: reqwest::Response,
}

impl_has_oss_fields!(SelectObjectResponse);

impl HasBucket for SelectObjectResponse {}
impl HasObject for SelectObjectResponse {}
impl HasAction for SelectObjectResponse {}
impl HasRequestId for SelectObjectResponse {}

#[async_trait]
impl FromOssResponse for SelectObjectResponse {
    async fn from_oss_response(
        request: OssRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp: reqwest::Response = response?;
        Ok(Self {
            request,
            headers: mem::take(resp.headers_mut()),
            resp,
        })
    }
}

impl SelectObjectResponse {
    /// Reads the whole selection result into memory and returns it verbatim.
    pub async fn to_bytes(self) -> Result<Bytes, Error> {
        let body = self.resp.bytes().await.map_err(NetworkError::from)?;
        log::debug!(
            "select on /{}/{} returned {} bytes",
            self.request.bucket,
            self.request.object,
            body.len()
        );
        Ok(body)
    }

    /// Streams the selection result into `sink` and returns the number of
    /// bytes written. The sink is flushed but not closed.
    pub async fn write_to<W>(self, sink: &mut W) -> Result<u64, Error>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let mut stream = self.resp.bytes_stream();
        let mut total: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(NetworkError::from)?;
            if chunk.is_empty() {
                continue;
            }
            sink.write_all(&chunk).await.map_err(IoError::from)?;
            total += chunk.len() as u64;
        }
        sink.flush().await.map_err(IoError::from)?;
        log::debug!(
            "select on /{}/{} wrote {total} bytes to sink",
            self.request.bucket,
            self.request.object
        );
        Ok(total)
    }

    /// Streams the selection result into a file and returns the number of bytes
    /// written.
    ///
    /// An existing file is replaced. If the parent directory does not exist, an
    /// attempt to create it will be made.
    pub async fn to_file(self, file_path: &Path) -> Result<u64, Error> {
        if file_path.is_dir() {
            return Err(IoError::from(std::io::Error::other("path is a directory")).into());
        }
        if let Some(parent_dir) = file_path.parent()
            && !parent_dir.as_os_str().is_empty()
            && !parent_dir.is_dir()
        {
            async_std::fs::create_dir_all(parent_dir)
                .await
                .map_err(IoError::from)?;
        }
        let mut fp = async_std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(file_path)
            .await
            .map_err(IoError::from)?;
        self.write_to(&mut fp).await
    }
}
