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

//! Error document returned by OSS for rejected requests

use crate::oss::header_constants::X_OSS_REQUEST_ID;
use crate::oss::utils::get_text_option;
use bytes::{Buf, Bytes};
use http::HeaderMap;
use std::borrow::Cow;
use std::fmt;
use xmltree::Element;

/// Error codes reported in the `<Code>` element of an OSS error document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OssErrorCode {
    AccessDenied,
    InvalidAccessKeyId,
    SignatureDoesNotMatch,
    RequestTimeTooSkewed,
    NoSuchBucket,
    NoSuchKey,
    InvalidArgument,
    MalformedXML,
    OtherError(String),
}

impl From<&str> for OssErrorCode {
    fn from(s: &str) -> Self {
        match s {
            "AccessDenied" => OssErrorCode::AccessDenied,
            "InvalidAccessKeyId" => OssErrorCode::InvalidAccessKeyId,
            "SignatureDoesNotMatch" => OssErrorCode::SignatureDoesNotMatch,
            "RequestTimeTooSkewed" => OssErrorCode::RequestTimeTooSkewed,
            "NoSuchBucket" => OssErrorCode::NoSuchBucket,
            "NoSuchKey" => OssErrorCode::NoSuchKey,
            "InvalidArgument" => OssErrorCode::InvalidArgument,
            "MalformedXML" => OssErrorCode::MalformedXML,
            v => OssErrorCode::OtherError(v.to_owned()),
        }
    }
}

impl fmt::Display for OssErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OssErrorCode::AccessDenied => write!(f, "AccessDenied"),
            OssErrorCode::InvalidAccessKeyId => write!(f, "InvalidAccessKeyId"),
            OssErrorCode::SignatureDoesNotMatch => write!(f, "SignatureDoesNotMatch"),
            OssErrorCode::RequestTimeTooSkewed => write!(f, "RequestTimeTooSkewed"),
            OssErrorCode::NoSuchBucket => write!(f, "NoSuchBucket"),
            OssErrorCode::NoSuchKey => write!(f, "NoSuchKey"),
            OssErrorCode::InvalidArgument => write!(f, "InvalidArgument"),
            OssErrorCode::MalformedXML => write!(f, "MalformedXML"),
            OssErrorCode::OtherError(v) => write!(f, "{v}"),
        }
    }
}

/// A non-2xx answer of OSS.
///
/// Status, headers and the raw body are always kept. When the body is an
/// OSS `<Error>` document its fields are parsed as well.
#[derive(Clone, Debug)]
pub struct OssErrorResponse {
    status: u16,
    headers: HeaderMap,
    body: Bytes,
    code: Option<OssErrorCode>,
    message: Option<String>,
    request_id: Option<String>,
    host_id: Option<String>,
}

impl OssErrorResponse {
    pub fn new(status: u16, headers: HeaderMap, body: Bytes) -> Self {
        let root = Element::parse(body.clone().reader())
            .ok()
            .filter(|root| root.name == "Error");

        let header_request_id = headers
            .get(X_OSS_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        match root {
            Some(root) => Self {
                code: get_text_option(&root, "Code").map(|v| OssErrorCode::from(v.as_str())),
                message: get_text_option(&root, "Message"),
                request_id: get_text_option(&root, "RequestId").or(header_request_id),
                host_id: get_text_option(&root, "HostId"),
                status,
                headers,
                body,
            },
            None => Self {
                code: None,
                message: None,
                request_id: header_request_id,
                host_id: None,
                status,
                headers,
                body,
            },
        }
    }

    /// HTTP status code of the response
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw response body, exactly as received
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Response body decoded as UTF-8, lossily
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn code(&self) -> Option<&OssErrorCode> {
        self.code.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Request ID from the error document, or from the `x-oss-request-id` header
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn host_id(&self) -> Option<&str> {
        self.host_id.as_deref()
    }
}

impl fmt::Display for OssErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OSS request failed with status {}", self.status)?;
        match &self.code {
            Some(code) => {
                write!(f, ": {code}")?;
                if let Some(message) = &self.message {
                    write!(f, " ({message})")?;
                }
            }
            None if !self.body.is_empty() => write!(f, ": {}", self.body_text())?,
            None => {}
        }
        if let Some(request_id) = &self.request_id {
            write!(f, ", request id {request_id}")?;
        }
        Ok(())
    }
}
