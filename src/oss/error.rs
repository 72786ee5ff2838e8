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

//! Error definitions for OSS select operations

use crate::oss::oss_error_response::OssErrorResponse;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while validating caller input, before anything is sent.
#[derive(Error, Debug)]
pub enum ValidationErr {
    #[error("invalid value for FileHeaderInfo '{0}'; only allowed: Use, Ignore, None")]
    InvalidFileHeaderInfo(String),

    #[error("invalid range mode '{0}'; only allowed: line, split")]
    InvalidRangeMode(String),

    #[error("invalid range {start}-{end}: start must not be greater than end")]
    InvalidRange { start: u64, end: u64 },

    #[error("invalid compression type '{0}'; only allowed: None, GZIP")]
    InvalidCompressionType(String),

    #[error("invalid select expression: {0}")]
    InvalidSelectExpression(String),

    #[error("invalid bucket name '{bucket}': {reason}")]
    InvalidBucketName { bucket: String, reason: String },

    #[error("invalid object name: {0}")]
    InvalidObjectName(String),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid URI: {0}")]
    InvalidUri(#[from] http::uri::InvalidUri),

    #[error("header '{0}' is given more than once with different values")]
    ConflictingHeader(String),

    #[error("invalid header name '{0}'")]
    InvalidHeaderName(String),

    #[error("invalid value {value:?} for header '{name}'")]
    InvalidHeaderValue { name: String, value: String },

    #[error("invalid CA certificate: {0}")]
    InvalidCertificate(#[source] reqwest::Error),

    #[error("HTTP client could not be built: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Transport level failures.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("no response headers received within {0:?}")]
    ResponseHeaderTimeout(Duration),
}

/// Errors raised while decoding a successful response.
#[derive(Error, Debug)]
pub enum ResponseErr {
    #[error("response header '{0}' is missing")]
    MissingHeader(&'static str),

    #[error("response header '{name}' has invalid value '{value}'")]
    InvalidHeaderValue { name: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum IoError {
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}

/// Top level error returned by every client operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    /// The server answered with a non-2xx status.
    #[error("{0}")]
    RequestFailed(Box<OssErrorResponse>),

    #[error("response error: {0}")]
    Response(#[from] ResponseErr),

    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}

impl Error {
    /// Returns the server error details if the request was rejected by OSS.
    pub fn request_failed(&self) -> Option<&OssErrorResponse> {
        match self {
            Error::RequestFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<OssErrorResponse> for Error {
    fn from(e: OssErrorResponse) -> Self {
        Error::RequestFailed(Box::new(e))
    }
}
