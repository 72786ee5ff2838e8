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

//! # OSS Select client (`oss-select`)
//!
//! An async client for the two CSV "select" operations of Alibaba Cloud Object
//! Storage Service: running a SQL-like query against a CSV object
//! (`SelectObject`) and building the CSV metadata the server needs to answer
//! such queries (`CreateSelectObjectMeta`).
//!
//! Each operation has a request builder ([`oss::builders::SelectObject`],
//! [`oss::builders::CsvMeta`]) created from an [`oss::OssClient`]. Builders
//! implement [`oss::types::OssApi`], whose async
//! [`send`](crate::oss::types::OssApi::send) signs the request with OSS
//! signature version 1, executes it and decodes the typed response.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use oss_select::oss::OssClientBuilder;
//! use oss_select::oss::creds::StaticProvider;
//! use oss_select::oss::http::BaseUrl;
//! use oss_select::oss::types::{FileHeaderInfo, OssApi, SelectRequest};
//!
//! #[tokio::main]
//! async fn main() {
//!     let base_url: BaseUrl = "https://oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
//!     let client = OssClientBuilder::new(base_url)
//!         .provider(Some(StaticProvider::new("access-key-id", "access-key-secret", None)))
//!         .build()
//!         .unwrap();
//!
//!     let request = SelectRequest::new("select * from ossobject where _1 > 100")
//!         .unwrap()
//!         .file_header_info(FileHeaderInfo::Ignore);
//!
//!     let data = client
//!         .select_object("my-bucket", "data/people.csv", request)
//!         .build()
//!         .send()
//!         .await
//!         .expect("request failed")
//!         .to_bytes()
//!         .await
//!         .unwrap();
//!
//!     println!("{}", String::from_utf8_lossy(&data));
//! }
//! ```
//!
//! ## Design
//! - Each API method on [`oss::OssClient`] returns a builder struct
//! - Builders implement [`oss::types::ToOssRequest`] for request conversion and [`oss::types::OssApi`] for execution
//! - Responses implement [`oss::types::FromOssResponse`]

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod oss;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
