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

//! Request and body types of the OSS select client

mod basic_types;
mod oss_request;
pub mod serialization;
mod traits;

pub use basic_types::ProcessAction;
pub use oss_request::OssRequest;
pub use serialization::{
    CompressionType, CsvMetaOption, CsvMetaRequest, FileHeaderInfo, RangeMode, SelectOption,
    SelectRange, SelectRequest,
};
pub use traits::{FromOssResponse, OssApi, ToOssRequest};
