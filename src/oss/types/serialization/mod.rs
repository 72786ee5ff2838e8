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

//! Request bodies of the CSV select operations

pub mod compression_type;
pub mod csv_meta_request;
pub mod file_header_info;
pub mod select_range;
pub mod select_request;

pub use compression_type::CompressionType;
pub use csv_meta_request::{CsvMetaOption, CsvMetaRequest};
pub use file_header_info::FileHeaderInfo;
pub use select_range::{RangeMode, SelectRange};
pub use select_request::{SelectOption, SelectRequest};

use crate::oss::utils::b64encode;

/// Base64 encodes a delimiter, quote or comment value; empty input means "not set".
fn encode_field(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(b64encode(value))
    }
}

/// Appends `<tag>value</tag>`.
///
/// Values reaching this point are base64 text or enum names, none of which need XML escaping.
fn push_element(data: &mut String, tag: &str, value: &str) {
    data.push('<');
    data.push_str(tag);
    data.push('>');
    data.push_str(value);
    data.push_str("</");
    data.push_str(tag);
    data.push('>');
}

fn push_optional(data: &mut String, tag: &str, value: &Option<String>) {
    if let Some(v) = value {
        push_element(data, tag, v);
    }
}
