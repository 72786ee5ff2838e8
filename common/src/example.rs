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
use oss_select::oss::types::{CsvMetaRequest, FileHeaderInfo, SelectRequest};

pub const SELECT_BUCKET: &str = "objselect";
pub const SELECT_OBJECT: &str = "test.csv";
pub const SELECT_EXPRESSION: &str = "select _1, _2 from ossobject where cast(_2 as int) > 30";

/// Returns the CSV object used by the tests and the rows [`SELECT_EXPRESSION`]
/// keeps when the header line is ignored.
pub fn create_select_content_data() -> (String, String) {
    let mut data = String::new();
    data.push_str("name,age,city\n");
    data.push_str("Alice,32,Hangzhou\n");
    data.push_str("Bob,28,Beijing\n");
    data.push_str("Carol,41,Shanghai\n");
    data.push_str("Dave,19,Shenzhen\n");

    (data, String::from("Alice,32\nCarol,41\n"))
}

pub fn create_select_content_request() -> SelectRequest {
    SelectRequest::new(SELECT_EXPRESSION)
        .unwrap()
        .file_header_info(FileHeaderInfo::Ignore)
        .input_record_delimiter("\n")
        .input_field_delimiter(",")
}

pub fn create_csv_meta_request() -> CsvMetaRequest {
    CsvMetaRequest::new()
        .overwrite_if_exists(true)
        .record_delimiter("\n")
        .field_delimiter(",")
}
