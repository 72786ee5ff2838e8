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

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_MD5: &str = "Content-MD5";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const DATE: &str = "Date";

pub const X_OSS_HEADER_PREFIX: &str = "x-oss-";

pub const X_OSS_SECURITY_TOKEN: &str = "x-oss-security-token";
pub const X_OSS_REQUEST_ID: &str = "x-oss-request-id";

pub const X_OSS_SELECT_CSV_ROWS: &str = "x-oss-select-csv-rows";
pub const X_OSS_SELECT_CSV_COLUMNS: &str = "x-oss-select-csv-columns";
pub const X_OSS_SELECT_CSV_SPLITS: &str = "x-oss-select-csv-splits";

/// Query parameter selecting the CSV processing action.
pub const X_OSS_PROCESS: &str = "x-oss-process";
