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

//! Compression types of the CSV input

use crate::oss::error::ValidationErr;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompressionType {
    #[default]
    None,
    Gzip,
}

impl fmt::Display for CompressionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CompressionType::None => write!(f, "None"),
            CompressionType::Gzip => write!(f, "GZIP"),
        }
    }
}

impl FromStr for CompressionType {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(CompressionType::None),
            "GZIP" => Ok(CompressionType::Gzip),
            _ => Err(ValidationErr::InvalidCompressionType(s.to_string())),
        }
    }
}
