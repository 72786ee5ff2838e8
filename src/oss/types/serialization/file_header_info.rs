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

//! Header handling of the CSV input

use crate::oss::error::ValidationErr;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// How the first line of a CSV object is treated
pub enum FileHeaderInfo {
    /// The first line holds column names usable in the expression
    Use,
    /// The first line is a header and is skipped
    Ignore,
    /// There is no header line
    #[default]
    None,
}

impl fmt::Display for FileHeaderInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FileHeaderInfo::Use => write!(f, "Use"),
            FileHeaderInfo::Ignore => write!(f, "Ignore"),
            FileHeaderInfo::None => write!(f, "None"),
        }
    }
}

impl FromStr for FileHeaderInfo {
    type Err = ValidationErr;

    /// Parses one of `Use`, `Ignore` or `None`; matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Use" => Ok(FileHeaderInfo::Use),
            "Ignore" => Ok(FileHeaderInfo::Ignore),
            "None" => Ok(FileHeaderInfo::None),
            _ => Err(ValidationErr::InvalidFileHeaderInfo(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_only_known_values() {
        assert_eq!("Use".parse::<FileHeaderInfo>().unwrap(), FileHeaderInfo::Use);
        assert_eq!(
            "Ignore".parse::<FileHeaderInfo>().unwrap(),
            FileHeaderInfo::Ignore
        );
        assert_eq!("None".parse::<FileHeaderInfo>().unwrap(), FileHeaderInfo::None);

        for bad in ["Maybe", "use", "NONE", ""] {
            assert!(matches!(
                bad.parse::<FileHeaderInfo>(),
                Err(ValidationErr::InvalidFileHeaderInfo(v)) if v == bad
            ));
        }
    }
}
