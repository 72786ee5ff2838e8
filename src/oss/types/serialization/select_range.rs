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

//! Line or split range restricting the part of a CSV object that is scanned

use crate::oss::error::ValidationErr;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeMode {
    /// Range counted in lines
    Line,
    /// Range counted in splits, as reported by the metadata operation
    Split,
}

impl fmt::Display for RangeMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RangeMode::Line => write!(f, "line"),
            RangeMode::Split => write!(f, "split"),
        }
    }
}

impl FromStr for RangeMode {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(RangeMode::Line),
            "split" => Ok(RangeMode::Split),
            _ => Err(ValidationErr::InvalidRangeMode(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Inclusive range rendered as `{mode}-range={start}-{end}`
pub struct SelectRange {
    mode: RangeMode,
    start: u64,
    end: u64,
}

impl SelectRange {
    pub fn new(mode: RangeMode, start: u64, end: u64) -> Result<Self, ValidationErr> {
        if start > end {
            return Err(ValidationErr::InvalidRange { start, end });
        }
        Ok(Self { mode, start, end })
    }

    pub fn mode(&self) -> RangeMode {
        self.mode
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }
}

impl fmt::Display for SelectRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-range={}-{}", self.mode, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let range = SelectRange::new(RangeMode::Line, 0, 10).unwrap();
        assert_eq!(range.to_string(), "line-range=0-10");
        let range = SelectRange::new(RangeMode::Split, 3, 3).unwrap();
        assert_eq!(range.to_string(), "split-range=3-3");
    }

    #[test]
    fn test_invalid_mode_and_bounds() {
        assert!(matches!(
            "lines".parse::<RangeMode>(),
            Err(ValidationErr::InvalidRangeMode(_))
        ));
        assert!(matches!(
            SelectRange::new(RangeMode::Line, 5, 4),
            Err(ValidationErr::InvalidRange { start: 5, end: 4 })
        ));
    }
}
