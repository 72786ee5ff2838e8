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

//! Basic types shared by requests and responses

use crate::oss::header_constants::X_OSS_PROCESS;
use std::fmt;

/// CSV processing action, sent as `x-oss-process=csv/{action}`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessAction {
    /// Run a select expression
    Select,
    /// Build or fetch CSV metadata
    Meta,
}

impl ProcessAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessAction::Select => "select",
            ProcessAction::Meta => "meta",
        }
    }

    /// Query string of the action, e.g. `x-oss-process=csv/select`
    pub fn query(&self) -> String {
        format!("{X_OSS_PROCESS}=csv/{}", self.as_str())
    }
}

impl fmt::Display for ProcessAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
