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

use crate::oss::error::ValidationErr;
use crate::oss::types::ProcessAction;
use crate::oss::utils::urlencode_object_key;
use http::Uri;
use std::fmt;
use std::net::{IpAddr, Ipv6Addr};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents HTTP URL of a select request
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    /// Raw query string, without the leading `?`
    pub query: String,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(fmt::Error);
        }

        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }

        f.write_str(&self.host_header_value())?;

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query)?;
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents Base URL of an OSS endpoint
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    /// Address buckets as `{bucket}.{host}`; otherwise as `{host}/{bucket}`
    pub virtual_style: bool,
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Convert a string to a BaseUrl.
    ///
    /// Enables use of [`str::parse`] method to create a [`BaseUrl`].
    ///
    /// # Examples
    ///
    /// ```
    /// use oss_select::oss::http::BaseUrl;
    /// use std::str::FromStr;
    ///
    /// // Get base URL from host name
    /// let base_url = "oss-cn-hangzhou.aliyuncs.com".parse::<BaseUrl>().unwrap();
    /// let base_url = BaseUrl::from_str("oss-cn-hangzhou.aliyuncs.com").unwrap();
    /// // Get base URL from scheme, IPv4 address and port
    /// let base_url: BaseUrl = "http://192.168.124.63:9000".parse().unwrap();
    /// assert!(!base_url.virtual_style);
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let url = s.parse::<Uri>()?;

        let https = match url.scheme() {
            None => true,
            Some(scheme) => match scheme.as_str() {
                "http" => false,
                "https" => true,
                _ => {
                    return Err(ValidationErr::InvalidBaseUrl(
                        "scheme must be http or https".into(),
                    ));
                }
            },
        };

        let host = match url.host() {
            Some(h) if !h.is_empty() => h,
            _ => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };

        let bare_host = host.trim_start_matches('[').trim_end_matches(']');
        let is_ip = bare_host.parse::<IpAddr>().is_ok();
        let host = if bare_host.parse::<Ipv6Addr>().is_ok() {
            format!("[{bare_host}]")
        } else {
            host.to_string()
        };

        let mut port = match url.port() {
            Some(p) => p.as_u16(),
            _ => 0u16,
        };

        if (https && port == 443) || (!https && port == 80) {
            port = 0u16;
        }

        if url.path() != "/" && !url.path().is_empty() {
            return Err(ValidationErr::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }

        if url.query().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        let virtual_style = !is_ip && !host.eq_ignore_ascii_case("localhost");

        Ok(BaseUrl {
            https,
            host,
            port,
            virtual_style,
        })
    }
}

impl BaseUrl {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Builds the URL of a CSV processing request:
    /// `{scheme}://{bucket}.{host}/{object}?x-oss-process=csv/{action}`, or
    /// `{scheme}://{host}/{bucket}/{object}?...` when not virtual style.
    ///
    /// The object key is percent-encoded, keeping `/` separators.
    pub fn build_url(&self, bucket: &str, object: &str, action: ProcessAction) -> Url {
        let mut host = self.host.clone();
        let mut path = String::new();

        if self.virtual_style {
            host = format!("{bucket}.{host}");
        } else {
            path.push('/');
            path.push_str(bucket);
        }

        path.push('/');
        path.push_str(&urlencode_object_key(object));

        Url {
            https: self.https,
            host,
            port: self.port,
            path,
            query: action.query(),
        }
    }
}
