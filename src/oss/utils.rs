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

//! Various utility and helper functions

use crate::oss::error::{ResponseErr, ValidationErr};
use base64::engine::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use http::HeaderMap;
use lazy_static::lazy_static;
use md5::compute as md5compute;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use xmltree::Element;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// Maximum length in bytes of an object key.
pub const MAX_OBJECT_NAME_LENGTH: usize = 1023;

/// Encodes data using base64 algorithm
pub fn b64encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Gets base64 encoded MD5 hash of given data
pub fn md5sum_hash(data: &[u8]) -> String {
    b64encode(md5compute(data).as_slice())
}

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    chrono::offset::Utc::now()
}

/// Gets HTTP `Date` header value of given time, e.g. `Mon, 02 Jan 2006 15:04:05 GMT`
pub fn to_http_header_value(time: UtcTime) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

const OBJECT_KEY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Percent-encodes an object key for use in a URL path, keeping `/` separators.
pub fn urlencode_object_key(key: &str) -> String {
    utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect()
}

/// Validates given bucket name against the OSS naming rules.
pub fn check_bucket_name(bucket_name: &str) -> Result<(), ValidationErr> {
    lazy_static! {
        static ref VALID_BUCKET_NAME_REGEX: Regex =
            Regex::new("^[a-z0-9][a-z0-9\\-]{1,61}[a-z0-9]$").unwrap();
    }

    let reason = if bucket_name.trim().is_empty() {
        "bucket name cannot be empty"
    } else if bucket_name.len() < 3 {
        "bucket name cannot be less than 3 characters"
    } else if bucket_name.len() > 63 {
        "bucket name cannot be greater than 63 characters"
    } else if !VALID_BUCKET_NAME_REGEX.is_match(bucket_name) {
        "bucket name may only contain lowercase letters, digits and hyphens, and must start and end with a letter or digit"
    } else {
        return Ok(());
    };

    Err(ValidationErr::InvalidBucketName {
        bucket: bucket_name.to_string(),
        reason: reason.into(),
    })
}

/// Validates given object name.
pub fn check_object_name(object_name: &str) -> Result<(), ValidationErr> {
    if object_name.is_empty() {
        return Err(ValidationErr::InvalidObjectName(
            "object name cannot be empty".into(),
        ));
    }
    if object_name.len() > MAX_OBJECT_NAME_LENGTH {
        return Err(ValidationErr::InvalidObjectName(format!(
            "object name cannot be greater than {MAX_OBJECT_NAME_LENGTH} bytes"
        )));
    }
    if object_name.starts_with('/') || object_name.starts_with('\\') {
        return Err(ValidationErr::InvalidObjectName(format!(
            "object name '{object_name}' cannot start with '/' or '\\'"
        )));
    }
    Ok(())
}

/// Gets optional text value of given XML element for given tag.
pub fn get_text_option(element: &Element, tag: &str) -> Option<String> {
    element
        .get_child(tag)
        .and_then(|v| v.get_text().map(|s| s.to_string()))
}

/// Parses a mandatory decimal header of a response.
pub fn parse_u64_header(headers: &HeaderMap, name: &'static str) -> Result<u64, ResponseErr> {
    let value = headers.get(name).ok_or(ResponseErr::MissingHeader(name))?;
    let text = value
        .to_str()
        .map_err(|_| ResponseErr::InvalidHeaderValue {
            name,
            value: String::from_utf8_lossy(value.as_bytes()).into_owned(),
        })?;
    text.trim()
        .parse::<u64>()
        .map_err(|_| ResponseErr::InvalidHeaderValue {
            name,
            value: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use http::HeaderValue;

    #[test]
    fn test_to_http_header_value() {
        let time = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
        assert_eq!(to_http_header_value(time), "Mon, 02 Jan 2006 15:04:05 GMT");
    }

    #[test]
    fn test_md5sum_hash() {
        assert_eq!(md5sum_hash(b""), "1B2M2Y8AsgTpgAmY7PhCfg==");
    }

    #[test]
    fn test_urlencode_object_key() {
        assert_eq!(urlencode_object_key("dir/a b+c.csv"), "dir/a%20b%2Bc.csv");
        assert_eq!(urlencode_object_key("test.csv"), "test.csv");
    }

    #[test]
    fn test_check_bucket_name() {
        assert!(check_bucket_name("objselect").is_ok());
        assert!(check_bucket_name("my-bucket-01").is_ok());
        assert!(check_bucket_name("").is_err());
        assert!(check_bucket_name("ab").is_err());
        assert!(check_bucket_name("My-Bucket").is_err());
        assert!(check_bucket_name("-bucket").is_err());
        assert!(check_bucket_name("bucket-").is_err());
        assert!(check_bucket_name("my.bucket").is_err());
        assert!(check_bucket_name(&"a".repeat(64)).is_err());
    }

    #[test]
    fn test_check_object_name() {
        assert!(check_object_name("test.csv").is_ok());
        assert!(check_object_name("dir/sub/test.csv").is_ok());
        assert!(check_object_name("").is_err());
        assert!(check_object_name("/test.csv").is_err());
        assert!(check_object_name("\\test.csv").is_err());
        assert!(check_object_name(&"a".repeat(1024)).is_err());
    }

    #[test]
    fn test_parse_u64_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-oss-select-csv-rows", HeaderValue::from_static("42"));
        headers.insert("x-oss-select-csv-splits", HeaderValue::from_static("many"));

        assert_eq!(parse_u64_header(&headers, "x-oss-select-csv-rows").unwrap(), 42);
        assert!(matches!(
            parse_u64_header(&headers, "x-oss-select-csv-columns"),
            Err(ResponseErr::MissingHeader("x-oss-select-csv-columns"))
        ));
        assert!(matches!(
            parse_u64_header(&headers, "x-oss-select-csv-splits"),
            Err(ResponseErr::InvalidHeaderValue { .. })
        ));
    }

    quickcheck! {
        fn prop_http_date_round_trips(secs: u32) -> bool {
            let time = Utc.timestamp_opt(secs as i64, 0).unwrap();
            let text = to_http_header_value(time);
            chrono::NaiveDateTime::parse_from_str(&text, "%a, %d %b %Y %H:%M:%S GMT")
                .map(|t| t.and_utc() == time)
                .unwrap_or(false)
        }
    }
}
