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
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha1::Sha1;

/// Computes the `Authorization` value OSS expects for a request, written out
/// step by step so tests can check the client against it.
///
/// `oss_headers` must already be lowercased and sorted.
pub fn expected_authorization(
    access_key_id: &str,
    access_key_secret: &str,
    method: &str,
    content_md5: &str,
    content_type: &str,
    date: &str,
    oss_headers: &[(&str, &str)],
    resource: &str,
) -> String {
    let mut string_to_sign = format!("{method}\n{content_md5}\n{content_type}\n{date}\n");
    for (name, value) in oss_headers {
        string_to_sign.push_str(&format!("{name}:{value}\n"));
    }
    string_to_sign.push_str(resource);

    let mut mac = Hmac::<Sha1>::new_from_slice(access_key_secret.as_bytes()).unwrap();
    mac.update(string_to_sign.as_bytes());
    let signature = STANDARD.encode(mac.finalize().into_bytes());
    format!("OSS {access_key_id}:{signature}")
}

/// Returns the value of a header of a request received by the mock server.
pub fn received_header<'a>(request: &'a wiremock::Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|v| v.to_str().ok())
}

/// Standard base64 of `value`, as it appears in a select request body.
pub fn b64(value: &str) -> String {
    STANDARD.encode(value.as_bytes())
}

/// Renders the XML error document OSS answers failed requests with.
pub fn oss_error_body(code: &str, message: &str, request_id: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Error>\n  <Code>{code}</Code>\n  <Message>{message}</Message>\n  <RequestId>{request_id}</RequestId>\n  <HostId>objselect.oss-cn-hangzhou.aliyuncs.com</HostId>\n</Error>\n"
    )
}
