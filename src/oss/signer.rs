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

//! OSS signature version 1 (header based HMAC-SHA1)

use crate::oss::error::ValidationErr;
use crate::oss::header_constants::*;
use crate::oss::multimap_ext::{Multimap, MultimapExt};
use crate::oss::types::ProcessAction;
use crate::oss::utils::b64encode;
use hmac::{Hmac, Mac};
use http::Method;
use sha1::Sha1;
use std::collections::BTreeMap;

/// Returns HMAC-SHA1 hash for given key and data
pub fn hmac_sha1(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut hasher = Hmac::<Sha1>::new_from_slice(key).expect("HMAC can take key of any size");
    hasher.update(data);
    hasher.finalize().into_bytes().to_vec()
}

/// Collects headers whose lowercased name starts with `prefix` into
/// `name:value\n` lines sorted by name.
///
/// Names are lowercased before sorting. When several entries share a
/// lowercased name, the byte-wise smallest value is kept.
pub fn canonicalize_headers_with_prefix(headers: &Multimap, prefix: &str) -> String {
    let mut canonical = String::new();
    for (key, value) in canonical_header_pairs(headers, prefix) {
        canonical.push_str(&key);
        canonical.push(':');
        canonical.push_str(value);
        canonical.push('\n');
    }
    canonical
}

fn canonical_header_pairs<'a>(headers: &'a Multimap, prefix: &str) -> BTreeMap<String, &'a str> {
    let prefix = prefix.to_ascii_lowercase();
    let mut btmap: BTreeMap<String, &str> = BTreeMap::new();

    for (name, values) in headers.iter_all() {
        let key = name.to_ascii_lowercase();
        if !key.starts_with(&prefix) {
            continue;
        }
        for value in values {
            btmap
                .entry(key.clone())
                .and_modify(|v| {
                    if value.as_str() < *v {
                        *v = value.as_str();
                    }
                })
                .or_insert(value.as_str());
        }
    }
    btmap
}

/// Returns the canonical `x-oss-*` header block
pub fn get_canonical_headers(headers: &Multimap) -> String {
    canonicalize_headers_with_prefix(headers, X_OSS_HEADER_PREFIX)
}

/// Returns the canonical resource `/{bucket}/{object}?x-oss-process=csv/{action}`.
///
/// The object key is used as is, without percent-encoding.
pub fn get_canonical_resource(bucket: &str, object: &str, action: ProcessAction) -> String {
    format!("/{bucket}/{object}?{}", action.query())
}

/// Returns string-to-sign value of given request parts
pub fn get_string_to_sign(
    method: &Method,
    content_md5: &str,
    content_type: &str,
    date: &str,
    canonical_headers: &str,
    canonical_resource: &str,
) -> String {
    // StringToSign =
    //   VERB + "\n" +
    //   Content-MD5 + "\n" +
    //   Content-Type + "\n" +
    //   Date + "\n" +
    //   CanonicalizedOSSHeaders +
    //   CanonicalizedResource
    format!("{method}\n{content_md5}\n{content_type}\n{date}\n{canonical_headers}{canonical_resource}")
}

/// Returns base64 encoded HMAC-SHA1 signature of string-to-sign
pub fn get_signature(access_key_secret: &str, string_to_sign: &str) -> String {
    b64encode(hmac_sha1(
        access_key_secret.as_bytes(),
        string_to_sign.as_bytes(),
    ))
}

/// Returns authorization value for given access key ID and signature
pub fn get_authorization(access_key_id: &str, signature: &str) -> String {
    format!("OSS {access_key_id}:{signature}")
}

/// Fails when a signed header is given more than once, under any letter
/// case, with different values.
pub fn check_signed_headers(headers: &Multimap) -> Result<(), ValidationErr> {
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    for (name, values) in headers.iter_all() {
        let key = name.to_ascii_lowercase();
        if !key.starts_with(X_OSS_HEADER_PREFIX) {
            continue;
        }
        for value in values {
            match seen.get(&key) {
                Some(v) if *v != value.as_str() => {
                    return Err(ValidationErr::ConflictingHeader(key));
                }
                Some(_) => {}
                None => {
                    seen.insert(key.clone(), value.as_str());
                }
            }
        }
    }
    Ok(())
}

/// Replaces every signed header with a single lowercased entry, so each
/// `x-oss-*` header goes on the wire exactly once with the value that was
/// signed. Run [`check_signed_headers`] first.
pub fn collapse_signed_headers(headers: &mut Multimap) {
    let mut collapsed = Multimap::new();
    for (key, value) in canonical_header_pairs(headers, X_OSS_HEADER_PREFIX) {
        collapsed.add(key, value);
    }
    headers.retain(|k, _| !k.to_ascii_lowercase().starts_with(X_OSS_HEADER_PREFIX));
    headers.add_multimap(collapsed);
}

/// Signs and updates headers for given parameters.
///
/// `Content-MD5`, `Content-Type` and `Date` are read from `headers` (any
/// letter case, empty when absent). Any previous `Authorization` header is
/// replaced.
pub fn sign_v1(
    method: &Method,
    canonical_resource: &str,
    headers: &mut Multimap,
    access_key_id: &str,
    access_key_secret: &str,
) {
    let string_to_sign = get_string_to_sign(
        method,
        headers.get_ignore_case(CONTENT_MD5).unwrap_or_default(),
        headers.get_ignore_case(CONTENT_TYPE).unwrap_or_default(),
        headers.get_ignore_case(DATE).unwrap_or_default(),
        &get_canonical_headers(headers),
        canonical_resource,
    );
    log::trace!("string to sign: {string_to_sign:?}");

    let signature = get_signature(access_key_secret, &string_to_sign);
    let authorization = get_authorization(access_key_id, &signature);

    headers.remove_ignore_case(AUTHORIZATION);
    headers.add(AUTHORIZATION, authorization);
}
