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
use oss_select::oss::client::ClientConfig;
use oss_select::oss::error::{Error, NetworkError, ValidationErr};
use oss_select::oss::multimap_ext::{Multimap, MultimapExt};
use oss_select::oss::oss_error_response::OssErrorCode;
use oss_select::oss::response::SelectObjectResponse;
use oss_select::oss::response::a_response_traits::{HasBucket, HasObject, HasRequestId};
use oss_select::oss::types::{OssApi, SelectOption, SelectRequest};
use oss_select_common::example::{
    SELECT_BUCKET, SELECT_EXPRESSION, SELECT_OBJECT, create_select_content_data,
    create_select_content_request,
};
use oss_select_common::test_context::TestContext;
use oss_select_common::utils::{b64, expected_authorization, oss_error_body, received_header};
use std::time::Duration;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const SELECT_RESOURCE: &str = "/objselect/test.csv?x-oss-process=csv/select";

async fn mount_select(ctx: &TestContext, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(format!("/{SELECT_BUCKET}/{SELECT_OBJECT}")))
        .and(query_param("x-oss-process", "csv/select"))
        .respond_with(response)
        .mount(&ctx.server)
        .await;
}

async fn only_request(ctx: &TestContext) -> wiremock::Request {
    let mut requests = ctx.server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests.remove(0)
}

#[tokio::test]
async fn select_object_to_bytes() {
    let ctx = TestContext::new().await;
    let (_, selected) = create_select_content_data();
    mount_select(
        &ctx,
        ResponseTemplate::new(200)
            .insert_header("x-oss-request-id", "5C1B138A109F4E405B2D")
            .set_body_string(selected.clone()),
    )
    .await;

    let resp: SelectObjectResponse = ctx
        .client
        .select_object(SELECT_BUCKET, SELECT_OBJECT, create_select_content_request())
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.bucket(), SELECT_BUCKET);
    assert_eq!(resp.object(), SELECT_OBJECT);
    assert_eq!(resp.request_id(), Some("5C1B138A109F4E405B2D"));

    let got = resp.to_bytes().await.unwrap();
    assert_eq!(got, selected.as_bytes());

    let req = only_request(&ctx).await;
    let body = String::from_utf8(req.body.clone()).unwrap();
    assert!(body.starts_with("<SelectRequest>"));
    assert!(body.contains(&format!("<Expression>{}</Expression>", b64(SELECT_EXPRESSION))));
    assert!(body.contains("<FileHeaderInfo>Ignore</FileHeaderInfo>"));
    assert!(body.contains(&format!("<RecordDelimiter>{}</RecordDelimiter>", b64("\n"))));
    assert!(body.contains(&format!("<FieldDelimiter>{}</FieldDelimiter>", b64(","))));
    assert_eq!(
        received_header(&req, "content-length"),
        Some(body.len().to_string().as_str())
    );

    let date = received_header(&req, "date").unwrap();
    assert!(date.ends_with(" GMT"));
    let expected = expected_authorization(
        &ctx.access_key,
        &ctx.secret_key,
        "POST",
        "",
        "",
        date,
        &[],
        SELECT_RESOURCE,
    );
    assert_eq!(received_header(&req, "authorization"), Some(expected.as_str()));
}

#[tokio::test]
async fn select_object_write_to_sink() {
    let ctx = TestContext::new().await;
    let (_, selected) = create_select_content_data();
    mount_select(&ctx, ResponseTemplate::new(200).set_body_string(selected.clone())).await;

    let resp = ctx
        .client
        .select_object(SELECT_BUCKET, SELECT_OBJECT, create_select_content_request())
        .build()
        .send()
        .await
        .unwrap();

    let mut sink: Vec<u8> = Vec::new();
    let written = resp.write_to(&mut sink).await.unwrap();
    assert_eq!(written, selected.len() as u64);
    assert_eq!(sink, selected.as_bytes());
}

#[tokio::test]
async fn select_object_to_file() {
    let ctx = TestContext::new().await;
    let (_, selected) = create_select_content_data();
    mount_select(&ctx, ResponseTemplate::new(200).set_body_string(selected.clone())).await;

    let dir = std::env::temp_dir().join(format!("oss-select-{}", std::process::id()));
    let file_path = dir.join("nested").join("selected.csv");

    let written = ctx
        .client
        .select_object(SELECT_BUCKET, SELECT_OBJECT, create_select_content_request())
        .build()
        .send()
        .await
        .unwrap()
        .to_file(&file_path)
        .await
        .unwrap();

    assert_eq!(written, selected.len() as u64);
    assert_eq!(std::fs::read_to_string(&file_path).unwrap(), selected);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn select_object_access_denied() {
    let ctx = TestContext::new().await;
    let body = oss_error_body(
        "AccessDenied",
        "You have no right to access this object.",
        "5C1B138A109F4E405B2DAB3F",
    );
    mount_select(
        &ctx,
        ResponseTemplate::new(403)
            .insert_header("content-type", "application/xml")
            .set_body_string(body.clone()),
    )
    .await;

    let resp: Result<SelectObjectResponse, Error> = ctx
        .client
        .select_object(SELECT_BUCKET, SELECT_OBJECT, create_select_content_request())
        .build()
        .send()
        .await;

    match resp {
        Err(Error::RequestFailed(e)) => {
            assert_eq!(e.status(), 403);
            assert_eq!(e.code(), Some(&OssErrorCode::AccessDenied));
            assert_eq!(e.message(), Some("You have no right to access this object."));
            assert_eq!(e.request_id(), Some("5C1B138A109F4E405B2DAB3F"));
            assert_eq!(e.body_text(), body);
        }
        v => panic!("Expected error RequestFailed(AccessDenied): but got {v:?}"),
    }
}

#[tokio::test]
async fn select_object_invalid_bucket_name() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .select_object("Invalid_Bucket", SELECT_OBJECT, create_select_content_request())
        .build()
        .send()
        .await;

    match resp {
        Err(Error::Validation(ValidationErr::InvalidBucketName { bucket, .. })) => {
            assert_eq!(bucket, "Invalid_Bucket")
        }
        v => panic!("Expected error InvalidBucketName: but got {v:?}"),
    }
    assert!(ctx.server.received_requests().await.unwrap().is_empty());
}

#[test]
fn select_request_rejects_unknown_file_header_info() {
    let resp = SelectRequest::with_options(
        SELECT_EXPRESSION,
        [
            SelectOption::InputFieldDelimiter(",".into()),
            SelectOption::FileHeaderInfo("Maybe".into()),
        ],
    );
    match resp {
        Err(ValidationErr::InvalidFileHeaderInfo(v)) => assert_eq!(v, "Maybe"),
        v => panic!("Expected error InvalidFileHeaderInfo: but got {v:?}"),
    }
}

#[tokio::test]
async fn select_object_signs_security_token_and_extra_headers() {
    let ctx = TestContext::new_with(ClientConfig::default(), Some("sts-token")).await;
    mount_select(&ctx, ResponseTemplate::new(200)).await;

    let mut extra_headers = Multimap::new();
    extra_headers.add("X-OSS-Meta-Owner", "analytics");
    extra_headers.add("x-request-tag", "unsigned");

    ctx.client
        .select_object(SELECT_BUCKET, SELECT_OBJECT, create_select_content_request())
        .extra_headers(Some(extra_headers))
        .build()
        .send()
        .await
        .unwrap()
        .to_bytes()
        .await
        .unwrap();

    let req = only_request(&ctx).await;
    assert_eq!(received_header(&req, "x-oss-security-token"), Some("sts-token"));
    assert_eq!(received_header(&req, "x-request-tag"), Some("unsigned"));

    let expected = expected_authorization(
        &ctx.access_key,
        &ctx.secret_key,
        "POST",
        "",
        "",
        received_header(&req, "date").unwrap(),
        &[
            ("x-oss-meta-owner", "analytics"),
            ("x-oss-security-token", "sts-token"),
        ],
        SELECT_RESOURCE,
    );
    assert_eq!(received_header(&req, "authorization"), Some(expected.as_str()));
}

#[tokio::test]
async fn select_object_sends_case_variant_header_once() {
    let ctx = TestContext::new().await;
    mount_select(&ctx, ResponseTemplate::new(200)).await;

    let mut extra_headers = Multimap::new();
    extra_headers.add("X-Oss-Meta-A", "1");
    extra_headers.add("x-oss-meta-a", "1");

    ctx.client
        .select_object(SELECT_BUCKET, SELECT_OBJECT, create_select_content_request())
        .extra_headers(Some(extra_headers))
        .build()
        .send()
        .await
        .unwrap();

    let req = only_request(&ctx).await;
    let values: Vec<&str> = req
        .headers
        .get_all("x-oss-meta-a")
        .iter()
        .map(|v| v.to_str().unwrap())
        .collect();
    assert_eq!(values, vec!["1"]);

    let expected = expected_authorization(
        &ctx.access_key,
        &ctx.secret_key,
        "POST",
        "",
        "",
        received_header(&req, "date").unwrap(),
        &[("x-oss-meta-a", "1")],
        SELECT_RESOURCE,
    );
    assert_eq!(received_header(&req, "authorization"), Some(expected.as_str()));
}

#[tokio::test]
async fn select_object_invalid_header_value() {
    let ctx = TestContext::new().await;
    mount_select(&ctx, ResponseTemplate::new(200)).await;

    let mut extra_headers = Multimap::new();
    extra_headers.add("x-oss-meta-a", "bad\nvalue");

    let resp = ctx
        .client
        .select_object(SELECT_BUCKET, SELECT_OBJECT, create_select_content_request())
        .extra_headers(Some(extra_headers))
        .build()
        .send()
        .await;

    match resp {
        Err(Error::Validation(ValidationErr::InvalidHeaderValue { name, value })) => {
            assert_eq!(name, "x-oss-meta-a");
            assert_eq!(value, "bad\nvalue");
        }
        v => panic!("Expected error InvalidHeaderValue: but got {v:?}"),
    }
    assert!(ctx.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn select_object_anonymous_is_unsigned() {
    let ctx = TestContext::new().await;
    mount_select(&ctx, ResponseTemplate::new(200).set_body_string("1\n")).await;

    let got = ctx
        .anonymous_client()
        .select_object(SELECT_BUCKET, SELECT_OBJECT, create_select_content_request())
        .build()
        .send()
        .await
        .unwrap()
        .to_bytes()
        .await
        .unwrap();
    assert_eq!(got, "1\n".as_bytes());

    let req = only_request(&ctx).await;
    assert!(received_header(&req, "authorization").is_none());
    assert!(received_header(&req, "date").is_some());
}

#[tokio::test]
async fn select_object_response_header_timeout() {
    let config = ClientConfig::default()
        .connect_timeout(Duration::from_millis(200))
        .tls_handshake_timeout(Duration::ZERO)
        .response_header_timeout(Duration::from_millis(200));
    let ctx = TestContext::new_with(config, None).await;
    mount_select(
        &ctx,
        ResponseTemplate::new(200).set_delay(Duration::from_secs(3)),
    )
    .await;

    let resp = ctx
        .client
        .select_object(SELECT_BUCKET, SELECT_OBJECT, create_select_content_request())
        .build()
        .send()
        .await;

    match resp {
        Err(Error::Network(NetworkError::ResponseHeaderTimeout(d))) => {
            assert_eq!(d, Duration::from_millis(400))
        }
        v => panic!("Expected error ResponseHeaderTimeout: but got {v:?}"),
    }
}
