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

//! OSS client to run CSV select and metadata operations.
//!
//! # HTTP Version Support
//!
//! When connecting over TLS the client negotiates HTTP/2 via ALPN if the
//! server supports it, otherwise it falls back to HTTP/1.1. HTTP/2 support is
//! enabled by the default `http2` feature flag.

use bytes::Bytes;
use http::Method;
use http::{HeaderMap, HeaderName, HeaderValue};
use std::fmt::Debug;
use std::fs::File;
use std::io::prelude::*;
use std::mem;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::oss::creds::Provider;
use crate::oss::error::{Error, IoError, NetworkError, ValidationErr};
use crate::oss::header_constants::*;
use crate::oss::http::{BaseUrl, Url};
use crate::oss::multimap_ext::{Multimap, MultimapExt};
use crate::oss::oss_error_response::OssErrorResponse;
use crate::oss::signer::{
    check_signed_headers, collapse_signed_headers, get_canonical_resource, sign_v1,
};
use crate::oss::types::ProcessAction;
use crate::oss::utils::{md5sum_hash, to_http_header_value, utc_now};

mod csv_meta;
mod select_object;

/// Timeouts and keep-alive of the HTTP transport.
///
/// # Example
///
/// ```
/// use oss_select::oss::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .connect_timeout(Duration::from_secs(3))
///     .response_header_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Time allowed to establish the TCP connection. Default: 10 seconds
    pub connect_timeout: Duration,

    /// Time allowed for the TLS handshake. Default: 5 seconds
    pub tls_handshake_timeout: Duration,

    /// Time allowed between dispatching the request and receiving the
    /// response headers. Default: 5 seconds
    pub response_header_timeout: Duration,

    /// Time to wait for a `100 Continue` answer. Default: 5 seconds
    ///
    /// The underlying HTTP client never sends `Expect: 100-continue`, so the
    /// value is only recorded.
    pub expect_continue_timeout: Duration,

    /// TCP keep-alive interval. Default: 10 seconds
    pub tcp_keepalive: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            tls_handshake_timeout: Duration::from_secs(5),
            response_header_timeout: Duration::from_secs(5),
            expect_continue_timeout: Duration::from_secs(5),
            tcp_keepalive: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn tls_handshake_timeout(mut self, timeout: Duration) -> Self {
        self.tls_handshake_timeout = timeout;
        self
    }

    pub fn response_header_timeout(mut self, timeout: Duration) -> Self {
        self.response_header_timeout = timeout;
        self
    }

    pub fn expect_continue_timeout(mut self, timeout: Duration) -> Self {
        self.expect_continue_timeout = timeout;
        self
    }

    pub fn tcp_keepalive(mut self, interval: Duration) -> Self {
        self.tcp_keepalive = interval;
        self
    }

    /// Budget of a whole dispatch, from sending the request until the
    /// response headers arrive, including a fresh connection.
    pub fn dispatch_timeout(&self) -> Duration {
        self.connect_timeout + self.tls_handshake_timeout + self.response_header_timeout
    }
}

/// Client Builder manufactures an [`OssClient`] using given parameters.
#[derive(Debug)]
pub struct OssClientBuilder {
    base_url: BaseUrl,
    /// Set the credential provider. If not set, anonymous access is used.
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    config: ClientConfig,
    /// Use this HTTP client instead of building one from `config`.
    http_client: Option<reqwest::Client>,
    /// Set file for loading CAs certs to trust. This is in addition to the system trust store. The file must contain PEM encoded certificates.
    ssl_cert_file: Option<PathBuf>,
    /// Set flag to ignore certificate check. This is insecure and should only be used for testing.
    ignore_cert_check: Option<bool>,
    /// Set the app info as an Option of (app_name, app_version) pair. This will show up in the client's user-agent.
    app_info: Option<(String, String)>,
    /// Send a `Content-MD5` header of the request body.
    content_md5: bool,
}

impl OssClientBuilder {
    /// Creates a builder given the base URL of an OSS endpoint, e.g.
    /// `oss-cn-hangzhou.aliyuncs.com`.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            provider: None,
            config: ClientConfig::default(),
            http_client: None,
            ssl_cert_file: None,
            ignore_cert_check: None,
            app_info: None,
            content_md5: false,
        }
    }

    /// Set the credential provider. If not set, anonymous access is used.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Arc::new(p) as Arc<dyn Provider + Send + Sync + 'static>);
        self
    }

    /// Set timeouts and keep-alive of the HTTP transport.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Use given HTTP client. Its own connect, TLS and keep-alive settings
    /// apply. The configuration still bounds each dispatch, up to the
    /// response headers, by [`ClientConfig::dispatch_timeout`].
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Set file for loading CAs certs to trust. This is in addition to the system
    /// trust store. The file must contain PEM encoded certificates.
    pub fn ssl_cert_file(mut self, ssl_cert_file: Option<&Path>) -> Self {
        self.ssl_cert_file = ssl_cert_file.map(PathBuf::from);
        self
    }

    /// Set flag to ignore certificate check. This is insecure and should only
    /// be used for testing.
    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    /// Send a base64 MD5 digest of each request body as `Content-MD5`.
    pub fn content_md5(mut self, content_md5: bool) -> Self {
        self.content_md5 = content_md5;
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<OssClient, Error> {
        let http_client = match self.http_client {
            Some(v) => v,
            None => Self::build_http_client(
                &self.config,
                self.app_info,
                self.ssl_cert_file,
                self.ignore_cert_check,
            )?,
        };

        log::debug!(
            "OSS client for {} (virtual style: {}), {:?}",
            self.base_url.host(),
            self.base_url.virtual_style,
            self.config
        );

        Ok(OssClient {
            http_client,
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                provider: self.provider,
                config: self.config,
                content_md5: self.content_md5,
            }),
        })
    }

    fn build_http_client(
        config: &ClientConfig,
        app_info: Option<(String, String)>,
        ssl_cert_file: Option<PathBuf>,
        ignore_cert_check: Option<bool>,
    ) -> Result<reqwest::Client, Error> {
        // reqwest's connect timeout covers both the TCP connect and the TLS handshake.
        let mut builder = reqwest::Client::builder()
            .no_gzip()
            .connect_timeout(config.connect_timeout + config.tls_handshake_timeout)
            .tcp_keepalive(config.tcp_keepalive);

        #[cfg(feature = "http2")]
        {
            builder = builder.http2_adaptive_window(true);
        }

        let mut user_agent = String::from("OSS Select (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") oss-select-rs/"
            + env!("CARGO_PKG_VERSION");

        if let Some((app_name, app_version)) = app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }
        builder = builder.user_agent(user_agent);

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = ignore_cert_check {
            if v {
                log::warn!("TLS certificate verification is disabled");
            }
            builder = builder.danger_accept_invalid_certs(v);
        }

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = ssl_cert_file {
            let mut buf = Vec::new();
            let mut file = File::open(v).map_err(IoError::IOError)?;
            file.read_to_end(&mut buf).map_err(IoError::IOError)?;

            let certs = reqwest::Certificate::from_pem_bundle(&buf)
                .map_err(ValidationErr::InvalidCertificate)?;
            for cert in certs {
                builder = builder.add_root_certificate(cert);
            }
        }

        Ok(builder.build().map_err(ValidationErr::HttpClient)?)
    }
}

/// Object Storage Service (aka OSS) client to run CSV select operations.
///
/// If a credential provider is set, all requests are signed using OSS
/// signature version 1; else they are performed anonymously. Cloning is
/// cheap: clones share the connection pool, credentials and configuration.
#[derive(Clone, Debug)]
pub struct OssClient {
    http_client: reqwest::Client,
    pub(crate) shared: Arc<SharedClientItems>,
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    pub(crate) provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    pub(crate) config: ClientConfig,
    pub(crate) content_md5: bool,
}

impl OssClient {
    /// Returns an OSS client with given base URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use oss_select::oss::OssClient;
    /// use oss_select::oss::creds::StaticProvider;
    /// use oss_select::oss::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
    /// let static_provider = StaticProvider::new("LTAI5tExampleKeyId", "ExampleKeySecret", None);
    /// let client = OssClient::new(base_url, Some(static_provider), None, None).unwrap();
    /// ```
    pub fn new<P: Provider + Send + Sync + 'static>(
        base_url: BaseUrl,
        provider: Option<P>,
        ssl_cert_file: Option<&Path>,
        ignore_cert_check: Option<bool>,
    ) -> Result<Self, Error> {
        OssClientBuilder::new(base_url)
            .provider(provider)
            .ssl_cert_file(ssl_cert_file)
            .ignore_cert_check(ignore_cert_check)
            .build()
    }

    /// Returns whether this client is configured to use HTTPS.
    pub fn is_secure(&self) -> bool {
        self.shared.base_url.https
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.shared.config
    }

    /// Adds `Date`, `Content-Length`, optional `Content-MD5` and the
    /// security token to `headers`, then signs them.
    fn prepare_headers(
        &self,
        method: &Method,
        bucket: &str,
        object: &str,
        action: ProcessAction,
        headers: &mut Multimap,
        body: &Bytes,
    ) -> Result<(), Error> {
        headers.remove_ignore_case(DATE);
        headers.add(DATE, to_http_header_value(utc_now()));
        headers.remove_ignore_case(CONTENT_LENGTH);
        headers.add(CONTENT_LENGTH, body.len().to_string());
        if self.shared.content_md5 {
            headers.remove_ignore_case(CONTENT_MD5);
            headers.add(CONTENT_MD5, md5sum_hash(body));
        }

        check_header_syntax(headers)?;
        check_signed_headers(headers)?;
        collapse_signed_headers(headers);

        let Some(provider) = &self.shared.provider else {
            log::debug!("no credential provider, sending {bucket}/{object} unsigned");
            return Ok(());
        };

        let creds = provider.fetch();
        if let Some(token) = creds.security_token {
            headers.remove_ignore_case(X_OSS_SECURITY_TOKEN);
            headers.add(X_OSS_SECURITY_TOKEN, token);
        }

        sign_v1(
            method,
            &get_canonical_resource(bucket, object, action),
            headers,
            &creds.access_key_id,
            &creds.access_key_secret,
        );
        Ok(())
    }

    async fn dispatch(
        &self,
        method: &Method,
        url: &Url,
        headers: &Multimap,
        body: Bytes,
    ) -> Result<reqwest::Response, Error> {
        let mut req = self.http_client.request(method.clone(), url.to_string());

        for (key, values) in headers.iter_all() {
            for value in values {
                req = req.header(key, value);
            }
        }
        req = req.body(body);

        let timeout = self.shared.config.dispatch_timeout();
        match tokio::time::timeout(timeout, req.send()).await {
            Ok(resp) => Ok(resp.map_err(NetworkError::HttpError)?),
            Err(_) => Err(NetworkError::ResponseHeaderTimeout(timeout).into()),
        }
    }

    pub(crate) async fn execute(
        &self,
        method: &Method,
        bucket: &str,
        object: &str,
        action: ProcessAction,
        headers: &mut Multimap,
        body: Bytes,
    ) -> Result<reqwest::Response, Error> {
        self.prepare_headers(method, bucket, object, action, headers, &body)?;
        let url = self.shared.base_url.build_url(bucket, object, action);
        log::debug!("{method} {url}");

        let resp = match self.dispatch(method, &url, headers, body).await {
            Ok(v) => v,
            Err(e) => {
                log::debug!("{method} {url} failed: {e}");
                return Err(e);
            }
        };
        if resp.status().is_success() {
            return Ok(resp);
        }

        let mut resp = resp;
        let status_code = resp.status().as_u16();
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body: Bytes = resp.bytes().await.map_err(NetworkError::HttpError)?;

        let e = OssErrorResponse::new(status_code, headers, body);
        log::debug!("{method} {url} rejected: {e}");
        Err(e.into())
    }
}

/// Fails on header names or values that cannot be sent over HTTP.
fn check_header_syntax(headers: &Multimap) -> Result<(), ValidationErr> {
    for (name, values) in headers.iter_all() {
        if HeaderName::from_bytes(name.as_bytes()).is_err() {
            return Err(ValidationErr::InvalidHeaderName(name.clone()));
        }
        if let Some(value) = values.iter().find(|v| HeaderValue::from_str(v).is_err()) {
            return Err(ValidationErr::InvalidHeaderValue {
                name: name.clone(),
                value: value.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oss::creds::StaticProvider;

    fn client(content_md5: bool, token: Option<&str>) -> OssClient {
        let base_url: BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
        OssClientBuilder::new(base_url)
            .provider(Some(StaticProvider::new("id", "secret", token)))
            .content_md5(content_md5)
            .build()
            .unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.tls_handshake_timeout, Duration::from_secs(5));
        assert_eq!(config.response_header_timeout, Duration::from_secs(5));
        assert_eq!(config.expect_continue_timeout, Duration::from_secs(5));
        assert_eq!(config.tcp_keepalive, Duration::from_secs(10));
        assert_eq!(config.dispatch_timeout(), Duration::from_secs(20));
    }

    #[test]
    fn test_prepare_headers_signs_request() {
        let client = client(true, Some("sts-token"));
        let mut headers = Multimap::new();
        headers.add("date", "stale");
        let body = Bytes::from_static(b"<CsvMetaRequest/>");

        client
            .prepare_headers(
                &Method::POST,
                "objselect",
                "test.csv",
                ProcessAction::Meta,
                &mut headers,
                &body,
            )
            .unwrap();

        assert_eq!(headers.get_vec(DATE).map(Vec::len), Some(1));
        assert!(!headers.contains_key("date"));
        assert_eq!(headers.get_ignore_case(CONTENT_LENGTH), Some("17"));
        assert_eq!(
            headers.get_ignore_case(CONTENT_MD5),
            Some(md5sum_hash(&body).as_str())
        );
        assert_eq!(
            headers.get_ignore_case(X_OSS_SECURITY_TOKEN),
            Some("sts-token")
        );
        assert!(
            headers
                .get_ignore_case(AUTHORIZATION)
                .unwrap()
                .starts_with("OSS id:")
        );
    }

    #[test]
    fn test_prepare_headers_rejects_conflicting_custom_headers() {
        let client = client(false, None);
        let mut headers = Multimap::new();
        headers.add("X-Oss-Meta-A", "1");
        headers.add("x-oss-meta-a", "2");

        let result = client.prepare_headers(
            &Method::POST,
            "objselect",
            "test.csv",
            ProcessAction::Select,
            &mut headers,
            &Bytes::new(),
        );
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationErr::ConflictingHeader(_)))
        ));
        assert!(!headers.contains_key_ignore_case(AUTHORIZATION));
    }

    #[test]
    fn test_prepare_headers_sends_signed_header_once() {
        let client = client(false, None);
        let mut headers = Multimap::new();
        headers.add("X-Oss-Meta-A", "1");
        headers.add("x-oss-meta-a", "1");

        client
            .prepare_headers(
                &Method::POST,
                "objselect",
                "test.csv",
                ProcessAction::Select,
                &mut headers,
                &Bytes::new(),
            )
            .unwrap();

        let values: Vec<&String> = headers
            .iter_all()
            .filter(|(k, _)| k.eq_ignore_ascii_case("x-oss-meta-a"))
            .flat_map(|(_, v)| v)
            .collect();
        assert_eq!(values, vec!["1"]);
    }

    #[test]
    fn test_prepare_headers_rejects_invalid_header() {
        let client = client(false, None);

        let mut headers = Multimap::new();
        headers.add("x-oss-meta-a", "bad\nvalue");
        let result = client.prepare_headers(
            &Method::POST,
            "objselect",
            "test.csv",
            ProcessAction::Select,
            &mut headers,
            &Bytes::new(),
        );
        match result {
            Err(Error::Validation(ValidationErr::InvalidHeaderValue { name, value })) => {
                assert_eq!(name, "x-oss-meta-a");
                assert_eq!(value, "bad\nvalue");
            }
            v => panic!("Expected error InvalidHeaderValue: but got {v:?}"),
        }
        assert!(!headers.contains_key_ignore_case(AUTHORIZATION));

        let mut headers = Multimap::new();
        headers.add("x-oss meta", "1");
        let result = client.prepare_headers(
            &Method::POST,
            "objselect",
            "test.csv",
            ProcessAction::Select,
            &mut headers,
            &Bytes::new(),
        );
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationErr::InvalidHeaderName(ref n))) if n == "x-oss meta"
        ));
    }

    #[test]
    fn test_anonymous_client_does_not_sign() {
        let base_url: BaseUrl = "oss-cn-hangzhou.aliyuncs.com".parse().unwrap();
        let client = OssClientBuilder::new(base_url).build().unwrap();
        let mut headers = Multimap::new();

        client
            .prepare_headers(
                &Method::POST,
                "objselect",
                "test.csv",
                ProcessAction::Select,
                &mut headers,
                &Bytes::new(),
            )
            .unwrap();

        assert!(!headers.contains_key_ignore_case(AUTHORIZATION));
        assert!(headers.contains_key(DATE));
    }
}
