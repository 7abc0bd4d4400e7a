// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Send authorized requests and classify their responses.

use crate::Result;
use crate::error::{ApiError, Error};
use crate::options::RequestOptions;
use auth::credentials::Credentials;
use http::HeaderMap;
use http::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use serde_json::Value;
use std::sync::LazyLock;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Sends a single request using a process-wide [Client].
///
/// See [Client::request] for details.
pub async fn request(
    url: &str,
    options: &RequestOptions,
    credentials: Option<&Credentials>,
) -> Result<Value> {
    static DEFAULT_CLIENT: LazyLock<Client> = LazyLock::new(Client::new);
    DEFAULT_CLIENT.request(url, options, credentials).await
}

/// Sends authorized requests to Google JSON APIs.
///
/// The client is cheap to clone, clones share the connection pool.
#[derive(Clone, Debug, Default)]
pub struct Client {
    inner: reqwest::Client,
}

impl Client {
    /// Creates a client with a default [reqwest::Client].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client sending requests through `inner`.
    ///
    /// Use this to configure timeouts, proxies, or other transport settings.
    pub fn from_reqwest(inner: reqwest::Client) -> Self {
        Self { inner }
    }

    /// Sends a request to `url` and returns the JSON response.
    ///
    /// The request includes `accept: application/json` and
    /// `content-type: application/json` headers, and any headers returned by
    /// `credentials`. The credential headers replace the defaults with the
    /// same name. The request is attempted exactly once.
    ///
    /// # Errors
    ///
    /// - [Error::is_authentication] if the credentials cannot create the
    ///   headers, the request is not sent in this case.
    /// - [Error::is_io] if the request cannot be sent or the response cannot
    ///   be received.
    /// - [Error::api_error] is set if the service returns a status code of
    ///   400 or higher.
    /// - [Error::is_deserialization] if a successful response is not valid
    ///   JSON.
    pub async fn request(
        &self,
        url: &str,
        options: &RequestOptions,
        credentials: Option<&Credentials>,
    ) -> Result<Value> {
        let auth_headers = match credentials {
            Some(c) => c.headers(url).await.map_err(Error::authentication)?,
            None => HeaderMap::new(),
        };
        let mut builder = self
            .inner
            .request(options.method().clone(), url)
            .headers(request_headers(auth_headers));
        if let Some(body) = options.body() {
            builder = builder.body(body.clone());
        }
        let endpoint = loggable_url(url);
        tracing::debug!(method = %options.method(), endpoint, "sending request");
        let response = builder.send().await.map_err(Error::io)?;
        let status = response.status();
        tracing::debug!(method = %options.method(), endpoint, status = status.as_u16(), "received response");
        if status.as_u16() >= 400 {
            return to_api_error(response).await;
        }
        to_json_response(response).await
    }
}

fn request_headers(auth_headers: HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(2 + auth_headers.len());
    headers.insert(ACCEPT, HeaderValue::from_static(JSON_MEDIA_TYPE));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MEDIA_TYPE));
    headers.extend(auth_headers);
    headers
}

// Query strings and fragments may carry secrets, log the origin and path only.
fn loggable_url(url: &str) -> String {
    match reqwest::Url::parse(url) {
        Ok(u) => format!("{}{}", u.origin().ascii_serialization(), u.path()),
        Err(_) => "<invalid url>".to_string(),
    }
}

async fn to_api_error(response: reqwest::Response) -> Result<Value> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let payload = response.bytes().await.map_err(Error::io)?;
    let error = ApiError::from_http_response(status_code, headers, &payload);
    Err(Error::api(error))
}

async fn to_json_response(response: reqwest::Response) -> Result<Value> {
    let payload = response.bytes().await.map_err(Error::io)?;
    serde_json::from_slice::<Value>(&payload).map_err(Error::deser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{AUTHORIZATION, HeaderName};
    use test_case::test_case;

    #[test]
    fn default_headers() {
        let got = request_headers(HeaderMap::new());
        assert_eq!(got.len(), 2, "{got:?}");
        assert_eq!(got.get(ACCEPT).unwrap(), JSON_MEDIA_TYPE);
        assert_eq!(got.get(CONTENT_TYPE).unwrap(), JSON_MEDIA_TYPE);
    }

    #[test]
    fn auth_headers_are_added() {
        let auth = HeaderMap::from_iter([
            (AUTHORIZATION, HeaderValue::from_static("Bearer test-token")),
            (
                HeaderName::from_static("x-test-header"),
                HeaderValue::from_static("test-value"),
            ),
        ]);
        let got = request_headers(auth);
        assert_eq!(got.len(), 4, "{got:?}");
        assert_eq!(got.get(AUTHORIZATION).unwrap(), "Bearer test-token");
        assert_eq!(got.get("x-test-header").unwrap(), "test-value");
        assert_eq!(got.get(ACCEPT).unwrap(), JSON_MEDIA_TYPE);
    }

    #[test]
    fn auth_headers_replace_defaults() {
        let auth = HeaderMap::from_iter([(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-test"),
        )]);
        let got = request_headers(auth);
        let values = got.get_all(CONTENT_TYPE).iter().collect::<Vec<_>>();
        assert_eq!(values, vec!["application/x-test"]);
        assert_eq!(got.get(ACCEPT).unwrap(), JSON_MEDIA_TYPE);
    }

    #[test_case("https://example.com/v1/x?key=secret#frag", "https://example.com/v1/x"; "query and fragment")]
    #[test_case("http://127.0.0.1:8080/v1/x", "http://127.0.0.1:8080/v1/x"; "port")]
    #[test_case("https://example.com", "https://example.com/"; "root")]
    #[test_case("not a url", "<invalid url>"; "invalid")]
    fn loggable_url_drops_query(input: &str, want: &str) {
        assert_eq!(loggable_url(input), want);
    }
}
