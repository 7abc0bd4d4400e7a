// Copyright 2024 Google LLC
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

use http::HeaderMap;
use serde::Deserialize;
use serde_json::Value;

/// An error reported by the service.
///
/// Google JSON APIs report errors as a JSON object with a single `error`
/// field, see [AIP-193]. When the response has such a payload the `code`,
/// `message`, and `details` come from it. Otherwise, for example when a proxy
/// or load balancer generates the error, the `code` is the HTTP status code
/// and the `message` is the raw response body.
///
/// [AIP-193]: https://google.aip.dev/193
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ApiError {
    /// The error code, typically the HTTP status code.
    pub code: i32,
    /// A developer-facing error message.
    pub message: String,
    /// Any additional details included by the service, verbatim.
    pub details: Option<Value>,
    status_code: u16,
    headers: HeaderMap,
}

impl ApiError {
    /// Creates a new instance.
    ///
    /// Mostly useful in tests and mocks, applications receive these errors
    /// from [crate::http::request].
    pub fn new<M: Into<String>>(code: i32, message: M, details: Option<Value>) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            status_code: 0,
            headers: HeaderMap::new(),
        }
    }

    /// The HTTP status code of the response.
    pub fn http_status_code(&self) -> u16 {
        self.status_code
    }

    /// The headers of the response.
    pub fn http_headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Classifies an error response.
    ///
    /// JSON payloads in the `{"error": {...}}` format provide the details.
    /// Anything else, including malformed JSON, falls back to the status code
    /// and the raw payload.
    pub(crate) fn from_http_response(
        status_code: u16,
        headers: HeaderMap,
        payload: &[u8],
    ) -> Self {
        let text = String::from_utf8_lossy(payload).into_owned();
        let wrapper = is_json(&headers)
            .then(|| serde_json::from_slice::<ErrorWrapper>(payload).ok())
            .flatten();
        let (code, message, details) = match wrapper {
            Some(ErrorWrapper { error }) => (
                error.code.unwrap_or(status_code as i32),
                error.message.unwrap_or(text),
                error.details,
            ),
            None => (status_code as i32, text, None),
        };
        Self {
            code,
            message,
            details,
            status_code,
            headers,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "code: {}, message: {}", self.code, self.message)
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"))
}

#[derive(Debug, Deserialize)]
struct ErrorWrapper {
    error: WrapperStatus,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WrapperStatus {
    code: Option<i32>,
    message: Option<String>,
    details: Option<Value>,
}
