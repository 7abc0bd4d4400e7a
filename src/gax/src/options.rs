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

//! Per-request options.

use crate::Result;
use crate::error::Error;
use bytes::Bytes;
use http::Method;

/// The options for a single request.
///
/// The default options send a `GET` request without a body.
///
/// # Example
/// ```
/// # use google_api_gax::options::RequestOptions;
/// let options = RequestOptions::new(http::Method::POST)
///     .with_json(&serde_json::json!({"name": "my-topic"}))?;
/// assert_eq!(options.method(), &http::Method::POST);
/// # Ok::<(), google_api_gax::error::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    method: Method,
    body: Option<Bytes>,
}

impl RequestOptions {
    /// Creates options for a request with the given method and no body.
    pub fn new(method: Method) -> Self {
        Self { method, body: None }
    }

    /// Sets the request body, sent verbatim.
    pub fn with_body<T: Into<Bytes>>(mut self, body: T) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the request body to the JSON representation of `value`.
    ///
    /// # Errors
    ///
    /// Fails with [Error::is_serialization] if `value` cannot be represented
    /// as JSON.
    pub fn with_json<T: serde::Serialize + ?Sized>(self, value: &T) -> Result<Self> {
        let body = serde_json::to_vec(value).map_err(Error::ser)?;
        Ok(self.with_body(body))
    }

    /// The HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request body, if any.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use serde_json::json;

    #[test]
    fn defaults() {
        let options = RequestOptions::default();
        assert_eq!(options.method(), &Method::GET);
        assert_eq!(options.body(), None);
    }

    #[test]
    fn with_body() {
        let options = RequestOptions::new(Method::PUT).with_body("raw body");
        assert_eq!(options.method(), &Method::PUT);
        assert_eq!(options.body(), Some(&Bytes::from_static(b"raw body")));
    }

    #[test]
    fn with_json() -> anyhow::Result<()> {
        let options = RequestOptions::new(Method::POST).with_json(&json!({"a": 1}))?;
        let body = options.body().expect("body is set");
        let got = serde_json::from_slice::<serde_json::Value>(body)?;
        assert_eq!(got, json!({"a": 1}));
        Ok(())
    }

    struct Unserializable;

    impl serde::Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(S::Error::custom("test-only-unserializable"))
        }
    }

    #[test]
    fn with_json_error() {
        let err = RequestOptions::default()
            .with_json(&Unserializable)
            .unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
    }
}
