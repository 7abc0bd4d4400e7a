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

//! Anonymous credentials.
//!
//! These credentials do not provide any authentication information. They are
//! useful for accessing public resources that do not require authentication.

use crate::credentials::Credentials;

/// A builder for creating anonymous credentials.
#[derive(Debug, Default)]
pub struct Builder {}

impl Builder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a [Credentials] instance.
    pub fn build(self) -> Credentials {
        Credentials::anonymous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[tokio::test]
    #[test_case("https://example.com/v1/x"; "https")]
    #[test_case("http://localhost:8080/"; "with port")]
    #[test_case("not a url"; "unparseable url")]
    async fn never_adds_headers(url: &str) -> TestResult {
        let creds = Builder::new().build();
        let headers = creds.headers(url).await?;
        assert!(headers.is_empty(), "{headers:?}");
        Ok(())
    }
}
