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

use crate::Result;
use crate::errors;
use base64::prelude::{BASE64_URL_SAFE_NO_PAD, Engine as _};
use serde::Serialize;
use std::time::Duration;
use time::OffsetDateTime;

/// How long a self-signed JWT remains valid.
pub const DEFAULT_TOKEN_TIMEOUT: Duration = Duration::from_secs(3600);

/// The claims in a self-signed JWT.
#[derive(Serialize)]
pub struct JwsClaims<'a> {
    pub iss: &'a str,
    pub sub: &'a str,
    pub aud: &'a str,
    #[serde(with = "time::serde::timestamp")]
    pub iat: OffsetDateTime,
    #[serde(with = "time::serde::timestamp")]
    pub exp: OffsetDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<&'a str>,
}

impl JwsClaims<'_> {
    pub fn encode(&self) -> Result<String> {
        if self.exp < self.iat {
            return Err(errors::non_transient_from_str(format!(
                "expiration time {:?}, must be later than issued time {:?}",
                self.exp, self.iat
            )));
        }
        let json = serde_json::to_string(&self).map_err(errors::non_transient)?;
        Ok(BASE64_URL_SAFE_NO_PAD.encode(json.as_bytes()))
    }
}

/// The header that describes who, what, and how a token was created.
#[derive(Serialize, Debug)]
pub struct JwsHeader<'a> {
    pub alg: &'a str,
    pub typ: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<&'a str>,
}

impl JwsHeader<'_> {
    pub fn encode(&self) -> Result<String> {
        let json = serde_json::to_string(&self).map_err(errors::non_transient)?;
        Ok(BASE64_URL_SAFE_NO_PAD.encode(json.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn decode(encoded: &str) -> Value {
        let bytes = BASE64_URL_SAFE_NO_PAD.decode(encoded).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn claims_without_scope() {
        let now = OffsetDateTime::now_utc();
        let then = now + DEFAULT_TOKEN_TIMEOUT;
        let claims = JwsClaims {
            iss: "test-iss",
            sub: "test-sub",
            aud: "https://example.com/",
            iat: now,
            exp: then,
            scope: None,
        };

        let v = decode(&claims.encode().unwrap());
        assert_eq!(v["iss"], "test-iss");
        assert_eq!(v["sub"], "test-sub");
        assert_eq!(v["aud"], "https://example.com/");
        assert_eq!(v["iat"], now.unix_timestamp());
        assert_eq!(v["exp"], then.unix_timestamp());
        assert_eq!(v.get("scope"), None, "{v:?}");
    }

    #[test]
    fn claims_with_scope() {
        let now = OffsetDateTime::now_utc();
        let claims = JwsClaims {
            iss: "test-iss",
            sub: "test-sub",
            aud: "https://example.com/",
            iat: now,
            exp: now + DEFAULT_TOKEN_TIMEOUT,
            scope: Some("scope1 scope2"),
        };

        let v = decode(&claims.encode().unwrap());
        assert_eq!(v["scope"], "scope1 scope2");
        assert_eq!(v["aud"], "https://example.com/");
    }

    #[test]
    fn claims_exp_before_iat() {
        let now = OffsetDateTime::now_utc();
        let claims = JwsClaims {
            iss: "test-iss",
            sub: "test-sub",
            aud: "https://example.com/",
            iat: now,
            exp: now - DEFAULT_TOKEN_TIMEOUT,
            scope: None,
        };
        let err = claims.encode().unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        assert!(
            err.to_string().contains("must be later than issued time"),
            "{err}"
        );
    }

    #[test]
    fn header_with_kid() {
        let header = JwsHeader {
            alg: "RS256",
            typ: "JWT",
            kid: Some("some-key-id"),
        };
        let v = decode(&header.encode().unwrap());
        assert_eq!(v["alg"], "RS256");
        assert_eq!(v["typ"], "JWT");
        assert_eq!(v["kid"], "some-key-id");
    }

    #[test]
    fn header_without_kid() {
        let header = JwsHeader {
            alg: "RS256",
            typ: "JWT",
            kid: None,
        };
        let v = decode(&header.encode().unwrap());
        assert_eq!(v["alg"], "RS256");
        assert_eq!(v.get("kid"), None, "{v:?}");
    }
}
