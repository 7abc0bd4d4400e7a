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

pub mod anonymous;
pub mod service_account;

use crate::build_errors::Error as BuilderError;
use crate::constants::GOOGLE_APPLICATION_CREDENTIALS_VAR;
use crate::{BuildResult, Result};
use http::HeaderMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Represents a [Credentials] used to obtain the auth request headers.
///
/// In general, [Credentials][credentials-link] are "digital object that
/// provide proof of identity", the archetype may be a username and password
/// combination, but a private RSA key may be a better example.
///
/// This type is a handle over a closed set of identities: [anonymous]
/// credentials that never add any headers, and [service_account] credentials
/// that sign a JWT for every request. Cloning a `Credentials` is cheap, the
/// clones share any state, including the imported private key.
///
/// # Example
/// ```
/// # use google_api_auth::credentials::Builder;
/// # tokio_test::block_on(async {
/// let credentials = Builder::default().build().await?;
/// let headers = credentials.headers("https://example.com/v1/things").await?;
/// println!("headers: {headers:?}");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// # });
/// ```
///
/// [credentials-link]: https://cloud.google.com/docs/authentication#credentials
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: CredentialsKind,
}

#[derive(Clone, Debug)]
enum CredentialsKind {
    Anonymous,
    ServiceAccount(Arc<service_account::ServiceAccountCredentials>),
}

impl Credentials {
    pub(crate) fn anonymous() -> Self {
        Self {
            inner: CredentialsKind::Anonymous,
        }
    }

    pub(crate) fn service_account(inner: service_account::ServiceAccountCredentials) -> Self {
        Self {
            inner: CredentialsKind::ServiceAccount(Arc::new(inner)),
        }
    }

    /// Returns the headers to authorize a request sent to `url`.
    ///
    /// Anonymous credentials always return an empty map. Service account
    /// credentials return a single `authorization` header with a freshly
    /// signed JWT, whose audience is the origin of `url`.
    pub async fn headers(&self, url: &str) -> Result<HeaderMap> {
        match &self.inner {
            CredentialsKind::Anonymous => Ok(HeaderMap::new()),
            CredentialsKind::ServiceAccount(c) => c.headers(url).await,
        }
    }

    /// The project associated with these credentials, if any.
    pub fn project_id(&self) -> Option<String> {
        match &self.inner {
            CredentialsKind::Anonymous => None,
            CredentialsKind::ServiceAccount(c) => c.project_id(),
        }
    }

    /// The [quota project] configured for these credentials, if any.
    ///
    /// [quota project]: https://cloud.google.com/docs/quotas/quota-project
    pub fn quota_project_id(&self) -> Option<String> {
        match &self.inner {
            CredentialsKind::Anonymous => None,
            CredentialsKind::ServiceAccount(c) => c.quota_project_id(),
        }
    }
}

/// A builder for [Credentials] loaded from a service account key file.
///
/// The key file is found using the following rules:
///
/// 1. The path given to [Builder::with_credentials_file], if any.
/// 2. The path in the `GOOGLE_APPLICATION_CREDENTIALS` environment variable,
///    if set to a non-empty value.
///
/// If neither is available the builder returns [anonymous] credentials.
///
/// # Example
/// ```no_run
/// # use google_api_auth::credentials::Builder;
/// # tokio_test::block_on(async {
/// let credentials = Builder::default()
///     .with_credentials_file("/path/to/service-account.json")
///     .with_scopes(["https://www.googleapis.com/auth/datastore"])
///     .build()
///     .await?;
/// # Ok::<(), google_api_auth::build_errors::Error>(())
/// # });
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    credentials_file: Option<PathBuf>,
    scopes: Option<Vec<String>>,
    quota_project_id: Option<String>,
}

impl Builder {
    /// Loads the service account key from `path`.
    ///
    /// This takes precedence over the `GOOGLE_APPLICATION_CREDENTIALS`
    /// environment variable.
    pub fn with_credentials_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.credentials_file = Some(path.into());
        self
    }

    /// Sets the scopes included in the signed JWT.
    ///
    /// Replaces any `scopes` field in the key file. Ignored when the builder
    /// falls back to anonymous credentials.
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = Some(scopes.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Sets the [quota project] for these credentials.
    ///
    /// [quota project]: https://cloud.google.com/docs/quotas/quota-project
    pub fn with_quota_project_id<S: Into<String>>(mut self, quota_project_id: S) -> Self {
        self.quota_project_id = Some(quota_project_id.into());
        self
    }

    /// Returns a [Credentials] instance with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the key file cannot be read, is not valid JSON, is
    /// not a service account key, or is missing the `client_email` or
    /// `private_key` fields.
    pub async fn build(self) -> BuildResult<Credentials> {
        let Some(path) = self.credentials_file.clone().or_else(adc_path) else {
            tracing::debug!("no credentials file configured, using anonymous credentials");
            return Ok(Credentials::anonymous());
        };
        tracing::debug!(path = %path.display(), "loading service account key");
        let contents = tokio::fs::read(&path).await.map_err(|e| {
            BuilderError::loading(format!("{}: {e}", path.display()))
        })?;
        let json = serde_json::from_slice::<serde_json::Value>(&contents)
            .map_err(BuilderError::parsing)?;
        let mut builder = service_account::Builder::from_json(json)?;
        if let Some(scopes) = self.scopes {
            builder = builder.with_scopes(scopes);
        }
        if let Some(quota_project_id) = self.quota_project_id {
            builder = builder.with_quota_project_id(quota_project_id);
        }
        builder.build()
    }
}

fn adc_path() -> Option<PathBuf> {
    std::env::var_os(GOOGLE_APPLICATION_CREDENTIALS_VAR)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}
