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

//! Errors created while using credentials.

use std::error::Error;
use std::fmt::{Debug, Display, Formatter, Result};
use std::sync::Arc;

/// Represents an error using [Credentials] to create the authorization
/// headers for a request.
///
/// Typical causes are a private key that cannot be imported (e.g. it is not a
/// PKCS#8 RSA key), a failure to sign the JWT, or a target URL that has no
/// origin to derive the JWT audience from.
///
/// # Example
/// ```
/// # use google_api_auth::errors::CredentialsError;
/// let err = CredentialsError::from_msg(false, "simulated signing failure");
/// assert!(!err.is_transient());
/// assert!(format!("{err}").contains("simulated signing failure"));
/// ```
///
/// [Credentials]: crate::credentials::Credentials
#[derive(Clone, Debug)]
pub struct CredentialsError {
    /// A boolean value indicating whether the error is transient.
    ///
    /// If `true`, the operation that resulted in this error might succeed upon
    /// retry. Signing problems are never transient: the key material must be
    /// fixed first.
    is_transient: bool,

    /// The underlying source of the error.
    source: CredentialsErrorImpl,
}

#[derive(Clone, Debug)]
enum CredentialsErrorImpl {
    SimpleMessage(String),
    Source(Arc<dyn Error + Send + Sync>),
}

impl CredentialsError {
    /// Creates a new `CredentialsError`.
    ///
    /// # Arguments
    /// * `is_transient` - A boolean indicating whether the error is transient.
    /// * `source` - The underlying error that caused the failure.
    pub fn new<T: Error + Send + Sync + 'static>(is_transient: bool, source: T) -> Self {
        CredentialsError {
            is_transient,
            source: CredentialsErrorImpl::Source(Arc::new(source)),
        }
    }

    /// Creates a new `CredentialsError` from a message.
    ///
    /// # Arguments
    /// * `is_transient` - A boolean indicating whether the error is transient.
    /// * `message` - A description of the failure.
    pub fn from_msg<T: Into<String>>(is_transient: bool, message: T) -> Self {
        CredentialsError::new(
            is_transient,
            CredentialsErrorImpl::SimpleMessage(message.into()),
        )
    }

    /// Returns `true` if the error is transient and may be resolved by
    /// repeating the operation.
    pub fn is_transient(&self) -> bool {
        self.is_transient
    }
}

/// A helper to create a non-transient error.
pub(crate) fn non_transient<T: Error + Send + Sync + 'static>(source: T) -> CredentialsError {
    CredentialsError::new(false, source)
}

pub(crate) fn non_transient_from_str<T: Into<String>>(message: T) -> CredentialsError {
    CredentialsError::from_msg(false, message)
}

impl std::error::Error for CredentialsErrorImpl {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            CredentialsErrorImpl::SimpleMessage(_) => None,
            CredentialsErrorImpl::Source(source) => Some(&**source),
        }
    }
}

impl Display for CredentialsErrorImpl {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self {
            CredentialsErrorImpl::SimpleMessage(message) => write!(f, "{message}"),
            CredentialsErrorImpl::Source(source) => write!(f, "{source}"),
        }
    }
}

impl std::error::Error for CredentialsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.source()
    }
}

const TRANSIENT_MSG: &str = "but future attempts may succeed";
const PERMANENT_MSG: &str = "and future attempts will not succeed";

impl Display for CredentialsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let msg = if self.is_transient {
            TRANSIENT_MSG
        } else {
            PERMANENT_MSG
        };
        write!(
            f,
            "cannot create the authorization headers, {msg}, source: {}",
            self.source
        )
    }
}
