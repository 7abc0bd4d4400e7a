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

//! Authentication components for Google JSON APIs.
//!
//! This crate turns an identity into the HTTP headers required to call an
//! authenticated API. Two kinds of identity are supported:
//!
//! * [anonymous][credentials::anonymous] credentials, which never add any
//!   headers, and
//! * [service account][credentials::service_account] credentials, which sign
//!   a short-lived JWT for every request using the service account private
//!   key. The signed JWT is used directly as a bearer token, there is no
//!   exchange with an OAuth 2.0 token endpoint.
//!
//! Most applications load credentials with [credentials::Builder], which reads
//! a service account key file, either from an explicit path or from the
//! `GOOGLE_APPLICATION_CREDENTIALS` environment variable.
//!
//! ```
//! # use google_api_auth::credentials::anonymous::Builder;
//! # tokio_test::block_on(async {
//! let credentials = Builder::new().build();
//! let headers = credentials.headers("https://example.com/v1/things").await?;
//! assert!(headers.is_empty());
//! # Ok::<(), google_api_auth::errors::CredentialsError>(())
//! # });
//! ```

pub mod build_errors;
pub mod errors;

/// Types and functions to work with authentication credentials.
pub mod credentials;

pub(crate) mod constants;

/// A `Result` alias where the `Err` case is
/// `google_api_auth::errors::CredentialsError`.
pub(crate) type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;

/// A `Result` alias where the `Err` case is
/// `google_api_auth::build_errors::Error`.
pub(crate) type BuildResult<T> = std::result::Result<T, crate::build_errors::Error>;
