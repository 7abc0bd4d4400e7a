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

//! Google APIs helpers.
//!
//! This crate sends authorized requests to Google JSON APIs. Each request
//! carries the headers produced by a [Credentials][auth::credentials::Credentials]
//! instance, is sent exactly once, and its response is classified into a JSON
//! value or an [Error][crate::error::Error].
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use google_api_gax::http;
//! use google_api_gax::options::RequestOptions;
//! let credentials = auth::credentials::Builder::default().build().await?;
//! let response = http::request(
//!     "https://storage.googleapis.com/storage/v1/b?project=my-project",
//!     &RequestOptions::default(),
//!     Some(&credentials),
//! )
//! .await?;
//! println!("{response:#}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! # });
//! ```

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions sending requests.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod error;
pub mod http;
pub mod options;
