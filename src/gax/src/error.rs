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

//! Errors returned when sending requests.
//!
//! The crate distinguishes between errors detected while trying to send a
//! request (e.g. cannot create the authorization headers, or cannot open a
//! connection), errors trying to decode a successful response, and errors
//! returned by the service itself.
//!
//! # Examples
//!
//! ```
//! use google_api_gax::error::Error;
//! fn handle_error(e: Error) {
//!     if let Some(api) = e.api_error() {
//!         println!("the service reported {api:?}")
//!     }
//! }
//! ```

mod api_error;
pub use api_error::ApiError;
mod core_error;
pub use core_error::*;
pub use auth::errors::CredentialsError;
