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

//! Errors returned while loading a service account key.

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a [Credentials] builder could not produce credentials.
///
/// Retrying does not help, the key file or the builder arguments must change.
///
/// [Credentials]: super::credentials::Credentials
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// The key file could not be read.
    pub fn is_loading(&self) -> bool {
        matches!(self.0, ErrorKind::Loading(_))
    }

    /// The key is not JSON, or one of its fields has the wrong JSON type.
    pub fn is_parsing(&self) -> bool {
        matches!(self.0, ErrorKind::Parsing(_))
    }

    /// The key `type` is not `service_account`.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self.0, ErrorKind::UnknownType(_))
    }

    /// The key lacks `client_email` or `private_key`.
    pub fn is_missing_field(&self) -> bool {
        matches!(self.0, ErrorKind::MissingField(_))
    }

    pub(crate) fn loading<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::Loading(source.into()))
    }

    pub(crate) fn parsing<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::Parsing(source.into()))
    }

    pub(crate) fn unknown_type<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::UnknownType(source.into()))
    }

    pub(crate) fn missing_field(field: &'static str) -> Error {
        Error(ErrorKind::MissingField(field))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("cannot read the service account key file: {0}")]
    Loading(#[source] BoxError),
    #[error("the service account key is not valid JSON or has fields of the wrong type: {0}")]
    Parsing(#[source] BoxError),
    #[error("the key is not a service account key: {0}")]
    UnknownType(#[source] BoxError),
    #[error("the service account key is missing the `{0}` field")]
    MissingField(&'static str),
}
