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

use super::{ApiError, CredentialsError};
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all the functions in this crate.
///
/// Requests fail for several reasons. The credentials may be unable to sign
/// the request, the transport may be unable to create the necessary
/// connection, the response may not be valid JSON, or the service may return
/// an error.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind, and [api_error()][Error::api_error] to query the details reported by
/// the service. Applications can query the error
/// [source][std::error::Error::source] for deeper information.
///
/// # Example
/// ```
/// use google_api_gax::error::{ApiError, Error};
/// match example_function() {
///     Err(e) if e.api_error().is_some() => {
///         println!("service error {e}, debug using {:?}", e.api_error().unwrap());
///     },
///     Err(e) if e.is_authentication() => { println!("cannot sign the request {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::api(ApiError::new(404, "NOT FOUND", None)))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use google_api_gax::error::{ApiError, Error};
    /// let api = ApiError::new(404, "NOT FOUND", None);
    /// let error = Error::api(api.clone());
    /// assert_eq!(error.api_error(), Some(&api));
    /// ```
    pub fn api(error: ApiError) -> Self {
        Self {
            kind: ErrorKind::Api(Box::new(error)),
            source: None,
        }
    }

    /// The details reported by the service, if this is a service error.
    ///
    /// Google JSON APIs return a code, a human-readable message, and
    /// optionally some details describing the problem. See [ApiError] for the
    /// fallbacks used when the response does not include such a payload.
    ///
    /// # Troubleshooting
    ///
    /// As this error type is typically created by the service, troubleshooting
    /// this problem typically involves reading the service documentation to
    /// root cause the problem.
    pub fn api_error(&self) -> Option<&ApiError> {
        match &self.kind {
            ErrorKind::Api(e) => Some(e.as_ref()),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        self.api_error().map(ApiError::http_status_code)
    }

    /// Creates an error representing a deserialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use google_api_gax::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// The service returned a successful status code, but the body was empty
    /// or was not valid JSON. The request may have had side effects in the
    /// service.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error representing a serialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use google_api_gax::error::Error;
    /// let error = Error::ser("simulated problem");
    /// assert!(error.is_serialization());
    /// assert!(error.source().is_some());
    /// ```
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient: the serialization is
    /// deterministic and will fail on future attempts with the same input
    /// data.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error representing a problem creating the authorization
    /// headers.
    pub fn authentication(source: CredentialsError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// The credentials could not create the authorization headers.
    ///
    /// This is always a client-side generated error, the request was not
    /// sent. Use [source()][std::error::Error::source] to find the
    /// [CredentialsError] with more details.
    ///
    /// # Troubleshooting
    ///
    /// The most common causes are a private key that is not in PKCS#8 PEM
    /// format, and a request URL without a `scheme://host` origin.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Creates an error representing a transport problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use google_api_gax::error::Error;
    /// let error = Error::io("simulated problem");
    /// assert!(error.is_io());
    /// assert!(error.source().is_some());
    /// ```
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Io,
            source: Some(source.into()),
        }
    }

    /// The request could not be sent, or the response could not be received.
    ///
    /// The request may or may not have reached the service. If the request
    /// mutates any state in the service, it may or may not be safe to attempt
    /// the request again.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Io, Some(e)) => {
                write!(f, "cannot send the request or receive the response {e}")
            }
            (ErrorKind::Api(e), _) => {
                write!(
                    f,
                    "the service reports an error with code {} described as: {}",
                    e.code, e.message
                )
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &dyn std::error::Error)
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Serialization,
    Deserialization,
    Authentication,
    Io,
    Api(Box<ApiError>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn api() {
        let api = ApiError::new(404, "NOT FOUND", None);
        let error = Error::api(api.clone());
        assert_eq!(error.api_error(), Some(&api));
        assert!(error.source().is_none(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        let got = error.to_string();
        assert!(got.contains("404"), "{got}");
        assert!(got.contains("NOT FOUND"), "{got}");
    }

    #[test]
    fn deser() {
        let error = Error::deser("test-only-message");
        assert!(error.is_deserialization(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.api_error().is_none(), "{error:?}");
        assert_eq!(error.http_status_code(), None);
        let got = error.to_string();
        assert!(got.contains("test-only-message"), "{got}");
    }

    #[test]
    fn ser() {
        let error = Error::ser("test-only-message");
        assert!(error.is_serialization(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        let got = error.to_string();
        assert!(got.contains("test-only-message"), "{got}");
    }

    #[test]
    fn authentication() {
        let error = Error::authentication(CredentialsError::from_msg(false, "test-only-message"));
        assert!(error.is_authentication(), "{error:?}");
        let source = error
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(
            source.is_some_and(|e| !e.is_transient()),
            "{error:?}"
        );
        let got = error.to_string();
        assert!(got.contains("test-only-message"), "{got}");
    }

    #[test]
    fn io() {
        let error = Error::io("test-only-message");
        assert!(error.is_io(), "{error:?}");
        assert!(!error.is_authentication(), "{error:?}");
        let got = error.to_string();
        assert!(got.contains("test-only-message"), "{got}");
    }

    #[test]
    fn source_keeps_concrete_type() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "test-only-message");
        let error = Error::io(io);
        let source = error
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(
            source.is_some_and(|e| e.kind() == std::io::ErrorKind::ConnectionReset),
            "{error:?}"
        );
    }
}
