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

//! Errors reported by `gsm`.

use google_cloud_gax as gax;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for `gsm`.
///
/// Every error is fatal: the binary prints it and exits with status `1`.
/// The constructors are public so tests, and applications embedding
/// [run][crate::run], can fake the failure of any step.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// The command line is invalid, or the secret name is missing.
    pub fn is_usage(&self) -> bool {
        matches!(self.0, ErrorKind::MissingName | ErrorKind::InvalidArgs(_))
    }

    /// The active project could not be discovered.
    pub fn is_project(&self) -> bool {
        matches!(self.0, ErrorKind::Project(_) | ErrorKind::NoProject)
    }

    /// The Secret Manager client could not be created.
    pub fn is_connect(&self) -> bool {
        matches!(self.0, ErrorKind::Connect(_))
    }

    /// The secret version could not be accessed, or its payload is invalid.
    pub fn is_fetch(&self) -> bool {
        matches!(
            self.0,
            ErrorKind::Fetch(_) | ErrorKind::MissingPayload | ErrorKind::Checksum { .. }
        )
    }

    /// The payload could not be written.
    pub fn is_output(&self) -> bool {
        matches!(self.0, ErrorKind::Output(_))
    }

    /// The service error, if the failure came from the `AccessSecretVersion` RPC.
    pub fn as_service_error(&self) -> Option<&gax::error::Error> {
        match &self.0 {
            ErrorKind::Fetch(e) => Some(e),
            _ => None,
        }
    }

    /// The secret name is empty or was not provided.
    pub fn missing_name() -> Error {
        Error(ErrorKind::MissingName)
    }

    /// The command line could not be parsed.
    pub fn invalid_args<T: Into<String>>(message: T) -> Error {
        Error(ErrorKind::InvalidArgs(message.into()))
    }

    /// Running the project discovery command failed.
    pub fn project<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::Project(source.into()))
    }

    /// The project discovery command succeeded, but returned no project.
    pub fn no_project() -> Error {
        Error(ErrorKind::NoProject)
    }

    /// Creating the credentials or the client failed.
    pub fn connect<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::Connect(source.into()))
    }

    /// The `AccessSecretVersion` RPC failed.
    pub fn fetch(source: gax::error::Error) -> Error {
        Error(ErrorKind::Fetch(source))
    }

    /// The service response did not include a payload.
    pub fn missing_payload() -> Error {
        Error(ErrorKind::MissingPayload)
    }

    /// The payload does not match the checksum returned by the service.
    pub fn checksum(expected: i64, got: i64) -> Error {
        Error(ErrorKind::Checksum { expected, got })
    }

    /// Writing the payload failed.
    pub fn output(source: std::io::Error) -> Error {
        Error(ErrorKind::Output(source))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("Error: Secret name is required")]
    MissingName,
    #[error("{0}")]
    InvalidArgs(String),
    #[error("Failed to get current GCP project: {0}")]
    Project(#[source] BoxError),
    #[error("Error: No GCP project configured")]
    NoProject,
    #[error("Failed to create secretmanager client: {0}")]
    Connect(#[source] BoxError),
    #[error("Failed to access secret version: {0}")]
    Fetch(#[source] gax::error::Error),
    #[error("Failed to access secret version: the response has no payload")]
    MissingPayload,
    #[error(
        "Failed to access secret version: payload checksum mismatch, expected={expected}, got={got}"
    )]
    Checksum { expected: i64, got: i64 },
    #[error("Failed to write secret payload: {0}")]
    Output(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::{Code, Status};
    use std::error::Error as _;

    #[test]
    fn usage() {
        let error = Error::missing_name();
        assert!(error.is_usage(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.to_string(), "Error: Secret name is required");

        let error = Error::invalid_args("unexpected argument '--bad'");
        assert!(error.is_usage(), "{error:?}");
        assert!(error.to_string().contains("--bad"), "{error}");
    }

    #[test]
    fn project() {
        let error = Error::project("test message");
        assert!(error.is_project(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(
            error
                .to_string()
                .starts_with("Failed to get current GCP project: "),
            "{error}"
        );
        assert!(error.to_string().contains("test message"), "{error}");

        let error = Error::no_project();
        assert!(error.is_project(), "{error:?}");
        assert_eq!(error.to_string(), "Error: No GCP project configured");
    }

    #[test]
    fn connect() {
        let error = Error::connect("test message");
        assert!(error.is_connect(), "{error:?}");
        assert!(!error.is_fetch(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("test message"), "{error}");
    }

    #[test]
    fn fetch() {
        let status = Status::default()
            .set_code(Code::PermissionDenied)
            .set_message("caller lacks secretmanager.versions.access");
        let error = Error::fetch(gax::error::Error::service(status));
        assert!(error.is_fetch(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(
            error.to_string().contains("secretmanager.versions.access"),
            "{error}"
        );
        let svc = error.as_service_error().and_then(|e| e.status());
        assert_eq!(svc.map(|s| s.code), Some(Code::PermissionDenied));

        let error = Error::missing_payload();
        assert!(error.is_fetch(), "{error:?}");
        assert!(error.as_service_error().is_none(), "{error:?}");

        let error = Error::checksum(1, 2);
        assert!(error.is_fetch(), "{error:?}");
        assert!(error.to_string().contains("expected=1, got=2"), "{error}");
    }

    #[test]
    fn output() {
        let error = Error::output(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert!(error.is_output(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
    }
}
