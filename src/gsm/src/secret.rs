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

//! Accesses secret versions in Secret Manager.

use crate::{Error, Result};
use bytes::Bytes;
use google_cloud_auth::credentials::Builder as CredentialsBuilder;
use google_cloud_gax::options::RequestOptionsBuilder;
use google_cloud_gax::retry_policy::{Aip194Strict, RetryPolicyExt};
use google_cloud_secretmanager_v1::client::SecretManagerService;

/// Creates the Secret Manager client.
pub trait Connector: std::fmt::Debug + Send + Sync {
    fn connect(&self) -> impl Future<Output = Result<SecretManagerService>> + Send;
}

/// Connects using [Application Default Credentials].
///
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials
#[derive(Clone, Debug, Default)]
pub struct DefaultConnector;

impl Connector for DefaultConnector {
    async fn connect(&self) -> Result<SecretManagerService> {
        let credentials = CredentialsBuilder::default()
            .build()
            .map_err(Error::connect)?;
        SecretManagerService::builder()
            .with_credentials(credentials)
            .with_tracing()
            .build()
            .await
            .map_err(Error::connect)
    }
}

/// Formats the resource name of the latest version of a secret.
pub fn latest_version_name(project: &str, name: &str) -> String {
    format!("projects/{project}/secrets/{name}/versions/latest")
}

/// Returns the payload of the latest version of `name` in `project`.
///
/// Makes a single `AccessSecretVersion` request. The request is not retried,
/// any error is returned as-is. If the service includes a CRC32C checksum
/// with the payload, the payload must match it.
pub async fn access_latest(
    client: &SecretManagerService,
    project: &str,
    name: &str,
) -> Result<Bytes> {
    let resource = latest_version_name(project, name);
    tracing::debug!(resource, "accessing secret version");
    let response = client
        .access_secret_version()
        .set_name(resource)
        .with_retry_policy(Aip194Strict.with_attempt_limit(1))
        .send()
        .await
        .map_err(Error::fetch)?;
    tracing::debug!(version = %response.name, "accessed secret version");

    let payload = response.payload.ok_or_else(Error::missing_payload)?;
    if let Some(expected) = payload.data_crc32c {
        let got = crc32c::crc32c(&payload.data) as i64;
        if got != expected {
            return Err(Error::checksum(expected, got));
        }
    }
    Ok(payload.data)
}
