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

//! Prints the latest version of a [Secret Manager] secret.
//!
//! The secret is looked up in the active project of the `gcloud` CLI, that
//! is, the output of `gcloud config get-value project`. Credentials are
//! discovered using [Application Default Credentials].
//!
//! ```text
//! $ gsm --name=db-password
//! s3cr3t
//! ```
//!
//! [Secret Manager]: https://cloud.google.com/secret-manager
//! [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials

pub mod args;
pub mod errors;
pub mod output;
pub mod project;
pub mod secret;

pub use args::Args;
pub use errors::Error;
pub use project::{GcloudProject, ProjectResolver};
pub use secret::{Connector, DefaultConnector};

/// The result type for `gsm`.
pub type Result<T> = std::result::Result<T, Error>;

/// Fetches the latest version of the secret named in `args` and writes it.
///
/// The steps run in order, and the first failure ends the run:
/// - validate the arguments,
/// - resolve the project, exactly once,
/// - create the client,
/// - access the secret version,
/// - write the payload to `out`.
///
/// Nothing is written to `out` unless the secret is accessed successfully.
/// The client is dropped before this function returns, on all paths.
pub async fn run<R, C, W>(args: &Args, resolver: &R, connector: &C, out: &mut W) -> Result<()>
where
    R: ProjectResolver,
    C: Connector,
    W: std::io::Write,
{
    let name = args.validate()?;
    let project = resolver.resolve().await?;
    tracing::debug!(project, name, "resolved active project");
    let client = connector.connect().await?;
    let payload = secret::access_latest(&client, &project, name).await?;
    output::write_payload(out, &payload)
}
