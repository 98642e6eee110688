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

//! Discovers the active Google Cloud project.

use crate::{Error, Result};
use std::process::Stdio;
use tokio::process::Command;

const GCLOUD: &str = "gcloud";
const GCLOUD_ARGS: [&str; 3] = ["config", "get-value", "project"];

/// Resolves the project used to build the secret resource name.
pub trait ProjectResolver: std::fmt::Debug + Send + Sync {
    /// Returns the project id, without surrounding whitespace.
    ///
    /// Implementations must fail if the project is empty.
    fn resolve(&self) -> impl Future<Output = Result<String>> + Send;
}

/// Reads the active project from the `gcloud` CLI configuration.
///
/// Runs `gcloud config get-value project` and returns its standard output,
/// trimmed. There is no caching, each call runs the command again.
#[derive(Clone, Debug)]
pub struct GcloudProject {
    program: String,
    args: Vec<String>,
}

impl Default for GcloudProject {
    fn default() -> Self {
        Self::with_command(GCLOUD, GCLOUD_ARGS)
    }
}

impl GcloudProject {
    /// Replaces the discovery command.
    ///
    /// The command must print the project id on its standard output and exit
    /// successfully.
    pub fn with_command<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl ProjectResolver for GcloudProject {
    async fn resolve(&self) -> Result<String> {
        tracing::debug!(command = self.command_line(), "resolving active project");
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| Error::project(format!("cannot run `{}`: {e}", self.command_line())))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let mut msg = format!("`{}` failed", self.command_line());
            if let Some(code) = output.status.code() {
                msg = format!("{msg}, code={code}");
            }
            return Err(Error::project(format!("{msg}, stderr=<{}>", stderr.trim())));
        }

        let stdout = String::from_utf8(output.stdout).map_err(Error::project)?;
        let project = stdout.trim();
        if project.is_empty() {
            return Err(Error::no_project());
        }
        Ok(project.to_string())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn default_command() {
        let resolver = GcloudProject::default();
        assert_eq!(resolver.command_line(), "gcloud config get-value project");
    }

    #[test_case("echo my-proj"; "plain")]
    #[test_case("echo '  my-proj  '"; "padded")]
    #[test_case("printf '\\tmy-proj\\n\\n'"; "tabs and newlines")]
    #[tokio::test]
    async fn trims_output(script: &str) -> anyhow::Result<()> {
        let resolver = GcloudProject::with_command("sh", ["-c", script]);
        let project = resolver.resolve().await?;
        assert_eq!(project, "my-proj");
        Ok(())
    }

    #[test_case("true"; "no output")]
    #[test_case("echo '   '"; "only whitespace")]
    #[test_case("echo '(unset)' >&2"; "unset")]
    #[tokio::test]
    async fn empty_project(script: &str) {
        let resolver = GcloudProject::with_command("sh", ["-c", script]);
        let got = resolver.resolve().await;
        let error = got.expect_err("an empty project should fail");
        assert!(error.is_project(), "{error:?}");
        assert_eq!(error.to_string(), "Error: No GCP project configured");
    }

    #[tokio::test]
    async fn command_fails() {
        let resolver =
            GcloudProject::with_command("sh", ["-c", "echo my-proj; echo boom >&2; exit 3"]);
        let got = resolver.resolve().await;
        let error = got.expect_err("a failed command should fail");
        assert!(error.is_project(), "{error:?}");
        let msg = error.to_string();
        assert!(msg.starts_with("Failed to get current GCP project"), "{msg}");
        assert!(msg.contains("code=3"), "{msg}");
        assert!(msg.contains("stderr=<boom>"), "{msg}");
    }

    #[tokio::test]
    async fn command_not_found() {
        let resolver = GcloudProject::with_command("/nonexistent/gsm-test/gcloud", ["config"]);
        let got = resolver.resolve().await;
        let error = got.expect_err("a missing program should fail");
        assert!(error.is_project(), "{error:?}");
        assert!(
            error.to_string().contains("/nonexistent/gsm-test/gcloud"),
            "{error}"
        );
    }

    #[tokio::test]
    async fn invalid_utf8() {
        let resolver = GcloudProject::with_command("sh", ["-c", "printf '\\377\\376'"]);
        let got = resolver.resolve().await;
        let error = got.expect_err("invalid UTF-8 should fail");
        assert!(error.is_project(), "{error:?}");
    }
}
