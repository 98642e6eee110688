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

use crate::{Error, Result};
use clap::Parser;

/// The usage line printed after any command line error.
pub const USAGE: &str = "Usage: gsm --name=SECRET_NAME";

/// Prints the latest version of a Secret Manager secret.
///
/// The secret is looked up in the active project of the `gcloud` CLI.
#[derive(Clone, Debug, Parser)]
#[command(name = "gsm", version, about)]
pub struct Args {
    /// Name of the secret to retrieve.
    // A missing flag and an empty value are the same usage error.
    #[arg(long, default_value = "")]
    pub name: String,
}

impl Args {
    /// Validates the arguments after parsing, returning the secret name.
    pub fn validate(&self) -> Result<&str> {
        if self.name.is_empty() {
            return Err(Error::missing_name());
        }
        Ok(self.name.as_str())
    }
}

/// Converts a clap parsing failure into a [Error].
///
/// `--help` and `--version` also surface as a [clap::Error], callers should
/// let clap print those and exit successfully.
pub fn usage_error(e: clap::Error) -> Error {
    Error::invalid_args(e.render().to_string().trim_end())
}
