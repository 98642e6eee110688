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

use clap::Parser;
use clap::error::ErrorKind;
use gsm::{Args, DefaultConnector, GcloudProject};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    enable_tracing();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => return report(gsm::args::usage_error(e)),
    };
    tracing::debug!("{args:?}");

    let mut stdout = std::io::stdout().lock();
    match gsm::run(&args, &GcloudProject::default(), &DefaultConnector, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(e),
    }
}

fn report(error: gsm::Error) -> ExitCode {
    tracing::debug!("{error:?}");
    eprintln!("{error}");
    if error.is_usage() {
        eprintln!("{}", gsm::args::USAGE);
    }
    ExitCode::FAILURE
}

// Logs go to stderr, stdout only carries the secret payload.
fn enable_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_level(true)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
