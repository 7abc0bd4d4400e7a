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

//! Send a single authorized request to a Google JSON API.

mod args;

use anyhow::Result;
use args::Args;
use auth::credentials::{Builder as CredentialsBuilder, Credentials};
use clap::Parser;

const DESCRIPTION: &str = concat!(
    "Sends a single request to a Google JSON API and prints the JSON response.",
    " Requests are signed with a self-signed JWT when a service account key is",
    " available, either from --credentials-file or from the file named by",
    " GOOGLE_APPLICATION_CREDENTIALS. Set RUST_LOG=debug to see what happens."
);

#[tokio::main]
async fn main() -> Result<()> {
    enable_tracing();
    let args = Args::parse();
    tracing::debug!("Configuration: {args:?}");

    let credentials = credentials(&args).await?;
    let client = gax::http::Client::new();
    let response = client
        .request(&args.url, &args.request_options(), Some(&credentials))
        .await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

async fn credentials(args: &Args) -> Result<Credentials> {
    let mut builder = CredentialsBuilder::default();
    if let Some(path) = &args.credentials_file {
        builder = builder.with_credentials_file(path);
    }
    if let Some(scopes) = &args.scopes {
        builder = builder.with_scopes(scopes);
    }
    Ok(builder.build().await?)
}

fn enable_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
