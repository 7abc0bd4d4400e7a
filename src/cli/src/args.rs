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
use gax::options::RequestOptions;
use http::Method;
use std::path::PathBuf;

/// Command-line arguments for `gapi`.
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = super::DESCRIPTION)]
pub struct Args {
    /// The service account key file.
    ///
    /// Defaults to the file named by `GOOGLE_APPLICATION_CREDENTIALS`. Without
    /// either, the request is sent without an `authorization` header.
    #[arg(long)]
    pub credentials_file: Option<PathBuf>,

    /// The HTTP method.
    #[arg(long, default_value = "GET", value_parser = parse_method)]
    pub method: Method,

    /// The request body, sent verbatim.
    #[arg(long)]
    pub data: Option<String>,

    /// The scopes included in the signed JWT, separated by commas.
    #[arg(long, value_delimiter = ',')]
    pub scopes: Option<Vec<String>>,

    /// The request URL.
    pub url: String,
}

impl Args {
    pub fn request_options(&self) -> RequestOptions {
        let options = RequestOptions::new(self.method.clone());
        match &self.data {
            Some(data) => options.with_body(data.clone()),
            None => options,
        }
    }
}

fn parse_method(value: &str) -> Result<Method, http::method::InvalidMethod> {
    Method::from_bytes(value.to_ascii_uppercase().as_bytes())
}
