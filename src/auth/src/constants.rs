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

/// Environment variable with the path of the application default credentials.
pub(crate) const GOOGLE_APPLICATION_CREDENTIALS_VAR: &str = "GOOGLE_APPLICATION_CREDENTIALS";
/// The `type` field of a service account key file.
pub(crate) const SERVICE_ACCOUNT_KEY_TYPE: &str = "service_account";
/// The JWS algorithm used to sign self-signed JWTs.
pub(crate) const JWT_SIGNING_ALGORITHM: &str = "RS256";
