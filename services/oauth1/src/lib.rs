// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! OAuth 1.0 ([RFC 5849](https://datatracker.ietf.org/doc/html/rfc5849)) signing.
//!
//! Builds `Authorization` header values with the `PLAINTEXT` or `HMAC-SHA1` signature
//! methods from a consumer credential pair and an optional user credential pair.
//!
//! ## Example
//!
//! ```
//! use oauthsign_core::time::parse_rfc3339;
//! use oauthsign_oauth1::{build_hmac_sha1_header, OAuthCredentials};
//!
//! # fn main() -> oauthsign_core::Result<()> {
//! let consumer = OAuthCredentials::new("984A8D4CEDCB7BC3B61119B234FF6", "29D8AE818E6A4BB378785D989C64A");
//! let header = build_hmac_sha1_header(
//!     "GET",
//!     "https://faithlife.com/v1/user/current",
//!     "TestNonce",
//!     Some(parse_rfc3339("2021-11-05T12:00:00Z")?),
//!     &consumer,
//!     None,
//! )?;
//! assert!(header.ends_with(r#"oauth_signature="Yb2Bejtw2%2BJ2%2FiY%2Buto4xUeos%2BI%3D""#));
//! # Ok(())
//! # }
//! ```
//!
//! To sign `http` requests, combine [`RequestSigner`] with a credential provider in an
//! [`oauthsign_core::Signer`].

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;

mod credential;
pub use credential::{Credential, OAuthCredentials};

mod encode;
pub use encode::percent_encode;

mod uri;
pub use uri::UriComponents;

mod parameter;
pub use parameter::ParameterTable;

mod base_string;
pub use base_string::signature_base_string;

mod signature;
pub use signature::{hmac_sha1_signature, plaintext_signature, SignatureMethod};

mod header;
pub use header::{format_oauth_parameters, AuthorizationHeaderValue};

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::{EnvCredentialProvider, StaticCredentialProvider};

use oauthsign_core::time::DateTime;
use oauthsign_core::Result;

/// Build a PLAINTEXT `Authorization` header value.
pub fn build_plaintext_header(
    consumer: &OAuthCredentials,
    user: Option<&OAuthCredentials>,
) -> String {
    AuthorizationHeaderValue::plaintext(consumer, user).into()
}

/// Build an HMAC-SHA1 `Authorization` header value for a request.
///
/// `timestamp` defaults to the current wall clock when `None`.
pub fn build_hmac_sha1_header(
    method: &str,
    uri: &str,
    nonce: &str,
    timestamp: Option<DateTime>,
    consumer: &OAuthCredentials,
    user: Option<&OAuthCredentials>,
) -> Result<String> {
    let uri = UriComponents::parse(uri);
    AuthorizationHeaderValue::hmac_sha1(method, &uri, nonce, timestamp, consumer, user)
        .map(String::from)
}

/// Decompose `uri` the way the signer sees it.
pub fn parse_uri(uri: &str) -> UriComponents {
    UriComponents::parse(uri)
}
