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

use std::fmt;
use std::str::FromStr;

use oauthsign_core::hash::base64_hmac_sha1;
use oauthsign_core::{Error, Result};

/// The `oauth_signature_method` used to sign a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignatureMethod {
    /// [PLAINTEXT](https://datatracker.ietf.org/doc/html/rfc5849#section-3.4.4): the
    /// secrets themselves are the signature.
    Plaintext,
    /// [HMAC-SHA1](https://datatracker.ietf.org/doc/html/rfc5849#section-3.4.2)
    #[default]
    HmacSha1,
}

impl SignatureMethod {
    /// The method name as written in `oauth_signature_method`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureMethod::Plaintext => "PLAINTEXT",
            SignatureMethod::HmacSha1 => "HMAC-SHA1",
        }
    }
}

impl fmt::Display for SignatureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("PLAINTEXT") {
            Ok(SignatureMethod::Plaintext)
        } else if s.eq_ignore_ascii_case("HMAC-SHA1") {
            Ok(SignatureMethod::HmacSha1)
        } else {
            Err(Error::config_invalid(format!(
                "unsupported oauth signature method: {s}"
            )))
        }
    }
}

/// The PLAINTEXT signature: `consumer_secret&user_secret`.
///
/// The result is not percent encoded here, the header serializer does that.
pub fn plaintext_signature(consumer_secret: &str, user_secret: Option<&str>) -> String {
    let user_secret = user_secret.unwrap_or_default();
    let mut s = String::with_capacity(consumer_secret.len() + 1 + user_secret.len());
    s.push_str(consumer_secret);
    s.push('&');
    s.push_str(user_secret);
    s
}

/// The HMAC-SHA1 signature of `base_string`, base64 encoded.
///
/// The key is the raw plaintext signature, so it always holds at least the `&`
/// separator even when both secrets are empty.
pub fn hmac_sha1_signature(
    base_string: &str,
    consumer_secret: &str,
    user_secret: Option<&str>,
) -> Result<String> {
    let key = plaintext_signature(consumer_secret, user_secret);
    base64_hmac_sha1(key.as_bytes(), base_string.as_bytes())
}
