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

use std::fmt::{Debug, Formatter};

use oauthsign_core::utils::Redact;
use oauthsign_core::{Error, Result, SigningCredential};

/// An OAuth 1.0 token and secret pair.
///
/// Used both for the consumer (the client application) and for the user (an access
/// token obtained on behalf of an end user).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OAuthCredentials {
    /// The token, sent as `oauth_consumer_key` or `oauth_token`.
    pub token: String,
    /// The shared secret, only ever used to derive the signature.
    pub secret: String,
}

impl OAuthCredentials {
    /// Create a new token and secret pair.
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret: secret.into(),
        }
    }

    /// Create a pair from raw bytes, failing with an encoding error on invalid UTF-8.
    pub fn from_bytes(token: &[u8], secret: &[u8]) -> Result<Self> {
        let token = std::str::from_utf8(token)
            .map_err(|e| Error::encoding("oauth token is not valid utf-8").with_source(e))?;
        let secret = std::str::from_utf8(secret)
            .map_err(|e| Error::encoding("oauth secret is not valid utf-8").with_source(e))?;

        Ok(Self::new(token, secret))
    }
}

impl Debug for OAuthCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("token", &Redact::from(&self.token))
            .field("secret", &Redact::from(&self.secret))
            .finish()
    }
}

/// Credential for OAuth 1.0 signing: the consumer pair plus an optional user pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    /// The client application's credentials.
    pub consumer: OAuthCredentials,
    /// The end user's access token, absent for consumer-only requests.
    pub user: Option<OAuthCredentials>,
}

impl Credential {
    /// Create a new credential.
    pub fn new(consumer: OAuthCredentials, user: Option<OAuthCredentials>) -> Self {
        Self { consumer, user }
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.consumer.token.is_empty()
    }
}
