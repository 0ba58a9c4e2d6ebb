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

use http::header::AUTHORIZATION;
use log::debug;
use oauthsign_core::time::DateTime;
use oauthsign_core::{Context, Error, Result, SignRequest};
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::credential::Credential;
use crate::header::AuthorizationHeaderValue;
use crate::signature::SignatureMethod;
use crate::uri::UriComponents;

const NONCE_LENGTH: usize = 32;

/// RequestSigner that implements [OAuth 1.0](https://datatracker.ietf.org/doc/html/rfc5849) authorization.
///
/// The request's method and URI are signed and the result is written to the
/// `Authorization` header. HMAC-SHA1 signing needs an absolute URI; requests without
/// a scheme or authority are rejected.
///
/// The URI is taken from [`http::Uri`], which always carries a path. A bare authority
/// such as `https://faithlife.com` is signed as `https://faithlife.com/`, so the header
/// differs from [`build_hmac_sha1_header`](crate::build_hmac_sha1_header) called with
/// the same string.
#[derive(Debug, Default)]
pub struct RequestSigner {
    method: SignatureMethod,
    nonce: Option<String>,
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer using `method`.
    pub fn new(method: SignatureMethod) -> Self {
        Self {
            method,
            nonce: None,
            time: None,
        }
    }

    /// Use a fixed nonce instead of generating one per request.
    ///
    /// # Note
    ///
    /// Reusing a nonce lets servers reject the request as a replay. Only use this for
    /// testing or when the caller manages nonces itself.
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    fn nonce(&self) -> String {
        match &self.nonce {
            Some(nonce) => nonce.clone(),
            None => rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(NONCE_LENGTH)
                .map(char::from)
                .collect(),
        }
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        parts: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;

        debug!("signing {} {} with {}", parts.method, parts.uri, self.method);
        let header = match self.method {
            SignatureMethod::Plaintext => {
                AuthorizationHeaderValue::plaintext(&cred.consumer, cred.user.as_ref())
            }
            SignatureMethod::HmacSha1 => {
                if parts.uri.scheme().is_none() || parts.uri.authority().is_none() {
                    return Err(Error::request_invalid(
                        "request without scheme or authority is invalid for signing",
                    ));
                }

                let uri = UriComponents::parse(&parts.uri.to_string());
                AuthorizationHeaderValue::hmac_sha1(
                    parts.method.as_str(),
                    &uri,
                    &self.nonce(),
                    self.time,
                    &cred.consumer,
                    cred.user.as_ref(),
                )?
            }
        };

        parts
            .headers
            .insert(AUTHORIZATION, header.to_header_value()?);
        Ok(())
    }
}
