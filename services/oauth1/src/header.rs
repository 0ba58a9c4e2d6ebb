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

//! OAuth 1.0 `Authorization` header values.

use std::fmt;
use std::hash::{Hash, Hasher};

use http::HeaderValue;
use log::debug;
use oauthsign_core::time::{format_epoch_seconds, now, DateTime};
use oauthsign_core::Result;

use crate::base_string::signature_base_string;
use crate::constants::*;
use crate::credential::OAuthCredentials;
use crate::encode::percent_encode;
use crate::parameter::ParameterTable;
use crate::signature::{hmac_sha1_signature, plaintext_signature, SignatureMethod};
use crate::uri::UriComponents;

/// An OAuth 1.0 authorization header value.
///
/// Two values are equal iff their raw strings are equal; the signature method is
/// informational only.
///
/// - [RFC 5849 section 3.5.1](https://datatracker.ietf.org/doc/html/rfc5849#section-3.5.1)
#[derive(Debug, Clone)]
pub struct AuthorizationHeaderValue {
    method: SignatureMethod,
    raw: String,
}

impl AuthorizationHeaderValue {
    /// Build a PLAINTEXT header value.
    ///
    /// ```
    /// use oauthsign_oauth1::{AuthorizationHeaderValue, OAuthCredentials};
    ///
    /// let consumer = OAuthCredentials::new("key", "secret");
    /// let header = AuthorizationHeaderValue::plaintext(&consumer, None);
    /// assert_eq!(
    ///     header.as_str(),
    ///     r#"OAuth oauth_version="1.0",oauth_signature_method="PLAINTEXT",oauth_consumer_key="key",oauth_signature="secret%26""#
    /// );
    /// ```
    pub fn plaintext(consumer: &OAuthCredentials, user: Option<&OAuthCredentials>) -> Self {
        let mut params = ParameterTable::new();
        params.insert(OAUTH_VERSION_KEY, OAUTH_VERSION);
        params.insert(OAUTH_SIGNATURE_METHOD, SignatureMethod::Plaintext.as_str());
        params.insert(OAUTH_CONSUMER_KEY, &consumer.token);
        params.insert(
            OAUTH_SIGNATURE,
            plaintext_signature(&consumer.secret, user.map(|u| u.secret.as_str())),
        );
        if let Some(user) = user {
            params.insert(OAUTH_TOKEN, &user.token);
        }

        Self {
            method: SignatureMethod::Plaintext,
            raw: format_oauth_parameters(&params),
        }
    }

    /// Build an HMAC-SHA1 header value for `method` and `uri`.
    ///
    /// `timestamp` defaults to the current wall clock. The query of `uri` takes part in
    /// the signature; its fragment does not.
    pub fn hmac_sha1(
        method: &str,
        uri: &UriComponents,
        nonce: &str,
        timestamp: Option<DateTime>,
        consumer: &OAuthCredentials,
        user: Option<&OAuthCredentials>,
    ) -> Result<Self> {
        let timestamp = timestamp.unwrap_or_else(now);

        let mut params = ParameterTable::new();
        params.insert(OAUTH_VERSION_KEY, OAUTH_VERSION);
        params.insert(OAUTH_SIGNATURE_METHOD, SignatureMethod::HmacSha1.as_str());
        params.insert(OAUTH_CONSUMER_KEY, &consumer.token);
        params.insert(OAUTH_NONCE, nonce);
        params.insert(OAUTH_TIMESTAMP, format_epoch_seconds(timestamp));
        if let Some(user) = user {
            params.insert(OAUTH_TOKEN, &user.token);
        }

        let mut signed = params.clone();
        if let Some(query) = uri.query() {
            signed.merge_query(query);
        }
        let base_string = signature_base_string(method, uri, &signed.normalize());
        debug!("calculated signature base string: {base_string}");

        let signature = hmac_sha1_signature(
            &base_string,
            &consumer.secret,
            user.map(|u| u.secret.as_str()),
        )?;
        params.insert(OAUTH_SIGNATURE, signature);

        Ok(Self {
            method: SignatureMethod::HmacSha1,
            raw: format_oauth_parameters(&params),
        })
    }

    /// The serialized header value.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The serialized header value, same as [`AuthorizationHeaderValue::as_str`].
    pub fn raw_value(&self) -> &str {
        &self.raw
    }

    /// The signature method this value was built with.
    pub fn signature_method(&self) -> SignatureMethod {
        self.method
    }

    /// Convert into an `http` header value marked as sensitive.
    pub fn to_header_value(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&self.raw)?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Display for AuthorizationHeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for AuthorizationHeaderValue {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for AuthorizationHeaderValue {}

impl Hash for AuthorizationHeaderValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state)
    }
}

impl From<AuthorizationHeaderValue> for String {
    fn from(value: AuthorizationHeaderValue) -> Self {
        value.raw
    }
}

/// Serialize the `oauth_` parameters of `params` into `OAuth k="v",...`.
///
/// Parameters are written in insertion order with percent encoded values. Keys without
/// the `oauth_` prefix and keys without a value are skipped. A key holding several
/// values is written once, with its first value only.
pub fn format_oauth_parameters(params: &ParameterTable) -> String {
    let formatted = params
        .iter()
        .filter(|(k, _)| k.starts_with(PARAMETER_PREFIX))
        .filter_map(|(k, values)| {
            let value = values.first()?;
            Some(format!("{k}=\"{}\"", percent_encode(value)))
        })
        .collect::<Vec<_>>()
        .join(",");

    format!("{HEADER_PREFIX} {formatted}")
}
