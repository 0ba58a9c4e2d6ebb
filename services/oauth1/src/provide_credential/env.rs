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

use crate::{constants::*, Credential, OAuthCredentials};
use async_trait::async_trait;
use log::debug;
use oauthsign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads OAuth 1.0 credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `OAUTH_CONSUMER_KEY`: The consumer key
/// - `OAUTH_CONSUMER_SECRET`: The consumer secret
/// - `OAUTH_TOKEN`: The user's access token (optional)
/// - `OAUTH_TOKEN_SECRET`: The user's access token secret (optional)
///
/// The user pair is only used when both of its variables are set.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        let (Some(key), Some(secret)) = (
            envs.get(OAUTH_CONSUMER_KEY_ENV),
            envs.get(OAUTH_CONSUMER_SECRET_ENV),
        ) else {
            debug!("no oauth consumer credentials found in env");
            return Ok(None);
        };

        let user = match (envs.get(OAUTH_TOKEN_ENV), envs.get(OAUTH_TOKEN_SECRET_ENV)) {
            (Some(token), Some(token_secret)) => Some(OAuthCredentials::new(token, token_secret)),
            (None, None) => None,
            _ => {
                debug!("ignoring incomplete oauth user credentials in env");
                None
            }
        };

        Ok(Some(Credential::new(
            OAuthCredentials::new(key, secret),
            user,
        )))
    }
}
