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

use crate::{Credential, OAuthCredentials};
use async_trait::async_trait;
use oauthsign_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides credentials that are fixed at initialization time.
#[derive(Debug)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a provider for consumer-only requests.
    pub fn new(consumer_key: &str, consumer_secret: &str) -> Self {
        Self {
            credential: Credential::new(
                OAuthCredentials::new(consumer_key, consumer_secret),
                None,
            ),
        }
    }

    /// Add the user's access token and secret.
    pub fn with_user(mut self, token: &str, token_secret: &str) -> Self {
        self.credential.user = Some(OAuthCredentials::new(token, token_secret));
        self
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_credential_provider() -> anyhow::Result<()> {
        let ctx = Context::new();

        let provider = StaticCredentialProvider::new("consumer_key", "consumer_secret");
        let cred = provider
            .provide_credential(&ctx)
            .await?
            .expect("credential must be provided");
        assert_eq!(cred.consumer.token, "consumer_key");
        assert_eq!(cred.consumer.secret, "consumer_secret");
        assert!(cred.user.is_none());

        let provider = StaticCredentialProvider::new("consumer_key", "consumer_secret")
            .with_user("token", "token_secret");
        let cred = provider
            .provide_credential(&ctx)
            .await?
            .expect("credential must be provided");
        assert_eq!(
            cred.user,
            Some(OAuthCredentials::new("token", "token_secret"))
        );

        Ok(())
    }
}
