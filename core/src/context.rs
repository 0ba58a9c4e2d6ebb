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

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Context provides the environment that credential providers read from.
///
/// Signing itself never touches the context: it is a pure function of its inputs. The
/// context only matters to [`ProvideCredential`](crate::ProvideCredential) implementations.
///
/// ## Example
///
/// ```
/// use oauthsign_core::{Context, OsEnv};
///
/// let ctx = Context::new().with_env(OsEnv);
/// ```
#[derive(Clone, Debug)]
pub struct Context {
    env: Arc<dyn Env>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context that sees no environment variables.
    ///
    /// Use [`Context::with_env`] to read from the process environment or a fixed map.
    pub fn new() -> Self {
        Self {
            env: Arc::new(NoopEnv),
        }
    }

    /// Replace the environment implementation.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Get the environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }

    /// Returns an hashmap of (variable, value) pairs of strings, for all the
    /// environment variables visible to this context.
    #[inline]
    pub fn env_vars(&self) -> HashMap<String, String> {
        self.env.vars()
    }
}

/// Env abstracts environment variable access so providers can be tested without touching
/// the process environment.
pub trait Env: Debug + Send + Sync + 'static {
    /// Get an environment variable.
    fn var(&self, key: &str) -> Option<String>;

    /// Returns all environment variables.
    fn vars(&self) -> HashMap<String, String>;
}

/// Reads the environment of the current process.
#[derive(Debug, Copy, Clone)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }

    fn vars(&self) -> HashMap<String, String> {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }
}

/// StaticEnv provides a static env environment.
///
/// This is useful for testing or for providing a fixed environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// The environment variables to use.
    pub envs: HashMap<String, String>,
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }

    fn vars(&self) -> HashMap<String, String> {
        self.envs.clone()
    }
}

/// NoopEnv always returns None/empty.
///
/// This is used when no environment is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnv;

impl Env for NoopEnv {
    fn var(&self, _key: &str) -> Option<String> {
        None
    }

    fn vars(&self) -> HashMap<String, String> {
        HashMap::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_has_no_env() {
        let ctx = Context::default();

        assert_eq!(ctx.env_var("PATH"), None);
        assert!(ctx.env_vars().is_empty());
    }

    #[test]
    fn test_static_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([("OAUTH_CONSUMER_KEY".to_string(), "key".to_string())]),
        });

        assert_eq!(ctx.env_var("OAUTH_CONSUMER_KEY").as_deref(), Some("key"));
        assert_eq!(ctx.env_var("OAUTH_CONSUMER_SECRET"), None);
        assert_eq!(ctx.env_vars().len(), 1);
    }

    #[test]
    fn test_os_env() {
        temp_env::with_vars(
            [
                ("OAUTHSIGN_CONTEXT_TEST", Some("on")),
                ("OAUTHSIGN_CONTEXT_TEST_UNSET", None),
            ],
            || {
                let ctx = Context::new().with_env(OsEnv);

                assert_eq!(ctx.env_var("OAUTHSIGN_CONTEXT_TEST").as_deref(), Some("on"));
                assert_eq!(ctx.env_var("OAUTHSIGN_CONTEXT_TEST_UNSET"), None);
                assert_eq!(
                    ctx.env_vars().get("OAUTHSIGN_CONTEXT_TEST").map(String::as_str),
                    Some("on")
                );
            },
        );
    }
}
