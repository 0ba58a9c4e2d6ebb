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

//! Core components for signing API requests.
//!
//! This crate provides the shared types and traits used by the oauthsign signing services.
//!
//! ## Overview
//!
//! - **Context**: where credential providers read their environment from
//! - **Traits**: [`ProvideCredential`] loads a credential, [`SignRequest`] applies a signature
//!   to an `http` request
//! - **Signer**: glues a provider and a request signer together and caches the credential
//!
//! ## Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use oauthsign_core::{Context, Error, ProvideCredential, Result, SignRequest, Signer, SigningCredential};
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyProvider;
//!
//! #[async_trait]
//! impl ProvideCredential for MyProvider {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential { key: "my-key".to_string() }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyRequestSigner;
//!
//! #[async_trait]
//! impl SignRequest for MyRequestSigner {
//!     type Credential = MyCredential;
//!
//!     async fn sign_request(
//!         &self,
//!         _: &Context,
//!         req: &mut http::request::Parts,
//!         credential: Option<&Self::Credential>,
//!     ) -> Result<()> {
//!         let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
//!         req.headers.insert("x-api-key", cred.key.parse()?);
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyProvider, MyRequestSigner);
//!
//! let mut parts = http::Request::get("https://example.com")
//!     .body(())
//!     .expect("request must be valid")
//!     .into_parts()
//!     .0;
//! signer.sign(&mut parts).await?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod signer;
pub use signer::Signer;
