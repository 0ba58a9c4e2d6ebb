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

use percent_encoding::utf8_percent_encode;

use crate::constants::OAUTH_ENCODE_SET;

/// Percent encode `value` as required by [RFC 5849 section 3.6](https://datatracker.ietf.org/doc/html/rfc5849#section-3.6).
///
/// The UTF-8 bytes of `value` are walked one at a time. ASCII letters, digits and
/// `-`, `.`, `_`, `~` are kept; every other byte becomes `%XX` with uppercase hex,
/// so a four byte code point turns into four triplets.
///
/// This is stricter than form encoding: `!`, `*`, `'`, `(` and `)` are escaped too.
///
/// ```
/// use oauthsign_oauth1::percent_encode;
///
/// assert_eq!(percent_encode("a b&c=d~"), "a%20b%26c%3Dd~");
/// assert_eq!(percent_encode("🌟"), "%F0%9F%8C%9F");
/// ```
pub fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, &OAUTH_ENCODE_SET).to_string()
}
