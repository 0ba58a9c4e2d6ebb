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

use crate::encode::percent_encode;
use crate::uri::UriComponents;

/// Construct the signature base string.
///
/// ## Format
///
/// ```text
/// UPPERCASE(method) + "&" +
/// percent_encode(scheme + "://" + authority + path) + "&" +
/// percent_encode(normalized_parameters)
/// ```
///
/// The base URI is encoded as a whole, query and fragment are left out. Missing
/// components contribute an empty string.
///
/// ## Reference
///
/// - [RFC 5849 section 3.4.1](https://datatracker.ietf.org/doc/html/rfc5849#section-3.4.1)
pub fn signature_base_string(
    method: &str,
    uri: &UriComponents,
    normalized_parameters: &str,
) -> String {
    let base_uri = format!(
        "{}://{}{}",
        uri.scheme().unwrap_or_default(),
        uri.authority().unwrap_or_default(),
        uri.path().unwrap_or_default(),
    );

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(&base_uri),
        percent_encode(normalized_parameters)
    )
}
