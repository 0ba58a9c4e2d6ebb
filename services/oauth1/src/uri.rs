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

use std::convert::Infallible;
use std::str::FromStr;

/// The components of a URI that take part in an OAuth 1.0 signature.
///
/// This is a permissive decomposition, not a validating RFC 3986 parser: parsing never
/// fails, missing pieces are simply `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UriComponents {
    scheme: Option<String>,
    authority: Option<String>,
    path: Option<String>,
    query: Option<String>,
}

impl UriComponents {
    /// Split `uri` into scheme, authority, path and raw query.
    ///
    /// - Without a `:` every component is `None`.
    /// - The authority is only present when `:` is directly followed by `//`.
    /// - Both `/` and `\` start the path after an authority.
    /// - The query is the text between the first `?` and the next `#`; a `#` before the
    ///   `?` means there is no query.
    ///
    /// ```
    /// use oauthsign_oauth1::UriComponents;
    ///
    /// let uri = UriComponents::parse("https://faithlife.com/v1/groups?includeUser#top");
    /// assert_eq!(uri.scheme(), Some("https"));
    /// assert_eq!(uri.authority(), Some("faithlife.com"));
    /// assert_eq!(uri.path(), Some("/v1/groups"));
    /// assert_eq!(uri.query(), Some("includeUser"));
    /// ```
    pub fn parse(uri: &str) -> Self {
        let Some(sep) = uri.find(':') else {
            return Self::default();
        };

        // Everything after the scheme separator.
        let rest = &uri[sep + 1..];
        let hier = rest.strip_prefix("//");

        let authority = hier.map(|s| {
            let end = s
                .find(|c| matches!(c, '/' | '\\' | '?' | '#'))
                .unwrap_or(s.len());
            &s[..end]
        });

        let path = match hier {
            None => take_until_query(rest),
            Some(s) => match s.find(|c| matches!(c, '/' | '\\' | '?' | '#')) {
                Some(start) if matches!(s.as_bytes()[start], b'/' | b'\\') => {
                    take_until_query(&s[start..])
                }
                _ => "",
            },
        };

        Self {
            scheme: Some(uri[..sep].to_string()),
            authority: authority.map(str::to_string),
            path: Some(path.to_string()),
            query: find_query(&uri[sep..]).map(str::to_string),
        }
    }

    /// The scheme, e.g. `https`.
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// The authority, e.g. `faithlife.com` or `user@host:8080`.
    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    /// The path, always present (possibly empty) once a scheme was found.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// The raw query without its leading `?`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

impl FromStr for UriComponents {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

fn take_until_query(s: &str) -> &str {
    let end = s.find(|c| matches!(c, '?' | '#')).unwrap_or(s.len());
    &s[..end]
}

fn find_query(s: &str) -> Option<&str> {
    let start = s.find('?')?;
    match s.find('#') {
        None => Some(&s[start + 1..]),
        Some(fragment) if fragment < start => None,
        Some(fragment) => Some(&s[start + 1..fragment]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("https://faithlife.com", Some("https"), Some("faithlife.com"), Some(""), None; "scheme and authority")]
    #[test_case("https://faithlife.com/groups", Some("https"), Some("faithlife.com"), Some("/groups"), None; "path")]
    #[test_case("https://faithlife.com/groups/", Some("https"), Some("faithlife.com"), Some("/groups/"), None; "trailing slash")]
    #[test_case("https://faithlife.com/?search=Community%20Church", Some("https"), Some("faithlife.com"), Some("/"), Some("search=Community%20Church"); "query")]
    #[test_case("https://faithlife.com?offset=20", Some("https"), Some("faithlife.com"), Some(""), Some("offset=20"); "query without path")]
    #[test_case("https://faithlife.com#top", Some("https"), Some("faithlife.com"), Some(""), None; "fragment without path")]
    #[test_case("https://faithlife.com\\v1\\groups", Some("https"), Some("faithlife.com"), Some("\\v1\\groups"), None; "backslash path")]
    #[test_case("https://faithlife.com/a?b=c#d", Some("https"), Some("faithlife.com"), Some("/a"), Some("b=c"); "query and fragment")]
    #[test_case("https://faithlife.com/a#d?b=c", Some("https"), Some("faithlife.com"), Some("/a"), None; "question mark in fragment")]
    #[test_case("https://faithlife.com/a?", Some("https"), Some("faithlife.com"), Some("/a"), Some(""); "empty query")]
    #[test_case("mailto:someone@faithlife.com", Some("mailto"), None, Some("someone@faithlife.com"), None; "no authority")]
    #[test_case("urn:isbn:0451450523", Some("urn"), None, Some("isbn:0451450523"), None; "nested colon")]
    #[test_case("a:/x", Some("a"), None, Some("/x"), None; "single slash")]
    #[test_case("a:", Some("a"), None, Some(""), None; "scheme only")]
    #[test_case("://", Some(""), Some(""), Some(""), None; "empty scheme")]
    #[test_case("faithlife.com/groups?a=b", None, None, None, None; "no scheme separator")]
    #[test_case("", None, None, None, None; "empty")]
    fn test_parse(
        uri: &str,
        scheme: Option<&str>,
        authority: Option<&str>,
        path: Option<&str>,
        query: Option<&str>,
    ) {
        let parsed = UriComponents::parse(uri);

        assert_eq!(parsed.scheme(), scheme, "scheme of {uri}");
        assert_eq!(parsed.authority(), authority, "authority of {uri}");
        assert_eq!(parsed.path(), path, "path of {uri}");
        assert_eq!(parsed.query(), query, "query of {uri}");
    }

    #[test]
    fn test_parse_is_deterministic() {
        for uri in [
            "https://faithlife.com/v1/groups?includeUser",
            "wss://faithlife.com/v1",
            "https://用户@例子.测试/路径?键=值#片段",
        ] {
            assert_eq!(UriComponents::parse(uri), UriComponents::parse(uri));
            assert_eq!(uri.parse::<UriComponents>(), Ok(UriComponents::parse(uri)));
        }
    }

    #[test]
    fn test_parse_non_ascii() {
        let uri = UriComponents::parse("https://用户@例子.测试/路径?键=值#片段");

        assert_eq!(uri.authority(), Some("用户@例子.测试"));
        assert_eq!(uri.path(), Some("/路径"));
        assert_eq!(uri.query(), Some("键=值"));
    }
}
