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

use anyhow::Result;
use http::header::AUTHORIZATION;
use oauthsign_core::time::{parse_rfc3339, DateTime};
use oauthsign_core::{Context, Signer};
use oauthsign_oauth1::{
    build_hmac_sha1_header, build_plaintext_header, parse_uri, signature_base_string,
    AuthorizationHeaderValue, OAuthCredentials, ParameterTable, RequestSigner, SignatureMethod,
    StaticCredentialProvider, UriComponents,
};
use pretty_assertions::assert_eq;
use test_case::test_case;

const TIMESTAMP: &str = "1636113600";

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn test_time() -> DateTime {
    parse_rfc3339("2021-11-05T12:00:00Z").expect("time must be valid")
}

fn consumer() -> OAuthCredentials {
    OAuthCredentials::new(
        "984A8D4CEDCB7BC3B61119B234FF6",
        "29D8AE818E6A4BB378785D989C64A",
    )
}

fn user() -> OAuthCredentials {
    OAuthCredentials::new(
        "5B282E3EC82C47A4B92F58112B1CD",
        "7F458AF16C37249B15B63D8FA9189",
    )
}

fn user_hmac(uri: &str) -> Result<AuthorizationHeaderValue> {
    Ok(AuthorizationHeaderValue::hmac_sha1(
        "GET",
        &UriComponents::parse(uri),
        "TestNonce",
        Some(test_time()),
        &consumer(),
        Some(&user()),
    )?)
}

fn expected_user_hmac(signature: &str) -> String {
    [
        r#"OAuth oauth_version="1.0""#.to_string(),
        r#"oauth_signature_method="HMAC-SHA1""#.to_string(),
        r#"oauth_consumer_key="984A8D4CEDCB7BC3B61119B234FF6""#.to_string(),
        r#"oauth_nonce="TestNonce""#.to_string(),
        format!(r#"oauth_timestamp="{TIMESTAMP}""#),
        r#"oauth_token="5B282E3EC82C47A4B92F58112B1CD""#.to_string(),
        format!(r#"oauth_signature="{signature}""#),
    ]
    .join(",")
}

#[test]
fn test_consumer_only_plaintext_header() {
    let header = AuthorizationHeaderValue::plaintext(&consumer(), None);

    assert_eq!(
        header.to_string(),
        concat!(
            r#"OAuth oauth_version="1.0","#,
            r#"oauth_signature_method="PLAINTEXT","#,
            r#"oauth_consumer_key="984A8D4CEDCB7BC3B61119B234FF6","#,
            r#"oauth_signature="29D8AE818E6A4BB378785D989C64A%26""#,
        )
    );
    assert_eq!(header.signature_method(), SignatureMethod::Plaintext);
}

#[test]
fn test_plaintext_header() {
    let header = build_plaintext_header(&consumer(), Some(&user()));

    assert_eq!(
        header,
        concat!(
            r#"OAuth oauth_version="1.0","#,
            r#"oauth_signature_method="PLAINTEXT","#,
            r#"oauth_consumer_key="984A8D4CEDCB7BC3B61119B234FF6","#,
            r#"oauth_signature="29D8AE818E6A4BB378785D989C64A%267F458AF16C37249B15B63D8FA9189","#,
            r#"oauth_token="5B282E3EC82C47A4B92F58112B1CD""#,
        )
    );
}

#[test]
fn test_equivalent_plaintext_headers_are_equal() {
    let first = AuthorizationHeaderValue::plaintext(&consumer(), Some(&user()));
    let second = AuthorizationHeaderValue::plaintext(&consumer(), Some(&user()));

    assert_eq!(first, second);
}

#[test]
fn test_different_plaintext_headers_are_not_equal() {
    let first = AuthorizationHeaderValue::plaintext(&consumer(), Some(&user()));
    let second = AuthorizationHeaderValue::plaintext(&consumer(), None);

    assert_ne!(first, second);
}

#[test]
fn test_plaintext_raw_value_matches_to_string() {
    let header = AuthorizationHeaderValue::plaintext(&consumer(), Some(&user()));

    assert_eq!(header.raw_value(), header.to_string());
    assert_eq!(header.as_str(), header.raw_value());
}

#[test]
fn test_hmac_raw_value_matches_to_string() -> Result<()> {
    let header = AuthorizationHeaderValue::hmac_sha1(
        "GET",
        &parse_uri("https://faithlife.com/v1/user/current"),
        "TestNonce",
        Some(test_time()),
        &consumer(),
        None,
    )?;

    assert_eq!(header.raw_value(), header.to_string());
    Ok(())
}

#[test]
fn test_equivalent_hmac_headers_are_equal() -> Result<()> {
    let first = user_hmac("https://faithlife.com/v1/groups")?;
    let second = user_hmac("https://faithlife.com/v1/groups")?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_different_hmac_headers_are_not_equal() -> Result<()> {
    let base = user_hmac("https://faithlife.com/v1/groups")?;
    assert_ne!(base, user_hmac("https://faithlife.com/")?);

    let uri = UriComponents::parse("https://faithlife.com/v1/groups");
    let other_nonce = AuthorizationHeaderValue::hmac_sha1(
        "GET",
        &uri,
        "OtherNonce",
        Some(test_time()),
        &consumer(),
        Some(&user()),
    )?;
    assert_ne!(base, other_nonce);

    let other_time = AuthorizationHeaderValue::hmac_sha1(
        "GET",
        &uri,
        "TestNonce",
        Some(parse_rfc3339("2021-11-05T12:00:01Z")?),
        &consumer(),
        Some(&user()),
    )?;
    assert_ne!(base, other_time);

    let other_user = AuthorizationHeaderValue::hmac_sha1(
        "GET",
        &uri,
        "TestNonce",
        Some(test_time()),
        &consumer(),
        Some(&OAuthCredentials::new("5B282E3EC82C47A4B92F58112B1CD", "other")),
    )?;
    assert_ne!(base, other_user);

    Ok(())
}

#[test]
fn test_consumer_only_hmac_header() -> Result<()> {
    init();

    let header = build_hmac_sha1_header(
        "GET",
        "https://faithlife.com/v1/user/current",
        "TestNonce",
        Some(test_time()),
        &consumer(),
        None,
    )?;

    assert_eq!(
        header,
        [
            r#"OAuth oauth_version="1.0""#.to_string(),
            r#"oauth_signature_method="HMAC-SHA1""#.to_string(),
            r#"oauth_consumer_key="984A8D4CEDCB7BC3B61119B234FF6""#.to_string(),
            r#"oauth_nonce="TestNonce""#.to_string(),
            format!(r#"oauth_timestamp="{TIMESTAMP}""#),
            r#"oauth_signature="Yb2Bejtw2%2BJ2%2FiY%2Buto4xUeos%2BI%3D""#.to_string(),
        ]
        .join(",")
    );
    Ok(())
}

#[test_case("https://faithlife.com/v1/user/current", "GTt8QoqluMTUMWVql2Uzifn9Y6E%3D"; "user")]
#[test_case("https://faithlife.com/v1/conversations/15/messages?offset=20", "IkeNQ1RwYZrKoG1UDCqA30gaVzY%3D"; "single query parameter")]
#[test_case("https://faithlife.com/v1/conversations/15/messages?offset=20&pageSize=25&markRead=true", "x97fUSPCFuhgns1NE3K1bdL6WW4%3D"; "multiple query parameters")]
#[test_case("https://faithlife.com/v1/conversations/1/messages/15/reactions?textReaction=%F0%9F%8C%9F", "CsRqEQfx87Zmj7b3yH0ekQd4VBA%3D"; "high bytes are unsigned")]
#[test_case("https://faithlife.com/v1/", "T2TOxaSHluUV3Ec48zi7tIt%2BP2o%3D"; "trailing path slash")]
#[test_case("wss://faithlife.com/v1", "C%2BVbxjv0Sa9YSL3UlNDo%2FPT74Lw%3D"; "non http scheme")]
#[test_case("https://faithlife.com/v1/groups?includeUser", "WXpMN2kQeNMk1fIH8CtNpOdG%2FWk%3D"; "boolean query parameter")]
#[test_case("https://faithlife.com/v1/groups?test=second&test=first", "LLyTa21Xu%2F6HOb0xLfFW7vnR2NU%3D"; "duplicate query parameter keys")]
#[test_case("https://faithlife.com/v1/groups?offset=20#ignored", "EfEwp534IR9Og32q2FGBsRdEYDc%3D"; "fragment is ignored")]
fn test_user_hmac_header(uri: &str, signature: &str) -> Result<()> {
    init();

    assert_eq!(user_hmac(uri)?.to_string(), expected_user_hmac(signature));
    Ok(())
}

#[test]
fn test_method_is_uppercased() -> Result<()> {
    let header = build_hmac_sha1_header(
        "post",
        "https://faithlife.com/v1/groups",
        "TestNonce",
        Some(test_time()),
        &consumer(),
        Some(&user()),
    )?;

    assert_eq!(header, expected_user_hmac("383BRhikfMh2Cl0BDWEjtHDqwEY%3D"));
    Ok(())
}

#[test]
fn test_signature_base_string_with_flag_parameter() {
    let uri = parse_uri("https://faithlife.com/v1/groups?includeUser");

    let mut params = ParameterTable::new();
    params.insert("oauth_version", "1.0");
    params.insert("oauth_consumer_key", "key");
    params.merge_query(uri.query().unwrap_or_default());

    assert_eq!(
        signature_base_string("GET", &uri, &params.normalize()),
        "GET&https%3A%2F%2Ffaithlife.com%2Fv1%2Fgroups&%26oauth_consumer_key%3Dkey%26oauth_version%3D1.0"
    );
}

#[test]
fn test_default_timestamp_uses_clock() -> Result<()> {
    let header = build_hmac_sha1_header(
        "GET",
        "https://faithlife.com/v1/groups",
        "TestNonce",
        None,
        &consumer(),
        None,
    )?;

    assert!(!header.contains(&format!(r#"oauth_timestamp="{TIMESTAMP}""#)));
    assert!(header.contains(r#"oauth_timestamp=""#));
    Ok(())
}

#[tokio::test]
async fn test_signer_with_static_credential() -> Result<()> {
    init();

    let provider = StaticCredentialProvider::new(
        "984A8D4CEDCB7BC3B61119B234FF6",
        "29D8AE818E6A4BB378785D989C64A",
    )
    .with_user(
        "5B282E3EC82C47A4B92F58112B1CD",
        "7F458AF16C37249B15B63D8FA9189",
    );
    let builder = RequestSigner::new(SignatureMethod::HmacSha1)
        .with_nonce("TestNonce")
        .with_time(test_time());
    let signer = Signer::new(Context::new(), provider, builder);

    let req = http::Request::get("https://faithlife.com/v1/groups?test=second&test=first")
        .body(())?;
    let (mut parts, _) = req.into_parts();
    signer.sign(&mut parts).await?;

    assert_eq!(
        parts.headers[AUTHORIZATION].to_str()?,
        expected_user_hmac("LLyTa21Xu%2F6HOb0xLfFW7vnR2NU%3D")
    );
    Ok(())
}
