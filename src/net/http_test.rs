use super::*;
use crate::net::types::Profile;

#[test]
fn endpoint_joins_base_and_path_with_single_slash() {
    let client = HttpClient::new("/api/");
    assert_eq!(client.endpoint("/auth/login"), "/api/auth/login");
    assert_eq!(client.endpoint("auth/me"), "/api/auth/me");
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn decode_body_unwraps_success_envelope() {
    let body = r#"{"code":200,"message":"操作成功","data":{"id":1,"username":"alice","realName":"Alice","role":"STUDENT"},"timestamp":1}"#;
    let profile: Profile = decode_body(200, body).unwrap();
    assert_eq!(profile.username, "alice");
}

#[test]
fn decode_body_accepts_empty_success_body_as_unit() {
    let result: Result<(), ApiError> = decode_body(200, "");
    assert_eq!(result, Ok(()));
}

#[test]
fn decode_body_accepts_null_data_as_unit() {
    let result: Result<(), ApiError> = decode_body(200, r#"{"code":200,"message":"ok","data":null}"#);
    assert_eq!(result, Ok(()));
}

#[test]
fn decode_body_classifies_envelope_failure_code() {
    let result: Result<(), ApiError> = decode_body(200, r#"{"code":1002,"message":"用户已存在","data":null}"#);
    assert_eq!(result, Err(ApiError::Conflict("用户已存在".to_owned())));
}

#[test]
fn decode_body_classifies_enveloped_http_failure() {
    let result: Result<Profile, ApiError> = decode_body(401, r#"{"code":401,"message":"未授权"}"#);
    assert_eq!(result, Err(ApiError::Auth("未授权".to_owned())));
}

#[test]
fn decode_body_classifies_bare_http_failure() {
    let result: Result<Profile, ApiError> = decode_body(502, "<html>bad gateway</html>");
    assert_eq!(result, Err(ApiError::Server { code: 502, message: "request failed: 502".to_owned() }));

    let result: Result<(), ApiError> = decode_body(401, "");
    assert!(matches!(result, Err(ApiError::Auth(_))));
}

#[test]
fn decode_body_reports_shape_mismatch_as_decode_error() {
    let result: Result<Profile, ApiError> = decode_body(200, r#"{"code":200,"message":"ok","data":{"id":"x"}}"#);
    assert!(matches!(result, Err(ApiError::Decode(_))));

    let result: Result<Profile, ApiError> = decode_body(200, "not json");
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[cfg(not(feature = "csr"))]
#[test]
fn send_is_unavailable_off_browser() {
    let client = HttpClient::new("/api");
    let result: Result<(), ApiError> =
        futures::executor::block_on(client.send(Method::Get, "/auth/me", &[], None, Some("t")));
    assert!(matches!(result, Err(ApiError::Network(_))));
}
