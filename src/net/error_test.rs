use super::*;

#[test]
fn from_code_maps_auth_codes() {
    assert_eq!(ApiError::from_code(401, "未授权"), ApiError::Auth("未授权".to_owned()));
    assert!(ApiError::from_code(1003, "用户名或密码错误").is_auth());
    assert!(ApiError::from_code(1005, "Token已过期").is_auth());
    assert!(ApiError::from_code(1006, "Token无效").is_auth());
}

#[test]
fn from_code_maps_registration_failures() {
    assert_eq!(ApiError::from_code(400, "参数错误"), ApiError::Validation("参数错误".to_owned()));
    assert_eq!(ApiError::from_code(1002, "用户已存在"), ApiError::Conflict("用户已存在".to_owned()));
}

#[test]
fn from_code_maps_permission_and_missing_resources() {
    assert!(matches!(ApiError::from_code(4001, "权限不足"), ApiError::Forbidden(_)));
    assert!(matches!(ApiError::from_code(2001, "课程不存在"), ApiError::NotFound(_)));
}

#[test]
fn from_code_falls_back_to_server_error() {
    let err = ApiError::from_code(2003, "课程人数已满");
    assert_eq!(err, ApiError::Server { code: 2003, message: "课程人数已满".to_owned() });
    assert_eq!(err.to_string(), "server error 2003: 课程人数已满");
}

#[test]
fn message_returns_inner_text() {
    assert_eq!(ApiError::Network("offline".to_owned()).message(), "offline");
    assert_eq!(ApiError::from_code(500, "boom").message(), "boom");
}
