use super::*;

#[test]
fn id_paths_embed_identifiers() {
    assert_eq!(drop_path(42), "/course-selection/drop/42");
    assert_eq!(roster_path(7), "/course-selection/course/7/students");
    assert_eq!(course_path(3), "/admin/course-management/courses/3");
    assert_eq!(schedule_path(9), "/admin/course-management/course-schedules/9");
    assert_eq!(schedule_status_path(9), "/admin/course-management/course-schedules/9/status");
}

#[test]
fn available_query_appends_trimmed_keyword() {
    let query = available_query(&PageRequest::default(), Some("  算法 "));
    assert_eq!(query.last(), Some(&("keyword", "算法".to_owned())));
}

#[test]
fn available_query_skips_blank_keyword() {
    let query = available_query(&PageRequest::default(), Some("   "));
    assert!(query.iter().all(|(k, _)| *k != "keyword"));
    assert_eq!(available_query(&PageRequest::default(), None), PageRequest::default().query_pairs());
}

#[test]
fn semester_query_is_optional() {
    assert!(semester_query(None).is_empty());
    assert_eq!(semester_query(Some(2)), vec![("semesterId", "2".to_owned())]);
}

#[cfg(not(feature = "csr"))]
#[test]
fn course_api_reports_network_error_off_browser() {
    let api = CourseApi::new(HttpClient::new("/api"));
    let result = futures::executor::block_on(api.select("token", 1));
    assert!(matches!(result, Err(ApiError::Network(_))));
}
