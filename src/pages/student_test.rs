use super::*;
use serde_json::json;

fn schedule(extra: serde_json::Value) -> CourseSchedule {
    let mut base = json!({
        "id": 11,
        "maxStudents": 30,
        "currentStudents": 10,
        "status": "OPEN",
        "courseId": 1,
        "courseCode": "CS101",
        "courseName": "程序设计",
        "courseType": "REQUIRED",
        "credits": 3.0,
        "teacherId": 2,
        "teacherName": "李老师",
        "semesterId": 1,
        "semesterName": "2024春"
    });
    if let (Some(base), Some(extra)) = (base.as_object_mut(), extra.as_object()) {
        base.extend(extra.clone());
    }
    serde_json::from_value(base).expect("valid schedule")
}

fn selection(name: &str, status: &str, credits: f64, slots: serde_json::Value) -> CourseSelection {
    serde_json::from_value(json!({
        "id": 1,
        "selectionTime": "2024-02-01T10:00:00",
        "status": status,
        "courseScheduleId": 11,
        "classroom": "A101",
        "scheduleTime": slots,
        "courseId": 1,
        "courseCode": "CS101",
        "courseName": name,
        "courseType": "REQUIRED",
        "credits": credits,
        "teacherId": 2,
        "teacherName": "李老师",
        "semesterId": 1,
        "semesterName": "2024春"
    }))
    .expect("valid selection")
}

#[test]
fn open_schedule_with_seats_is_available() {
    assert_eq!(select_state(&schedule(json!({}))), SelectState::Available);
}

#[test]
fn already_selected_wins_over_everything() {
    let s = schedule(json!({ "isSelected": true, "currentStudents": 30, "canSelect": false }));
    assert_eq!(select_state(&s), SelectState::Selected);
}

#[test]
fn backend_refusal_shows_its_message() {
    let s = schedule(json!({ "canSelect": false, "selectionMessage": "时间冲突" }));
    assert_eq!(select_state(&s), SelectState::Unavailable("时间冲突".to_owned()));
}

#[test]
fn full_and_closed_schedules_cannot_be_selected() {
    assert_eq!(select_state(&schedule(json!({ "currentStudents": 30 }))), SelectState::Full);
    assert_eq!(
        select_state(&schedule(json!({ "status": "CLOSED" }))),
        SelectState::Unavailable("已结束".to_owned())
    );
}

#[test]
fn total_credits_counts_only_active_enrollments() {
    let list = vec![
        selection("A", "SELECTED", 3.0, json!([])),
        selection("B", "DROPPED", 2.0, json!([])),
        selection("C", "SELECTED", 1.5, json!([])),
    ];
    assert!((total_credits(&list) - 4.5).abs() < f64::EPSILON);
}

#[test]
fn timetable_buckets_by_weekday_sorted_by_start() {
    let list = vec![
        selection(
            "晚课",
            "SELECTED",
            2.0,
            json!([{ "dayOfWeek": 1, "startTime": "19:00", "endTime": "20:40" }]),
        ),
        selection(
            "早课",
            "SELECTED",
            2.0,
            json!([
                { "dayOfWeek": 1, "startTime": "08:00", "endTime": "09:40" },
                { "dayOfWeek": 5, "startTime": "10:00", "endTime": "11:40" }
            ]),
        ),
        selection(
            "已退",
            "DROPPED",
            2.0,
            json!([{ "dayOfWeek": 2, "startTime": "08:00", "endTime": "09:40" }]),
        ),
    ];
    let days = timetable(&list);
    let monday: Vec<_> = days[0].iter().map(|e| e.course_name.as_str()).collect();
    assert_eq!(monday, ["早课", "晚课"]);
    assert!(days[1].is_empty());
    assert_eq!(days[4].len(), 1);
    assert_eq!(days[4][0].classroom, "A101");
}

#[test]
fn selection_status_labels() {
    assert_eq!(selection_status_label(SelectionStatus::Dropped), "已退");
    assert_eq!(selection_status_label(SelectionStatus::Completed), "已修完");
}
