use super::*;

fn course_form() -> CourseForm {
    CourseForm {
        code: "CS101".to_owned(),
        name: " 程序设计 ".to_owned(),
        credits: "3".to_owned(),
        total_hours: "48".to_owned(),
        theory_hours: "32".to_owned(),
        practice_hours: "16".to_owned(),
        ..CourseForm::default()
    }
}

fn schedule_form() -> ScheduleForm {
    ScheduleForm {
        course_id: "1".to_owned(),
        teacher_id: "2".to_owned(),
        semester_id: "3".to_owned(),
        max_students: "60".to_owned(),
        ..ScheduleForm::default()
    }
}

#[test]
fn valid_course_form_builds_request() {
    let req = validate_course_form(&course_form()).expect("valid form");
    assert_eq!(req.course_code, "CS101");
    assert_eq!(req.course_name, "程序设计");
    assert_eq!(req.course_type, CourseType::Required);
    assert_eq!(req.total_hours, 48);
    assert_eq!(req.department, None);
}

#[test]
fn course_code_must_be_upper_alphanumeric() {
    let mut form = course_form();
    form.code = "cs101".to_owned();
    assert_eq!(validate_course_form(&form), Err("课程代码格式不正确"));
    form.code = "CS1".to_owned();
    assert_eq!(validate_course_form(&form), Err("课程代码格式不正确"));
    form.code = "CS-101".to_owned();
    assert_eq!(validate_course_form(&form), Err("课程代码格式不正确"));
}

#[test]
fn credits_and_hours_are_range_checked() {
    let mut form = course_form();
    form.credits = "0.4".to_owned();
    assert_eq!(validate_course_form(&form), Err("学分必须在0.5到10之间"));
    form.credits = "x".to_owned();
    assert_eq!(validate_course_form(&form), Err("学分格式不正确"));

    let mut form = course_form();
    form.total_hours = "0".to_owned();
    assert_eq!(validate_course_form(&form), Err("总学时必须在1到200之间"));
}

#[test]
fn hour_split_must_add_up() {
    let mut form = course_form();
    form.practice_hours = "10".to_owned();
    assert_eq!(validate_course_form(&form), Err("理论学时与实践学时之和必须等于总学时"));

    form.theory_hours = "48".to_owned();
    form.practice_hours = String::new();
    let req = validate_course_form(&form).expect("blank practice hours count as zero");
    assert_eq!(req.practice_hours, 0);
}

#[test]
fn course_type_from_defaults_to_required() {
    assert_eq!(course_type_from("ELECTIVE"), CourseType::Elective);
    assert_eq!(course_type_from("PUBLIC"), CourseType::Public);
    assert_eq!(course_type_from(""), CourseType::Required);
}

#[test]
fn minimal_schedule_form_has_no_time_slot() {
    let req = validate_schedule_form(&schedule_form()).expect("valid form");
    assert_eq!((req.course_id, req.teacher_id, req.semester_id), (1, 2, 3));
    assert_eq!(req.max_students, 60);
    assert_eq!(req.schedule_time, None);
    assert_eq!(req.selection_start_time, None);
}

#[test]
fn schedule_form_requires_ids_and_seat_range() {
    let mut form = schedule_form();
    form.course_id.clear();
    assert_eq!(validate_schedule_form(&form), Err("请选择课程"));

    let mut form = schedule_form();
    form.max_students = "201".to_owned();
    assert_eq!(validate_schedule_form(&form), Err("最大学生数必须在1到200之间"));
}

#[test]
fn schedule_form_builds_time_slot() {
    let mut form = schedule_form();
    form.day_of_week = "3".to_owned();
    form.start_time = "08:00".to_owned();
    form.end_time = "09:40".to_owned();
    let req = validate_schedule_form(&form).expect("valid form");
    assert_eq!(
        req.schedule_time,
        Some(vec![json!({ "dayOfWeek": 3, "startTime": "08:00", "endTime": "09:40" })])
    );

    form.end_time = "07:00".to_owned();
    assert_eq!(validate_schedule_form(&form), Err("下课时间必须晚于上课时间"));
    form.end_time = "25:00".to_owned();
    assert_eq!(validate_schedule_form(&form), Err("上课时间格式不正确"));
    form.day_of_week = "8".to_owned();
    assert_eq!(validate_schedule_form(&form), Err("星期格式不正确"));
}

#[test]
fn selection_window_is_normalized_and_ordered() {
    let mut form = schedule_form();
    form.selection_start = "2024-02-01T08:00".to_owned();
    form.selection_end = "2024-02-10T18:00".to_owned();
    let req = validate_schedule_form(&form).expect("valid form");
    assert_eq!(req.selection_start_time.as_deref(), Some("2024-02-01T08:00:00"));
    assert_eq!(req.selection_end_time.as_deref(), Some("2024-02-10T18:00:00"));

    form.selection_end = "2024-01-10T18:00".to_owned();
    assert_eq!(validate_schedule_form(&form), Err("选课开始时间不能晚于结束时间"));
}

#[test]
fn schedule_status_from_matches_wire_names() {
    assert_eq!(schedule_status_from("OPEN"), Some(ScheduleStatus::Open));
    assert_eq!(schedule_status_from("open"), None);
}
