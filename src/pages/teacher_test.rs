use super::*;

#[test]
fn roster_link_carries_schedule_id() {
    assert_eq!(roster_link(42), "/teacher/students?scheduleId=42");
}

#[test]
fn parse_schedule_id_accepts_positive_ids_only() {
    assert_eq!(parse_schedule_id(Some("42")), Some(42));
    assert_eq!(parse_schedule_id(Some(" 7 ")), Some(7));
    assert_eq!(parse_schedule_id(Some("0")), None);
    assert_eq!(parse_schedule_id(Some("abc")), None);
    assert_eq!(parse_schedule_id(None), None);
}
