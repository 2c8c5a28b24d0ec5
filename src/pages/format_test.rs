use super::*;
use serde_json::json;

#[test]
fn time_slots_parse_known_entries_and_skip_the_rest() {
    let raw = vec![
        json!({ "dayOfWeek": 1, "startTime": "08:00", "endTime": "09:40" }),
        json!({ "dayOfWeek": 9, "startTime": "08:00", "endTime": "09:40" }),
        json!("garbage"),
        json!({ "dayOfWeek": 3, "startTime": "14:00:00", "endTime": "15:40:00" }),
    ];
    let slots = time_slots(Some(&raw));
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].label(), "周一 08:00-09:40");
    assert_eq!(slots[1].label(), "周三 14:00-15:40");
}

#[test]
fn slots_label_joins_or_reports_pending() {
    assert_eq!(slots_label(None), "待定");
    assert_eq!(slots_label(Some(&[])), "待定");
    let raw = vec![
        json!({ "dayOfWeek": 2, "startTime": "10:00", "endTime": "11:40" }),
        json!({ "dayOfWeek": 7, "startTime": "19:00", "endTime": "20:40" }),
    ];
    assert_eq!(slots_label(Some(&raw)), "周二 10:00-11:40，周日 19:00-20:40");
}

#[test]
fn credits_label_drops_trailing_zero() {
    assert_eq!(credits_label(3.0), "3");
    assert_eq!(credits_label(2.5), "2.5");
}

#[test]
fn or_dash_fills_missing_values() {
    assert_eq!(or_dash(None), "-");
    assert_eq!(or_dash(Some("")), "-");
    assert_eq!(or_dash(Some("A101")), "A101");
}

#[test]
fn weekday_label_rejects_out_of_range_days() {
    assert_eq!(weekday_label(1), "周一");
    assert_eq!(weekday_label(7), "周日");
    assert_eq!(weekday_label(0), "?");
    assert_eq!(weekday_label(8), "?");
}
