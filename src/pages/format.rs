//! Display helpers shared by the course pages.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use serde::Deserialize;
use serde_json::Value;

const WEEKDAYS: [&str; 7] = ["周一", "周二", "周三", "周四", "周五", "周六", "周日"];

/// One weekly meeting of a course schedule.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// 1 = Monday .. 7 = Sunday.
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
}

impl TimeSlot {
    pub fn weekday(&self) -> &'static str {
        weekday_label(self.day_of_week)
    }

    /// `08:00-09:40`
    pub fn span(&self) -> String {
        format!("{}-{}", short_time(&self.start_time), short_time(&self.end_time))
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.weekday(), self.span())
    }
}

/// 1 = 周一 .. 7 = 周日; anything else renders as `?`.
pub fn weekday_label(day_of_week: u8) -> &'static str {
    usize::from(day_of_week)
        .checked_sub(1)
        .and_then(|i| WEEKDAYS.get(i))
        .copied()
        .unwrap_or("?")
}

/// `08:00:00` and `08:00` both render as `08:00`.
fn short_time(t: &str) -> &str {
    t.get(..5).unwrap_or(t)
}

/// Parse the free-form `scheduleTime` list, skipping entries that are not
/// time slots.
pub fn time_slots(raw: Option<&[Value]>) -> Vec<TimeSlot> {
    raw.unwrap_or_default()
        .iter()
        .filter_map(|v| TimeSlot::deserialize(v).ok())
        .filter(|s| (1..=7).contains(&s.day_of_week))
        .collect()
}

pub fn slots_label(raw: Option<&[Value]>) -> String {
    let slots = time_slots(raw);
    if slots.is_empty() {
        return "待定".to_owned();
    }
    slots.iter().map(TimeSlot::label).collect::<Vec<_>>().join("，")
}

pub fn credits_label(credits: f64) -> String {
    if credits.fract() == 0.0 {
        format!("{credits:.0}")
    } else {
        format!("{credits:.1}")
    }
}

pub fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_owned()
}
