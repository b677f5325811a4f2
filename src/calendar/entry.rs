use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::schedule::ScheduleEntry;

// Each post blocks out a half-hour slot on the calendar.
const POST_WINDOW_MINUTES: i64 = 30;

/// A calendar event payload: the minimal fields the remote service
/// needs to show a reminder slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub summary: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub time_zone: String,
}

impl CalendarEntry {
    pub fn from_schedule(entry: &ScheduleEntry, event_name: &str, time_zone: &str) -> Self {
        Self {
            summary: format!("{} for {}", entry.kind.label(), event_name),
            start: entry.at,
            end: entry.at + Duration::minutes(POST_WINDOW_MINUTES),
            time_zone: time_zone.to_string(),
        }
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::PostKind;
    use chrono::NaiveDate;

    fn schedule_entry() -> ScheduleEntry {
        ScheduleEntry {
            at: NaiveDate::from_ymd_opt(2026, 4, 11)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            kind: PostKind::EventDay,
        }
    }

    #[test]
    fn summary_combines_label_and_event_name() {
        let entry = CalendarEntry::from_schedule(&schedule_entry(), "Spring Gala", "America/Chicago");

        assert_eq!(entry.summary, "Event day post for Spring Gala");
    }

    #[test]
    fn entry_blocks_a_thirty_minute_window() {
        let entry = CalendarEntry::from_schedule(&schedule_entry(), "Spring Gala", "America/Chicago");

        assert_eq!(entry.duration_minutes(), 30);
        assert_eq!(entry.start, schedule_entry().at);
    }

    #[test]
    fn time_zone_is_carried_through() {
        let entry = CalendarEntry::from_schedule(&schedule_entry(), "Spring Gala", "Europe/London");

        assert_eq!(entry.time_zone, "Europe/London");
    }
}
