use chrono::{Days, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

// Posting hours, 24-hour clock. Spread across the day to avoid
// flooding followers when several posts land in the same week.
const BOOKED_DAY_HOUR: u32 = 18; // booked after 6 PM rotates to next day
const ONE_MONTH_HOUR: u32 = 10;
const TWO_WEEK_HOUR: u32 = 9;
const ONE_WEEK_HOUR: u32 = 11;
const THREE_DAY_HOUR: u32 = 12;
const DAY_OF_HOUR: u32 = 8;
const DAY_AFTER_HOUR: u32 = 13;

/// The fixed set of social-media post types a schedule can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostKind {
    Booking,
    EventDay,
    OneMonth,
    TwoWeek,
    OneWeek,
    ThreeDays,
    DayAfter,
}

impl PostKind {
    pub fn label(&self) -> &'static str {
        match self {
            PostKind::Booking => "Booking post",
            PostKind::EventDay => "Event day post",
            PostKind::OneMonth => "One month post",
            PostKind::TwoWeek => "Two week post",
            PostKind::OneWeek => "One week post",
            PostKind::ThreeDays => "Three days post",
            PostKind::DayAfter => "Day after post",
        }
    }
}

/// One planned post: when to publish it and which kind it is.
///
/// Schedules keep insertion order, which is the fixed emission order of
/// [`build_schedule`], not necessarily chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub at: NaiveDateTime,
    pub kind: PostKind,
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind.label(), self.at.format("%Y-%m-%d %H:%M"))
    }
}

fn entry(date: NaiveDate, hour: u32, kind: PostKind) -> ScheduleEntry {
    let at = date
        .and_hms_opt(hour, 0, 0)
        .expect("posting hours are all < 24");
    ScheduleEntry { at, kind }
}

/// Builds the posting schedule for an event.
///
/// Every event gets a booking post on the booking day at 18:00; if the
/// current time is already past 18:00 the booking post rotates to the
/// next day. An event-day post at 08:00 is added unless the event falls
/// on the booking day itself. Public events additionally get reminder
/// posts at fixed offsets around the event date, skipping any that
/// would land before the booking day. Offsets that happen to coincide
/// are kept as-is; nothing is deduplicated.
pub fn build_schedule(
    is_public: bool,
    event_date: NaiveDate,
    now: NaiveDateTime,
) -> Vec<ScheduleEntry> {
    let mut schedule = Vec::new();

    let booking_date = if now.hour() >= BOOKED_DAY_HOUR {
        now.date() + Days::new(1)
    } else {
        now.date()
    };
    schedule.push(entry(booking_date, BOOKED_DAY_HOUR, PostKind::Booking));

    if event_date != booking_date {
        schedule.push(entry(event_date, DAY_OF_HOUR, PostKind::EventDay));
    }

    if is_public {
        // one month normalized to four weeks
        let reminders = [
            (event_date - Days::new(28), ONE_MONTH_HOUR, PostKind::OneMonth),
            (event_date - Days::new(14), TWO_WEEK_HOUR, PostKind::TwoWeek),
            (event_date - Days::new(7), ONE_WEEK_HOUR, PostKind::OneWeek),
            (event_date - Days::new(3), THREE_DAY_HOUR, PostKind::ThreeDays),
            (event_date + Days::new(1), DAY_AFTER_HOUR, PostKind::DayAfter),
        ];
        for (date, hour, kind) in reminders {
            if date >= booking_date {
                schedule.push(entry(date, hour, kind));
            }
        }
    }

    schedule
}
