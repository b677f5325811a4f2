pub mod calendar;
pub mod input;
pub mod schedule;
pub mod storage;
pub mod sync;

pub use calendar::CalendarEntry;
pub use input::EventDetails;
pub use schedule::{PostKind, ScheduleEntry, build_schedule};
