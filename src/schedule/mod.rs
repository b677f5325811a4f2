pub mod builder;

pub use builder::{PostKind, ScheduleEntry, build_schedule};
