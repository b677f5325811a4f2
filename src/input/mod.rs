pub mod parse;
pub mod prompts;

pub use parse::{DateInputError, parse_event_date, parse_yes_no};
pub use prompts::{EventDetails, collect_event_details};
