use chrono::{Local, NaiveDate};
use inquire::{InquireError, Text};

use super::parse::{DateInputError, parse_event_date, parse_yes_no};

/// Everything the user tells us about an event, collected once and
/// then handed to the schedule builder.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetails {
    pub is_public: bool,
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
}

/// Walks the user through the event questions. Reprompts until the
/// date is valid; private events always get the name "Private event".
pub fn collect_event_details() -> Result<EventDetails, InquireError> {
    let answer = Text::new("Is this a public event? [Y/n]").prompt()?;
    let is_public = parse_yes_no(&answer);

    let date = prompt_event_date(Local::now().date_naive())?;

    let location = Text::new("What city is the event in?").prompt()?;

    let name = if is_public {
        Text::new("What is the event name?").prompt()?
    } else {
        "Private event".to_string()
    };

    Ok(EventDetails { is_public, name, date, location })
}

fn prompt_event_date(today: NaiveDate) -> Result<NaiveDate, InquireError> {
    loop {
        let raw = Text::new("What is the event date? (mm/dd/yyyy)").prompt()?;
        match parse_event_date(&raw, today) {
            Ok(date) => return Ok(date),
            Err(DateInputError::PastDate) => {
                println!("Event date must be today or later!");
            }
            Err(DateInputError::InvalidFormat) => {}
        }
    }
}
