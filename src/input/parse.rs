use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateInputError {
    #[error("dates must look like mm/dd/yyyy")]
    InvalidFormat,
    #[error("event date must be today or later")]
    PastDate,
}

/// Interprets a yes/no answer. An empty answer means yes; anything
/// starting with 'n' or 'N' means no; everything else means yes.
pub fn parse_yes_no(input: &str) -> bool {
    match input.trim().chars().next() {
        Some('n') | Some('N') => false,
        _ => true,
    }
}

/// Parses an mm/dd/yyyy event date and rejects dates before `today`.
pub fn parse_event_date(input: &str, today: NaiveDate) -> Result<NaiveDate, DateInputError> {
    let date = NaiveDate::parse_from_str(input.trim(), "%m/%d/%Y")
        .map_err(|_| DateInputError::InvalidFormat)?;
    if date < today {
        return Err(DateInputError::PastDate);
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    #[test]
    fn empty_answer_defaults_to_yes() {
        assert!(parse_yes_no(""));
        assert!(parse_yes_no("   "));
    }

    #[test]
    fn answers_starting_with_n_mean_no() {
        assert!(!parse_yes_no("n"));
        assert!(!parse_yes_no("No"));
        assert!(!parse_yes_no("  nope"));
    }

    #[test]
    fn other_answers_mean_yes() {
        assert!(parse_yes_no("y"));
        assert!(parse_yes_no("Yes"));
        assert!(parse_yes_no("sure"));
    }

    #[test]
    fn valid_future_date_parses() {
        let date = parse_event_date("04/11/2026", today()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 4, 11).unwrap());
    }

    #[test]
    fn todays_date_is_accepted() {
        let date = parse_event_date("03/02/2026", today()).unwrap();
        assert_eq!(date, today());
    }

    #[test]
    fn past_date_is_rejected() {
        let result = parse_event_date("03/01/2026", today());
        assert_eq!(result, Err(DateInputError::PastDate));
    }

    #[test]
    fn iso_format_is_rejected() {
        let result = parse_event_date("2026-04-11", today());
        assert_eq!(result, Err(DateInputError::InvalidFormat));
    }

    #[test]
    fn garbage_is_rejected() {
        let result = parse_event_date("next tuesday", today());
        assert_eq!(result, Err(DateInputError::InvalidFormat));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let date = parse_event_date("  04/11/2026  ", today()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 4, 11).unwrap());
    }
}
