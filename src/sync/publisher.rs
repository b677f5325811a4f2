use thiserror::Error;

use crate::calendar::CalendarEntry;
use crate::schedule::ScheduleEntry;
use crate::storage::config::Config;
use crate::sync::google_api::{ApiError, CalendarApi, GoogleCalendarClient};
use crate::sync::google_auth::{AuthError, GoogleAuthenticator};

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Authentication error: {0}")]
    AuthError(#[from] AuthError),
    #[error("API error: {0}")]
    ApiError(#[from] ApiError),
}

/// Pushes a posting schedule to the remote calendar, one create call
/// per entry, strictly in order. The first failure wins; entries
/// already created stay on the calendar.
pub struct Publisher {
    config: Config,
    auth: GoogleAuthenticator,
}

impl Publisher {
    pub fn new(config: Config) -> Self {
        let auth = GoogleAuthenticator::new(config.clone());
        Self { config, auth }
    }

    pub async fn publish(
        &mut self,
        schedule: &[ScheduleEntry],
        event_name: &str,
    ) -> Result<usize, PublishError> {
        let token = self.auth.get_valid_token().await?;
        let client = GoogleCalendarClient::new(token.access_token);

        let calendar_id = &self.config.calendar.id;
        let time_zone = &self.config.calendar.time_zone;

        let mut created = 0;
        for entry in schedule {
            let payload = CalendarEntry::from_schedule(entry, event_name, time_zone);
            let info = client.create_event(calendar_id, &payload).await?;
            tracing::info!("Created '{}' as event {}", payload.summary, info.id);
            created += 1;
        }

        Ok(created)
    }
}
