use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::CalendarEntry;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Calendar not found: {0}")]
    NotFound(String),
    #[error("Rate limit exceeded")]
    RateLimited,
    #[error("Authentication failed")]
    AuthenticationFailed,
}

// Wire shape of an event in the Calendar v3 API; only the fields we
// send or read back.
#[derive(Debug, Serialize, Deserialize)]
struct GoogleEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    summary: Option<String>,
    start: GoogleDateTime,
    end: GoogleDateTime,
    #[serde(rename = "htmlLink", skip_serializing_if = "Option::is_none")]
    html_link: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GoogleDateTime {
    #[serde(rename = "dateTime")]
    date_time: String,
    #[serde(rename = "timeZone")]
    time_zone: String,
}

#[derive(Debug, Clone)]
pub struct CreatedEventInfo {
    pub id: String,
    pub html_link: Option<String>,
}

#[async_trait]
pub trait CalendarApi {
    async fn create_event(
        &self,
        calendar_id: &str,
        entry: &CalendarEntry,
    ) -> Result<CreatedEventInfo, ApiError>;
}

pub struct GoogleCalendarClient {
    base_url: String,
    access_token: String,
    client: reqwest::Client,
}

impl GoogleCalendarClient {
    pub fn new(access_token: String) -> Self {
        Self {
            base_url: "https://www.googleapis.com/calendar/v3".to_string(),
            access_token,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn to_google_event(&self, entry: &CalendarEntry) -> GoogleEvent {
        // naive local timestamp plus an explicit timeZone field, the
        // format the API expects for zone-anchored events
        let fmt = "%Y-%m-%dT%H:%M:%S";
        GoogleEvent {
            id: None,
            summary: Some(entry.summary.clone()),
            start: GoogleDateTime {
                date_time: entry.start.format(fmt).to_string(),
                time_zone: entry.time_zone.clone(),
            },
            end: GoogleDateTime {
                date_time: entry.end.format(fmt).to_string(),
                time_zone: entry.time_zone.clone(),
            },
            html_link: None,
        }
    }
}

#[async_trait]
impl CalendarApi for GoogleCalendarClient {
    async fn create_event(
        &self,
        calendar_id: &str,
        entry: &CalendarEntry,
    ) -> Result<CreatedEventInfo, ApiError> {
        let url = format!("{}/calendars/{}/events", self.base_url, calendar_id);
        let google_event = self.to_google_event(entry);

        tracing::info!("Creating event: {} at {}", entry.summary, entry.start);
        tracing::debug!("POST {} with payload: {:?}", url, google_event);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&google_event)
            .send()
            .await?;

        let status = response.status();
        tracing::info!("Create event response status: {}", status);

        if status == 401 {
            tracing::error!("Authentication failed when creating event");
            return Err(ApiError::AuthenticationFailed);
        }

        if status == 404 {
            tracing::error!("Calendar not found: {}", calendar_id);
            return Err(ApiError::NotFound(calendar_id.to_string()));
        }

        if status == 429 {
            tracing::warn!("Rate limit exceeded");
            return Err(ApiError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await?;
            tracing::error!("Failed to create event. Status: {}, Body: {}", status, body);
            return Err(ApiError::RequestError(format!("Status {}: {}", status, body)));
        }

        let created: GoogleEvent = response.json().await?;
        let id = created.id.unwrap_or_default();
        tracing::info!("Event created successfully with ID: {:?}", id);

        Ok(CreatedEventInfo {
            id,
            html_link: created.html_link,
        })
    }
}
