//! Calendar backend collaborator: directory resolution, free/busy queries
//! and meeting creation over JSON/HTTP.
//!
//! All calls are synchronous and made once per run; a single failure aborts
//! the session, so there is no retry machinery here. Timestamps on the wire
//! are wall-clock local time (`2026-08-06T09:30:00`) — the whole search
//! happens in the viewer's timezone.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use slot_engine::BusyInterval;
use thiserror::Error;

/// Wire timestamp format for query parameters.
const WIRE_TIME: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned {status} during {operation}")]
    Status {
        operation: &'static str,
        status: reqwest::StatusCode,
    },
}

/// A resolvable directory entry that may represent a bookable room resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DirectoryEntry {
    pub email: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// The calendar service the tool talks to. One method per backend round
/// trip; everything above this trait works on plain data.
pub trait CalendarBackend {
    /// Directory lookup, one query per prefix, results concatenated.
    fn resolve_room_directory(
        &self,
        prefixes: &[String],
    ) -> Result<Vec<DirectoryEntry>, BackendError>;

    /// Free/busy query for one room over one day.
    fn fetch_busy_intervals(
        &self,
        room_email: &str,
        range_start: NaiveDateTime,
        range_end: NaiveDateTime,
    ) -> Result<Vec<BusyInterval>, BackendError>;

    /// Book the room and notify attendees.
    fn create_meeting(
        &self,
        room_email: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        subject: &str,
    ) -> Result<(), BackendError>;
}

#[derive(Debug, Deserialize)]
struct FreeBusyResponse {
    busy: Vec<BusyInterval>,
}

#[derive(Debug, Serialize)]
struct MeetingRequest<'a> {
    room_email: &'a str,
    organizer: &'a str,
    start: NaiveDateTime,
    end: NaiveDateTime,
    subject: &'a str,
}

/// Blocking JSON/HTTP client with basic auth.
pub struct HttpCalendarClient {
    http: reqwest::blocking::Client,
    base_url: String,
    username: String,
    password: String,
}

impl HttpCalendarClient {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::blocking::Client::new(),
            base_url,
            username: username.into(),
            password: password.into(),
        }
    }

    fn get(&self, url: &str) -> reqwest::blocking::RequestBuilder {
        self.http
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
    }
}

impl CalendarBackend for HttpCalendarClient {
    fn resolve_room_directory(
        &self,
        prefixes: &[String],
    ) -> Result<Vec<DirectoryEntry>, BackendError> {
        let url = format!("{}/directory/resolve", self.base_url);
        let mut entries = Vec::new();

        for prefix in prefixes {
            tracing::debug!(%prefix, "resolving directory entries");
            let response = self.get(&url).query(&[("prefix", prefix.as_str())]).send()?;
            if !response.status().is_success() {
                return Err(BackendError::Status {
                    operation: "directory resolution",
                    status: response.status(),
                });
            }
            let batch: Vec<DirectoryEntry> = response.json()?;
            entries.extend(batch);
        }

        Ok(entries)
    }

    fn fetch_busy_intervals(
        &self,
        room_email: &str,
        range_start: NaiveDateTime,
        range_end: NaiveDateTime,
    ) -> Result<Vec<BusyInterval>, BackendError> {
        let url = format!("{}/rooms/{}/freebusy", self.base_url, room_email);
        tracing::debug!(room = %room_email, "fetching free/busy");

        let response = self
            .get(&url)
            .query(&[
                ("start", range_start.format(WIRE_TIME).to_string()),
                ("end", range_end.format(WIRE_TIME).to_string()),
            ])
            .send()?;
        if !response.status().is_success() {
            return Err(BackendError::Status {
                operation: "free/busy query",
                status: response.status(),
            });
        }

        let body: FreeBusyResponse = response.json()?;
        Ok(body.busy)
    }

    fn create_meeting(
        &self,
        room_email: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        subject: &str,
    ) -> Result<(), BackendError> {
        let url = format!("{}/meetings", self.base_url);
        tracing::debug!(room = %room_email, %subject, "creating meeting");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(&MeetingRequest {
                room_email,
                organizer: &self.username,
                start,
                end,
                subject,
            })
            .send()?;
        if !response.status().is_success() {
            return Err(BackendError::Status {
                operation: "meeting creation",
                status: response.status(),
            });
        }

        Ok(())
    }
}
