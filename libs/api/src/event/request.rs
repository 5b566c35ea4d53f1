use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::ApiError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Deserialize, IntoParams)]
pub struct GetEventsParam {
    /// Inclusive lower bound on the event date, `YYYY-MM-DD`.
    pub start_time: Option<String>,
    /// Inclusive upper bound on the event date, `YYYY-MM-DD`.
    pub end_time: Option<String>,
}

impl GetEventsParam {
    /// A missing bound leaves that side of the range open.
    pub fn validate(
        self,
    ) -> Result<(Option<NaiveDate>, Option<NaiveDate>), ApiError> {
        let start = parse_bound(self.start_time, "start_time")?;
        let end = parse_bound(self.end_time, "end_time")?;

        Ok((start, end))
    }
}

fn parse_bound(
    value: Option<String>,
    field: &str,
) -> Result<Option<NaiveDate>, ApiError> {
    let Some(value) = value else {
        return Ok(None);
    };

    NaiveDate::parse_from_str(&value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| {
            ApiError::Validation(format!(
                "The {field} must be in the format YYYY-MM-DD!"
            ))
        })
}

#[derive(Deserialize, ToSchema)]
pub struct CreateEventBody {
    pub event: Option<String>,
    pub date: Option<String>,
}

/// A create request that passed validation.
pub struct NewEvent {
    pub event: String,
    pub date: NaiveDate,
}

impl CreateEventBody {
    pub fn validate(self) -> Result<NewEvent, ApiError> {
        let event = match self.event {
            Some(event) if !event.trim().is_empty() => event,
            _ => {
                return Err(ApiError::Validation(
                    "The event name is required!".to_string(),
                ))
            }
        };

        let date = self
            .date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, DATE_FORMAT).ok())
            .ok_or_else(|| {
                ApiError::Validation(
                    "The event date with the correct format is required! \
                     The correct format is YYYY-MM-DD!"
                        .to_string(),
                )
            })?;

        Ok(NewEvent { event, date })
    }
}
