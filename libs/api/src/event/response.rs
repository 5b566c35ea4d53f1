use chrono::NaiveDate;
use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct EventResp {
    pub id: i32,
    pub event: String,
    pub date: NaiveDate,
}

impl From<EventEntity> for EventResp {
    fn from(value: EventEntity) -> Self {
        Self {
            id: value.id,
            event: value.event,
            date: value.date,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct CreateEventResp {
    pub message: String,
    pub event: String,
    pub date: String,
}

#[derive(Serialize, ToSchema)]
pub struct MessageResp {
    pub message: String,
}
