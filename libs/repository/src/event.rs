use chrono::NaiveDate;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::active_models::{prelude::*, *};
use crate::{IntoResponse, Response};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct EventRepository {
    db: DatabaseConnection,
}

impl EventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<event::Model> for EventEntity {
    fn from(value: event::Model) -> Self {
        Self {
            id: value.id,
            event: value.event,
            date: value.date,
        }
    }
}

impl EventRepository {
    /// Inserts a new event and returns it with its assigned id.
    /// Identical name/date pairs are stored as distinct records.
    pub async fn create(
        &self,
        name: &str,
        date: NaiveDate,
    ) -> Response<EventEntity> {
        let model = event::ActiveModel {
            event: ActiveValue::set(name.to_string()),
            date: ActiveValue::set(date),
            ..Default::default()
        };

        let result = Event::insert(model)
            .exec(&self.db)
            .await
            .into_response("in insert event")?;

        Ok(EventEntity {
            id: result.last_insert_id,
            event: name.to_string(),
            date,
        })
    }

    pub async fn find_all(&self) -> Response<Vec<EventEntity>> {
        let events = Event::find()
            .all(&self.db)
            .await
            .into_response("in find all events")?;

        Ok(events.into_iter().map(EventEntity::from).collect())
    }

    /// Events whose date falls within the inclusive `[start, end]` bound.
    /// A missing bound leaves that side open.
    pub async fn find_in_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Response<Vec<EventEntity>> {
        if start.is_none() && end.is_none() {
            return self.find_all().await;
        }

        let mut query = Event::find();

        if let Some(start) = start {
            query = query.filter(event::Column::Date.gte(start));
        }

        if let Some(end) = end {
            query = query.filter(event::Column::Date.lte(end));
        }

        let events = query
            .all(&self.db)
            .await
            .into_response("in find events in range")?;

        Ok(events.into_iter().map(EventEntity::from).collect())
    }

    pub async fn find_by_date(
        &self,
        date: NaiveDate,
    ) -> Response<Vec<EventEntity>> {
        let events = Event::find()
            .filter(event::Column::Date.eq(date))
            .all(&self.db)
            .await
            .into_response("in find events by date")?;

        Ok(events.into_iter().map(EventEntity::from).collect())
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Response<Option<EventEntity>> {
        let event = Event::find_by_id(id)
            .one(&self.db)
            .await
            .into_response("in find event by id")?;

        Ok(event.map(EventEntity::from))
    }

    /// Returns false when no row with that id existed.
    pub async fn delete_by_id(&self, id: i32) -> Response<bool> {
        let result = Event::delete_by_id(id)
            .exec(&self.db)
            .await
            .into_response("in delete event")?;

        Ok(result.rows_affected > 0)
    }
}
