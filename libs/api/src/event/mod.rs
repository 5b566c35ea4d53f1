use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Local;
use repository::Repository;

pub mod request;
pub mod response;

use crate::{
    response::{ApiResponse, IntoApiResponse},
    ApiError,
};

use self::{
    request::{CreateEventBody, GetEventsParam, DATE_FORMAT},
    response::{CreateEventResp, EventResp, MessageResp},
};

const NOT_FOUND_MESSAGE: &str = "The event doesn't exist!";

#[utoipa::path(
    get,
    path = "/event",
    params(GetEventsParam),
    responses(
        (status = 200, description = "Events within the requested range", body = Vec<EventResp>),
        (status = 400, description = "Malformed range parameter")
    ),
    tag = "event"
)]
pub async fn get_events(
    State(repo): State<Repository>,
    Query(params): Query<GetEventsParam>,
) -> ApiResponse<Json<Vec<EventResp>>> {
    let (start, end) = params.validate()?;

    let events =
        repo.event.find_in_range(start, end).await.into_response()?;

    Ok(Json(events.into_iter().map(EventResp::from).collect()))
}

#[utoipa::path(
    post,
    path = "/event",
    request_body = CreateEventBody,
    responses(
        (status = 200, description = "Event stored", body = CreateEventResp),
        (status = 400, description = "Missing or malformed field")
    ),
    tag = "event"
)]
pub async fn create_event(
    State(repo): State<Repository>,
    Json(body): Json<CreateEventBody>,
) -> ApiResponse<Json<CreateEventResp>> {
    let new_event = body.validate()?;

    let created = repo
        .event
        .create(&new_event.event, new_event.date)
        .await
        .into_response()?;

    Ok(Json(CreateEventResp {
        message: "The event has been added!".to_string(),
        event: created.event,
        date: created.date.format(DATE_FORMAT).to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/event/today",
    responses(
        (status = 200, description = "Events dated today", body = Vec<EventResp>),
        (status = 400, description = "No events today")
    ),
    tag = "event"
)]
pub async fn get_today_events(
    State(repo): State<Repository>,
) -> ApiResponse<Json<Vec<EventResp>>> {
    let today = Local::now().date_naive();

    let events = repo.event.find_by_date(today).await.into_response()?;

    if events.is_empty() {
        return Err(ApiError::NoEventsToday);
    }

    Ok(Json(events.into_iter().map(EventResp::from).collect()))
}

#[utoipa::path(
    get,
    path = "/event/{id}",
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "The event", body = EventResp),
        (status = 404, description = "Unknown id", body = MessageResp)
    ),
    tag = "event"
)]
pub async fn get_event(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<EventResp>> {
    let event = repo.event.find_by_id(id).await.into_response()?;

    let Some(event) = event else {
        return Err(ApiError::NotFound(NOT_FOUND_MESSAGE.to_string()));
    };

    Ok(Json(EventResp::from(event)))
}

#[utoipa::path(
    delete,
    path = "/event/{id}",
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event removed", body = MessageResp),
        (status = 404, description = "Unknown id", body = MessageResp)
    ),
    tag = "event"
)]
pub async fn delete_event(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<MessageResp>> {
    let deleted = repo.event.delete_by_id(id).await.into_response()?;

    if !deleted {
        return Err(ApiError::NotFound(NOT_FOUND_MESSAGE.to_string()));
    }

    Ok(Json(MessageResp {
        message: "The event has been deleted!".to_string(),
    }))
}

#[cfg(test)]
mod test {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    async fn app() -> (TempDir, Router) {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("event.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        let repository = repository::init_repository(&url).await.unwrap();
        let router = crate::serve(repository).await.unwrap();
        (dir, router)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_event(event: &str, date: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/event")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({ "event": event, "date": date }).to_string(),
            ))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn create_then_fetch_by_id() {
        let (_dir, app) = app().await;

        let response = app
            .clone()
            .oneshot(post_event("Meeting", "2024-03-15"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["message"], "The event has been added!");
        assert_eq!(body["event"], "Meeting");
        assert_eq!(body["date"], "2024-03-15");

        let response = app.oneshot(get("/event/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(
            body,
            json!({ "id": 1, "event": "Meeting", "date": "2024-03-15" })
        );
    }

    #[tokio::test]
    async fn list_without_query_returns_all() {
        let (_dir, app) = app().await;

        for (event, date) in
            [("a", "2020-01-01"), ("b", "2024-06-15"), ("c", "2030-12-31")]
        {
            app.clone().oneshot(post_event(event, date)).await.unwrap();
        }

        let response = app.oneshot(get("/event")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn list_filters_by_inclusive_range() {
        let (_dir, app) = app().await;

        for (event, date) in [
            ("lower", "2024-01-01"),
            ("upper", "2024-12-31"),
            ("outside", "2025-01-01"),
        ] {
            app.clone().oneshot(post_event(event, date)).await.unwrap();
        }

        let response = app
            .oneshot(get("/event?start_time=2024-01-01&end_time=2024-12-31"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let events = body.as_array().unwrap();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e["event"] != "outside"));
    }

    #[tokio::test]
    async fn list_rejects_malformed_range_param() {
        let (_dir, app) = app().await;

        let response =
            app.oneshot(get("/event?start_time=yesterday")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn today_without_events_returns_marker() {
        let (_dir, app) = app().await;

        let response = app.oneshot(get("/event/today")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "data": "There are no events for today!" }));
    }

    #[tokio::test]
    async fn today_lists_events_dated_today() {
        let (_dir, app) = app().await;

        let today = chrono::Local::now().date_naive().format("%Y-%m-%d");
        app.clone()
            .oneshot(post_event("Standup", &today.to_string()))
            .await
            .unwrap();

        let response = app.oneshot(get("/event/today")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["event"], "Standup");
    }

    #[tokio::test]
    async fn missing_date_creates_nothing() {
        let (_dir, app) = app().await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/event")
                    .header("content-type", "application/json")
                    .body(Body::from(json!({ "event": "Meeting" }).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app.oneshot(get("/event")).await.unwrap();
        let body = body_json(response).await;
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_id_yields_not_found_message() {
        let (_dir, app) = app().await;

        app.clone()
            .oneshot(post_event("Keeper", "2024-03-15"))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/event/9999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "message": "The event doesn't exist!" }));

        let response = app.clone().oneshot(get("/event/9999")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // nothing was deleted
        let response = app.oneshot(get("/event")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_the_event() {
        let (_dir, app) = app().await;

        app.clone()
            .oneshot(post_event("Doomed", "2024-03-15"))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/event/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "message": "The event has been deleted!" }));

        let response = app.oneshot(get("/event/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn health_and_fallback_routes() {
        let (_dir, app) = app().await;

        let response =
            app.clone().oneshot(get("/healthz")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get("/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
