use axum::{routing::get, Router};
use repository::Repository;
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod event;
pub mod healthz;
pub mod not_found;
mod response;

#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    NotFound(String),
    NoEventsToday,
    Server(String),
}

pub async fn serve(repository: Repository) -> anyhow::Result<Router> {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            event::get_events,
            event::create_event,
            event::get_today_events,
            event::get_event,
            event::delete_event,
        ),
        components(schemas(
            event::request::CreateEventBody,
            event::response::EventResp,
            event::response::CreateEventResp,
            event::response::MessageResp,
        )),
        tags(
            (name = "event", description = "Calendar event management API")
        )
    )]
    struct ApiDoc;

    info!(task = "start api serving");

    // events
    let event_router = Router::new()
        .route("/", get(event::get_events).post(event::create_event))
        .route("/today", get(event::get_today_events))
        .route("/:id", get(event::get_event).delete(event::delete_event))
        .fallback(not_found::get_404)
        .with_state(repository.clone());

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .route("/healthz", get(healthz::get_health))
        .nest("/event", event_router)
        .layer(CorsLayer::permissive())
        .fallback(not_found::get_404);

    Ok(router)
}
