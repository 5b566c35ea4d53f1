use tracing::info;

const DEFAULT_BIND: &str = "127.0.0.1:5000";
const DEFAULT_DATABASE_URL: &str = "sqlite://event.db?mode=rwc";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let db_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let repository = repository::init_repository(&db_url).await?;

    let router = api::serve(repository).await?;

    // an optional single `host:port` argument overrides the default bind
    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_BIND.to_string());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(task = "start server", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
