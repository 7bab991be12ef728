use htmx_todo::{
    application::todo_service::TodoServiceImpl,
    config::Config,
    http::routing::{self, todos},
    infrastructure::memory_repo::InMemoryTodoRepository,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    // Lives as long as the process; nothing is persisted.
    let repo = InMemoryTodoRepository::new();
    let service = TodoServiceImpl::new(repo);
    let todos_router = todos::router(todos::AppState { service, htmx_src: config.htmx_src.clone() });
    let router = routing::app(todos_router);

    let addr = config.bind_addr;
    tracing::info!(%addr, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal::ctrl_c;
    let _ = ctrl_c().await;
    tracing::info!("shutdown");
}
