use std::net::SocketAddr;

use axum::Router;
use todo_api::application::todo_service::TodoServiceImpl;
use todo_api::config::{Config, StoreConfig};
use todo_api::domain::repository::TodoRepository;
use todo_api::http::routing::{self, todos};
use todo_api::infrastructure::{memory_repo::InMemoryTodoRepository, mongo_repo::MongoTodoRepository};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    let todos_router = match &config.store {
        StoreConfig::Memory => {
            tracing::info!("using in-memory todo store");
            build_todos_router(InMemoryTodoRepository::new()).await?
        }
        StoreConfig::Mongo { uri, database, collection } => {
            let repo = MongoTodoRepository::connect(uri, database, collection).await?;
            build_todos_router(repo).await?
        }
    };
    if let Some(dir) = &config.static_dir {
        tracing::info!(dir = %dir.display(), "serving static assets");
    }
    let router = routing::app(todos_router, config.static_dir.as_deref());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn build_todos_router<R: TodoRepository + Clone>(repo: R) -> anyhow::Result<Router> {
    repo.init().await?;
    let service = TodoServiceImpl::new(repo);
    Ok(todos::router(todos::AppState { service }))
}

async fn shutdown_signal() {
    use tokio::signal::ctrl_c;
    let _ = ctrl_c().await;
    tracing::info!("shutdown");
}
