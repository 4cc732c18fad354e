use alerthub_server::config::ServerConfig;
use alerthub_server::rest::{self, AppState};
use alerthub_server::snapshot::SnapshotWriter;
use alerthub_server::store::AlertStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ServerConfig::from_env();
    let store = AlertStore::new(SnapshotWriter::new(&config.snapshot_path));

    let app = rest::router(AppState { store });
    let rest_addr = config.rest_addr;

    tracing::info!(%rest_addr, snapshot = %config.snapshot_path.display(), "REST server starting");
    let listener = tokio::net::TcpListener::bind(rest_addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
