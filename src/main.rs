// src/main.rs

use std::sync::Arc;

use anyhow::Context;

use topic_materials::application::{build_router, AppState};
use topic_materials::config::ServerConfig;
use topic_materials::db::{
    create_connection_pool, get_connection, get_database_stats, initialize_database,
    verify_database_integrity,
};
use topic_materials::infrastructure::{FileStorage, LocalFileStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info")),
        )
        .init();

    // 1. CONFIGURATION
    let config = ServerConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        db_path = %config.db_path.display(),
        upload_dir = %config.upload_dir.display(),
        max_upload_bytes = config.max_upload_bytes,
        "Configuration loaded"
    );

    // 2. DATABASE
    let pool = Arc::new(
        create_connection_pool(&config.db_path).context("failed to open the database")?,
    );
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn).context("failed to initialize the schema")?;

        verify_database_integrity(&conn)
            .with_context(|| format!("integrity check failed: {}", config.db_path.display()))?;

        let stats = get_database_stats(&conn)?;
        tracing::info!(
            topics = stats.topic_count,
            materials = stats.material_count,
            size_bytes = stats.size_bytes,
            "Database ready"
        );
    }

    // 3. STORAGE
    let storage: Arc<dyn FileStorage> = Arc::new(
        LocalFileStorage::new(config.upload_dir.clone())
            .context("failed to prepare the upload directory")?,
    );

    // 4. SERVICES + ROUTER
    let state = AppState::build(pool, storage);
    let app = build_router(state, &config.upload_dir, config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!("topic-materials listening on {}", config.bind);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
