// src/application/state.rs

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::infrastructure::FileStorage;
use crate::repositories::{
    MaterialRepository, SqliteMaterialRepository, SqliteTopicRepository, TopicRepository,
};
use crate::services::{MaterialIngestionService, MaterialQueryService};

/// Application state shared by every handler.
/// All fields are Arc-wrapped; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub ingestion_service: Arc<MaterialIngestionService>,
    pub query_service: Arc<MaterialQueryService>,
}

impl AppState {
    /// Wire repositories and services over a pool and a storage backend
    pub fn build(pool: Arc<ConnectionPool>, storage: Arc<dyn FileStorage>) -> Self {
        // The type `Arc<dyn Trait>` matches the service constructor signatures exactly.
        let material_repo: Arc<dyn MaterialRepository> =
            Arc::new(SqliteMaterialRepository::new(pool.clone()));
        let topic_repo: Arc<dyn TopicRepository> = Arc::new(SqliteTopicRepository::new(pool));

        let ingestion_service = Arc::new(MaterialIngestionService::new(
            material_repo.clone(),
            topic_repo.clone(),
            storage,
        ));
        let query_service = Arc::new(MaterialQueryService::new(material_repo, topic_repo));

        Self {
            ingestion_service,
            query_service,
        }
    }
}
