// src/lib.rs
// Topic Materials - learning material storage for course topics
//
// Architecture:
// - Domain-centric: material rules live in the domain layer
// - Services orchestrate repositories and file storage
// - Explicit: no implicit behavior, no magic
// - Application layer: HTTP boundary (axum)

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_material, Material, MaterialDraft, MaterialId, MaterialType, NewMaterial, Topic,
    TopicId, TypeResolution,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    MaterialRepository, SqliteMaterialRepository, SqliteTopicRepository, TopicRepository,
};

// ============================================================================
// PUBLIC API - Infrastructure
// ============================================================================

pub use infrastructure::{FileStorage, LocalFileStorage};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{MaterialIngestionService, MaterialPayload, MaterialQueryService, UploadedFile};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{build_router, AppState};
pub use config::ServerConfig;
