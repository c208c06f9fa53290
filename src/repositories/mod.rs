// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls
// - Explicit SQL only

pub mod material_repository;
pub mod topic_repository;

pub use material_repository::{MaterialRepository, SqliteMaterialRepository};
pub use topic_repository::{SqliteTopicRepository, TopicRepository};

#[cfg(test)]
pub use material_repository::MockMaterialRepository;
#[cfg(test)]
pub use topic_repository::MockTopicRepository;
