// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod material_ingestion_service;
pub mod material_query_service;

#[cfg(test)]
mod material_ingestion_service_tests;

pub use material_ingestion_service::{MaterialIngestionService, MaterialPayload, UploadedFile};

pub use material_query_service::MaterialQueryService;
