// src/services/material_ingestion_service.rs
//
// Material Ingestion Service - creation of new materials
//
// CRITICAL RULES:
// - Three entry points, each with its own preconditions
// - Every path ends in persist_with_topic (topic lookup, validation, insert)
// - Upload never rejects an unknown type name; it falls back to PDF
// - Direct payloads must carry a type; a missing one is rejected
// - Upload input (bytes, title) is checked before storage is touched
// - A stored file is NOT removed if the insert fails afterwards

use std::sync::Arc;

use crate::domain::material::{
    validate_material, validate_title, Material, MaterialType, NewMaterial,
};
use crate::domain::topic::TopicId;
use crate::error::{AppError, AppResult};
use crate::infrastructure::FileStorage;
use crate::repositories::{MaterialRepository, TopicRepository};

/// Type name the PDF upload shorthand feeds into the generic upload
const PDF_TYPE_NAME: &str = "PDF";

/// Name handed to storage when the client sent none
const UNNAMED_UPLOAD: &str = "upload";

/// Raw file received from a client
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

/// Caller-built material for the direct-payload path
#[derive(Debug, Clone)]
pub struct MaterialPayload {
    pub title: String,
    pub material_type: Option<MaterialType>,
    pub content_url: String,
}

pub struct MaterialIngestionService {
    material_repo: Arc<dyn MaterialRepository>,
    topic_repo: Arc<dyn TopicRepository>,
    storage: Arc<dyn FileStorage>,
}

impl MaterialIngestionService {
    pub fn new(
        material_repo: Arc<dyn MaterialRepository>,
        topic_repo: Arc<dyn TopicRepository>,
        storage: Arc<dyn FileStorage>,
    ) -> Self {
        Self {
            material_repo,
            topic_repo,
            storage,
        }
    }

    /// Store an uploaded file and record it as a material of the topic.
    ///
    /// `raw_type` is resolved case-insensitively; unknown names become PDF.
    /// The file lands in the folder of the resolved type (`pdfs`, `videos`, ...).
    pub fn upload_material(
        &self,
        topic_id: TopicId,
        file: UploadedFile,
        title: String,
        raw_type: &str,
    ) -> AppResult<Material> {
        // 1. Reject bad input before anything is written
        if file.bytes.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }
        validate_title(&title)?;

        // 2. Resolve type, lenient
        let resolution = MaterialType::resolve(raw_type);
        if resolution.fell_back {
            tracing::warn!(
                raw_type,
                fallback = %resolution.material_type,
                "Unrecognized material type, using fallback"
            );
        }
        let material_type = resolution.material_type;

        // 3. Delegate storage
        let folder = material_type.storage_folder();
        let file_name = file.file_name.as_deref().unwrap_or(UNNAMED_UPLOAD);
        let locator = self
            .storage
            .store(&file.bytes, &folder, file_name)
            .map_err(|e| {
                tracing::error!(topic_id, %folder, error = %e, "Failed to store uploaded file");
                e
            })?;

        tracing::debug!(topic_id, %locator, size = file.bytes.len(), "Stored uploaded file");

        // 4. Build and persist
        let material = NewMaterial::new(title, material_type, locator.clone());
        self.persist_with_topic(topic_id, material).map_err(|e| {
            tracing::warn!(
                topic_id,
                %locator,
                error = %e,
                "Material not persisted, stored file is orphaned"
            );
            e
        })
    }

    /// PDF-only upload, kept for older clients
    pub fn upload_pdf(
        &self,
        topic_id: TopicId,
        file: UploadedFile,
        title: String,
    ) -> AppResult<Material> {
        self.upload_material(topic_id, file, title, PDF_TYPE_NAME)
    }

    /// Record an external link. The URL is kept verbatim, no format check.
    pub fn add_url_material(
        &self,
        topic_id: TopicId,
        title: String,
        url: String,
    ) -> AppResult<Material> {
        let material = NewMaterial::new(title, MaterialType::Url, url);
        self.persist_with_topic(topic_id, material)
    }

    /// Record a material the caller fully built.
    ///
    /// CRITICAL: a missing type is a validation error, never defaulted
    pub fn add_material(&self, topic_id: TopicId, payload: MaterialPayload) -> AppResult<Material> {
        let material_type = payload
            .material_type
            .ok_or_else(|| AppError::Validation("materialType is required".to_string()))?;

        let material = NewMaterial::new(payload.title, material_type, payload.content_url);
        self.persist_with_topic(topic_id, material)
    }

    /// Common final step of every creation path
    fn persist_with_topic(&self, topic_id: TopicId, material: NewMaterial) -> AppResult<Material> {
        // 1. Topic must exist
        let topic = self
            .topic_repo
            .get_by_id(topic_id)?
            .ok_or_else(|| AppError::topic_not_found(topic_id))?;

        // 2. Attach and validate
        let draft = material.for_topic(topic.id);
        validate_material(&draft)?;

        // 3. Insert
        let saved = self.material_repo.insert(&draft)?;

        tracing::info!(
            material_id = saved.id,
            topic_id = saved.topic_id,
            material_type = %saved.material_type,
            "Material created"
        );

        Ok(saved)
    }
}
