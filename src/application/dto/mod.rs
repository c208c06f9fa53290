// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are the wire representation (camelCase JSON)
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs

use serde::{Deserialize, Serialize};

use crate::domain::{Material, MaterialType, Topic};
use crate::services::MaterialPayload;

// ============================================================================
// MATERIAL DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDto {
    pub material_id: i64,
    pub title: String,
    pub material_type: MaterialType,
    pub content_url: String,
    pub topic_id: i64,
    pub created_at: String,
}

/// JSON body of the direct-payload path.
///
/// `materialType` may be absent or null; the service rejects that.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaterialDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub material_type: Option<MaterialType>,
    #[serde(default)]
    pub content_url: String,
}

/// Fields of the URL path. Each may come from the query string or the
/// urlencoded body; the body wins when both carry a value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddUrlMaterialDto {
    pub title: Option<String>,
    pub url: Option<String>,
}

impl AddUrlMaterialDto {
    /// Fill fields missing from `self` with those of `fallback`
    pub fn or(self, fallback: AddUrlMaterialDto) -> Self {
        Self {
            title: self.title.or(fallback.title),
            url: self.url.or(fallback.url),
        }
    }
}

// ============================================================================
// TOPIC DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicDto {
    pub id: i64,
    pub title: String,
}

// ============================================================================
// HEALTH
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}

// ============================================================================
// CONVERSION HELPERS
// ============================================================================

impl From<Material> for MaterialDto {
    fn from(material: Material) -> Self {
        Self {
            material_id: material.id,
            title: material.title,
            material_type: material.material_type,
            content_url: material.content_url,
            topic_id: material.topic_id,
            created_at: material.created_at.to_rfc3339(),
        }
    }
}

impl From<Topic> for TopicDto {
    fn from(topic: Topic) -> Self {
        Self {
            id: topic.id,
            title: topic.title,
        }
    }
}

impl From<CreateMaterialDto> for MaterialPayload {
    fn from(dto: CreateMaterialDto) -> Self {
        Self {
            title: dto.title,
            material_type: dto.material_type,
            content_url: dto.content_url,
        }
    }
}
