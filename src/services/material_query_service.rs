// src/services/material_query_service.rs
//
// Material Query Service - lookup, listing and deletion

use std::sync::Arc;

use crate::domain::material::{Material, MaterialId};
use crate::domain::topic::{Topic, TopicId};
use crate::error::{AppError, AppResult};
use crate::repositories::{MaterialRepository, TopicRepository};

pub struct MaterialQueryService {
    material_repo: Arc<dyn MaterialRepository>,
    topic_repo: Arc<dyn TopicRepository>,
}

impl MaterialQueryService {
    pub fn new(
        material_repo: Arc<dyn MaterialRepository>,
        topic_repo: Arc<dyn TopicRepository>,
    ) -> Self {
        Self {
            material_repo,
            topic_repo,
        }
    }

    pub fn get_all_materials(&self) -> AppResult<Vec<Material>> {
        self.material_repo.list_all()
    }

    pub fn get_material_by_id(&self, id: MaterialId) -> AppResult<Material> {
        self.material_repo
            .get_by_id(id)?
            .ok_or_else(|| AppError::material_not_found(id))
    }

    /// Unknown topics yield an empty list, not an error
    pub fn get_materials_by_topic(&self, topic_id: TopicId) -> AppResult<Vec<Material>> {
        self.material_repo.list_by_topic(topic_id)
    }

    /// Hard delete. Deleting an id that does not exist succeeds.
    pub fn delete_material(&self, id: MaterialId) -> AppResult<()> {
        self.material_repo.delete(id)?;
        tracing::info!(material_id = id, "Material deleted");
        Ok(())
    }

    /// Resolve the owning topic of a material on demand
    pub fn get_material_topic(&self, id: MaterialId) -> AppResult<Topic> {
        let material = self.get_material_by_id(id)?;

        self.topic_repo
            .get_by_id(material.topic_id)?
            .ok_or_else(|| AppError::topic_not_found(material.topic_id))
    }
}
