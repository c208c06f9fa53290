// src/repositories/material_repository.rs
//
// Material persistence
//
// All parse failures on read are explicit errors, never silent defaults.

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use std::str::FromStr;
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::material::{Material, MaterialDraft, MaterialId, MaterialType};
use crate::domain::topic::TopicId;
use crate::error::{AppError, AppResult};

// ---------------------------------------------------------------------
// Repository contract
// ---------------------------------------------------------------------
#[cfg_attr(test, mockall::automock)]
pub trait MaterialRepository: Send + Sync {
    /// Insert a draft and return it with the identifier the store assigned
    fn insert(&self, draft: &MaterialDraft) -> AppResult<Material>;

    fn get_by_id(&self, id: MaterialId) -> AppResult<Option<Material>>;

    fn list_all(&self) -> AppResult<Vec<Material>>;

    fn list_by_topic(&self, topic_id: TopicId) -> AppResult<Vec<Material>>;

    /// Remove the record if present. Missing ids are not an error.
    fn delete(&self, id: MaterialId) -> AppResult<()>;
}

pub struct SqliteMaterialRepository {
    pool: Arc<ConnectionPool>,
}

const SELECT_COLUMNS: &str =
    "SELECT material_id, title, material_type, content_url, topic_id, created_at FROM materials";

impl SqliteMaterialRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Material - returns rusqlite::Error for query_map compatibility
    fn row_to_material(row: &Row) -> rusqlite::Result<Material> {
        let type_str: String = row.get("material_type")?;
        let material_type = MaterialType::from_str(&type_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                rusqlite::types::Type::Text,
                Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
            )
        })?;

        let created_at_str: String = row.get("created_at")?;
        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    5,
                    rusqlite::types::Type::Text,
                    Box::new(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        format!("Invalid created_at timestamp '{}': {}", created_at_str, e),
                    )),
                )
            })?;

        Ok(Material {
            id: row.get("material_id")?,
            title: row.get("title")?,
            material_type,
            content_url: row.get("content_url")?,
            topic_id: row.get("topic_id")?,
            created_at,
        })
    }
}

// ---------------------------------------------------------------------
// SQLite Implementation
// ---------------------------------------------------------------------
impl MaterialRepository for SqliteMaterialRepository {
    fn insert(&self, draft: &MaterialDraft) -> AppResult<Material> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO materials (title, material_type, content_url, topic_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                draft.material.title,
                draft.material.material_type.as_str(),
                draft.material.content_url,
                draft.topic_id,
                draft.material.created_at.to_rfc3339(),
            ],
        )?;

        let id = conn.last_insert_rowid();
        Ok(draft.clone().into_material(id))
    }

    fn get_by_id(&self, id: MaterialId) -> AppResult<Option<Material>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("{} WHERE material_id = ?1", SELECT_COLUMNS))?;

        match stmt.query_row(params![id], Self::row_to_material) {
            Ok(material) => Ok(Some(material)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self) -> AppResult<Vec<Material>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY material_id ASC", SELECT_COLUMNS))?;

        let materials = stmt
            .query_map([], Self::row_to_material)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(materials)
    }

    fn list_by_topic(&self, topic_id: TopicId) -> AppResult<Vec<Material>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!(
            "{} WHERE topic_id = ?1 ORDER BY material_id ASC",
            SELECT_COLUMNS
        ))?;

        let materials = stmt
            .query_map(params![topic_id], Self::row_to_material)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(materials)
    }

    fn delete(&self, id: MaterialId) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute("DELETE FROM materials WHERE material_id = ?1", params![id])?;
        Ok(())
    }
}
