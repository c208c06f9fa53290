// src/repositories/topic_repository.rs
//
// Topic lookup. Topics are owned by the course domain; this repository
// only reads them, plus an insert for seeding.

use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::topic::{Topic, TopicId};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait TopicRepository: Send + Sync {
    fn get_by_id(&self, id: TopicId) -> AppResult<Option<Topic>>;

    fn insert(&self, title: &str) -> AppResult<Topic>;
}

pub struct SqliteTopicRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteTopicRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_topic(row: &Row) -> rusqlite::Result<Topic> {
        Ok(Topic {
            id: row.get("topic_id")?,
            title: row.get("title")?,
        })
    }
}

impl TopicRepository for SqliteTopicRepository {
    fn get_by_id(&self, id: TopicId) -> AppResult<Option<Topic>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare("SELECT topic_id, title FROM topics WHERE topic_id = ?1")?;

        match stmt.query_row(params![id], Self::row_to_topic) {
            Ok(topic) => Ok(Some(topic)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn insert(&self, title: &str) -> AppResult<Topic> {
        let conn = self.pool.get()?;
        conn.execute("INSERT INTO topics (title) VALUES (?1)", params![title])?;

        Ok(Topic {
            id: conn.last_insert_rowid(),
            title: title.to_string(),
        })
    }
}
