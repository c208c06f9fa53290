use serde::{Deserialize, Serialize};

/// Topic identifier, owned by the course domain
pub type TopicId = i64;

/// The owning entity of a material.
///
/// Topics are managed elsewhere; this is the minimal shape materials need
/// to be associated with one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
}
