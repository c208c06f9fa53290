use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::topic::TopicId;

/// Repository-assigned material identifier
pub type MaterialId = i64;

/// Maximum length of `content_url`, in characters
pub const MAX_CONTENT_URL_LEN: usize = 5000;

/// A learning material attached to exactly one topic.
///
/// The owning topic is referenced by identifier only. Use
/// `MaterialQueryService::get_material_topic` to resolve it on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Assigned by the repository on insert, immutable afterwards
    pub id: MaterialId,

    /// Display name, stored exactly as given
    pub title: String,

    /// Kind of content
    pub material_type: MaterialType,

    /// Storage locator or external URL
    pub content_url: String,

    /// Owning topic
    pub topic_id: TopicId,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A material that has been built by an ingestion path but not yet persisted.
///
/// It carries no identifier and no topic. Both are attached by the
/// topic-association step right before insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMaterial {
    pub title: String,
    pub material_type: MaterialType,
    pub content_url: String,
    pub created_at: DateTime<Utc>,
}

/// A `NewMaterial` bound to its owning topic, ready for insert
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialDraft {
    pub material: NewMaterial,
    pub topic_id: TopicId,
}

/// Closed set of material kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaterialType {
    Pdf,
    Video,
    Image,
    Url,
}

impl NewMaterial {
    pub fn new(title: String, material_type: MaterialType, content_url: String) -> Self {
        Self {
            title,
            material_type,
            content_url,
            created_at: Utc::now(),
        }
    }

    /// Bind this material to a topic that has already been looked up
    pub fn for_topic(self, topic_id: TopicId) -> MaterialDraft {
        MaterialDraft {
            material: self,
            topic_id,
        }
    }
}

impl MaterialDraft {
    /// Attach the identifier the repository assigned on insert
    pub fn into_material(self, id: MaterialId) -> Material {
        Material {
            id,
            title: self.material.title,
            material_type: self.material.material_type,
            content_url: self.material.content_url,
            topic_id: self.topic_id,
            created_at: self.material.created_at,
        }
    }
}

impl MaterialType {
    pub const ALL: [MaterialType; 4] = [
        MaterialType::Pdf,
        MaterialType::Video,
        MaterialType::Image,
        MaterialType::Url,
    ];

    /// Upper-case name, as stored in the database and sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialType::Pdf => "PDF",
            MaterialType::Video => "VIDEO",
            MaterialType::Image => "IMAGE",
            MaterialType::Url => "URL",
        }
    }

    /// Folder that uploads of this kind are stored under.
    ///
    /// Lower-cased name with a plural suffix: `PDF` -> `pdfs`.
    pub fn storage_folder(&self) -> String {
        format!("{}s", self.as_str().to_lowercase())
    }
}

impl std::fmt::Display for MaterialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Strict, case-insensitive parse. Unknown names are an error here;
/// the lenient upload policy lives in `MaterialType::resolve`.
impl std::str::FromStr for MaterialType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        MaterialType::ALL
            .into_iter()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| format!("Unknown material type: {}", s))
    }
}
