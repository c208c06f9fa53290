// src/infrastructure/file_storage.rs
//
// File Storage Collaborator
//
// CRITICAL RULES:
// - Stored files are never overwritten (every write gets a fresh name)
// - Writes stay inside the storage root
// - The returned locator is the only handle callers keep

use std::fs;
use std::path::{Component, Path, PathBuf};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// URL prefix under which the storage root is served
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Name used when an upload carries no usable file name
const DEFAULT_FILE_NAME: &str = "upload";

/// Longest stem kept from a client file name
const MAX_STEM_LEN: usize = 100;

/// Longest suffix (after the last dot) treated as an extension
const MAX_EXTENSION_LEN: usize = 16;

/// Persists raw bytes and hands back a stable locator.
///
/// No partial-write guarantees: an I/O failure is reported, and whatever
/// may have reached disk is left for the backend to deal with.
#[cfg_attr(test, mockall::automock)]
pub trait FileStorage: Send + Sync {
    fn store(&self, bytes: &[u8], folder: &str, file_name: &str) -> AppResult<String>;
}

/// Stores files on local disk under `<root>/<folder>/<uuid>_<name>`
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    /// Create the storage, making sure the root directory exists
    pub fn new(root: PathBuf) -> AppResult<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Folder must be exactly one plain path segment
    fn validate_folder(folder: &str) -> AppResult<()> {
        let mut components = Path::new(folder).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(()),
            _ => Err(AppError::Other(format!(
                "Invalid storage folder: {:?}",
                folder
            ))),
        }
    }
}

impl FileStorage for LocalFileStorage {
    fn store(&self, bytes: &[u8], folder: &str, file_name: &str) -> AppResult<String> {
        Self::validate_folder(folder)?;

        let dir = self.root.join(folder);
        fs::create_dir_all(&dir)?;

        let stored_name = format!("{}_{}", Uuid::new_v4().simple(), sanitize_file_name(file_name));
        fs::write(dir.join(&stored_name), bytes)?;

        Ok(format!("{}/{}/{}", UPLOADS_URL_PREFIX, folder, stored_name))
    }
}

/// Reduce a client-supplied file name to a safe single segment.
///
/// Directory parts are dropped and anything outside `[A-Za-z0-9._-]`
/// becomes `_`. The stem is cut to `MAX_STEM_LEN` characters; a short
/// extension survives the cut.
pub fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches('.').is_empty() {
        DEFAULT_FILE_NAME.to_string()
    } else {
        truncate_stem(cleaned)
    }
}

// Input is ASCII after cleaning, so byte offsets are char offsets.
fn truncate_stem(name: String) -> String {
    let (stem, extension) = match name.rfind('.') {
        Some(dot) if dot > 0 && name.len() - dot - 1 <= MAX_EXTENSION_LEN => {
            name.split_at(dot)
        }
        _ => (name.as_str(), ""),
    };

    if stem.len() <= MAX_STEM_LEN {
        return name;
    }
    format!("{}{}", &stem[..MAX_STEM_LEN], extension)
}
