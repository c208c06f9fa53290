// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Contains implementation details that support the domain
// but are not part of the domain itself.
//
// RULES:
// - Infrastructure serves the domain
// - Infrastructure never dictates domain behavior
// - Infrastructure is replaceable

pub mod file_storage;

pub use file_storage::{sanitize_file_name, FileStorage, LocalFileStorage, UPLOADS_URL_PREFIX};

#[cfg(test)]
pub use file_storage::MockFileStorage;
