// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod material;
pub mod topic;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Material Domain
pub use material::{
    validate_material, Material, MaterialDraft, MaterialId, MaterialType, NewMaterial,
    TypeResolution, FALLBACK_MATERIAL_TYPE, MAX_CONTENT_URL_LEN,
};

// Topic (external owner)
pub use topic::{Topic, TopicId};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
