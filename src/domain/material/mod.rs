pub mod entity;
pub mod invariants;
pub mod type_resolver;

pub use entity::{
    Material, MaterialDraft, MaterialId, MaterialType, NewMaterial, MAX_CONTENT_URL_LEN,
};
pub use invariants::{validate_material, validate_title};
pub use type_resolver::{TypeResolution, FALLBACK_MATERIAL_TYPE};
