// src/application/handlers/mod.rs
//
// HTTP Handlers
//
// ARCHITECTURE:
// - Handlers are thin adapters between HTTP and Services
// - Handlers accept DTOs, return DTOs
// - Handlers convert errors through AppError's IntoResponse
// - Handlers NEVER contain business logic

pub mod health_handlers;
pub mod material_handlers;

pub use health_handlers::*;
pub use material_handlers::*;
